//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

/// Simulation time tracking.
///
/// `elapsed_ms` is the absolute simulation timeline: attack cooldowns are
/// stamped against it rather than accumulated per unit, so a paused
/// simulation never "owes" cooldown time on resume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each active tick).
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one tick of `dt_ms` milliseconds.
    pub fn advance(&mut self, dt_ms: f64) {
        self.tick += 1;
        self.elapsed_ms += dt_ms;
    }
}
