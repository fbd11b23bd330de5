//! Player commands sent from the presentation boundary to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Battle ---
    /// Deploy a unit: spend its cost and spawn it in front of the ally
    /// tower. Dropped silently if the type is unknown or unaffordable.
    Deploy { unit: String, x: f64 },
    /// Buy the next capacity level.
    UpgradeCapacity,

    // --- Stage flow ---
    /// Jump to an unlocked stage; rejected if locked.
    SelectStage { stage: u32 },
    /// Start (or restart) the current stage from scratch.
    StartStage,
    /// Move to the next stage after a victory.
    AdvanceStage,
    /// Reset the whole run: progression back to stage 1, unlocks cleared.
    RestartRun,

    // --- Simulation control ---
    Pause,
    Resume,
}
