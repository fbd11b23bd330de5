//! Events emitted by the simulation for the presentation boundary.
//!
//! These replace per-field change callbacks: the engine buffers events
//! during a tick and drains them into the snapshot, preserving emission
//! order. On victory, `StageUnlocked` is emitted strictly before
//! `StageOutcome` so observers see the unlock already applied.

use serde::{Deserialize, Serialize};

/// Notifications drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The money balance changed this tick.
    MoneyChanged { balance: u32 },
    /// The capacity ladder advanced. `next_cost` is `None` at max level.
    CapacityLevelChanged { level: u32, next_cost: Option<u32> },
    /// A new stage was added to the unlocked set.
    StageUnlocked { stage: u32 },
    /// The current stage was completed (enemy tower destroyed).
    StageCompleted { stage: u32 },
    /// The final stage was completed.
    GameCompleted,
    /// The stage ended. Always emitted after any unlock/completion events.
    StageOutcome { victory: bool },
}
