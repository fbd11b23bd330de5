//! Game state snapshot — the complete visible state returned to the
//! presentation boundary after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete read-only view of the simulation after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub stage: u32,
    pub stage_name: String,
    pub towers: TowersView,
    pub ally_units: Vec<UnitView>,
    pub enemy_units: Vec<UnitView>,
    pub effects: Vec<EffectView>,
    pub economy: EconomyView,
    /// Events raised during this tick, in emission order.
    pub events: Vec<GameEvent>,
}

/// Both towers for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TowersView {
    pub ally: TowerView,
    pub enemy: TowerView,
}

/// One tower for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TowerView {
    pub x: f64,
    pub health: u32,
    pub max_health: u32,
}

/// A visible unit on the lane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitView {
    /// Stable spawn ordinal; views are sorted by it.
    pub id: u64,
    pub kind: UnitKind,
    pub team: Team,
    pub x: f64,
    pub health: u32,
    pub max_health: u32,
    /// True when stopped and attacking, false when advancing.
    pub attacking: bool,
    pub width: f64,
    pub height: f64,
}

/// A visible cosmetic effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectView {
    pub kind: EffectKind,
    pub x: f64,
    pub elapsed_ms: f64,
    pub duration_ms: f64,
}

/// Economy state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EconomyView {
    pub balance: u32,
    pub capacity: u32,
    pub capacity_level: u32,
    pub income_per_tick: u32,
    /// Cost of the next capacity level; `None` at max level.
    pub next_upgrade_cost: Option<u32>,
}
