//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Which side of the lane a unit or tower fights for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    #[default]
    Ally,
    Enemy,
}

impl Team {
    /// The opposing team.
    pub fn opponent(self) -> Team {
        match self {
            Team::Ally => Team::Enemy,
            Team::Enemy => Team::Ally,
        }
    }

    /// Sign of movement along the lane: allies advance toward decreasing x,
    /// enemies toward increasing x.
    pub fn advance_direction(self) -> f64 {
        match self {
            Team::Ally => -1.0,
            Team::Enemy => 1.0,
        }
    }
}

/// Unit archetype category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Balanced frontline unit.
    Basic,
    /// High health, low damage wall.
    Tank,
    /// Fast, hard-hitting attacker.
    Axe,
    /// Basic enemy grunt.
    Doge,
    /// Mid-boss: stage 3 feature, stages 4-5 reinforcement.
    Hippoe,
    /// Final boss, stage 6.
    Piggie,
}

impl UnitKind {
    /// The catalog key for this archetype.
    pub fn name(self) -> &'static str {
        match self {
            UnitKind::Basic => "basic",
            UnitKind::Tank => "tank",
            UnitKind::Axe => "axe",
            UnitKind::Doge => "doge",
            UnitKind::Hippoe => "hippoe",
            UnitKind::Piggie => "piggie",
        }
    }
}

/// Cosmetic effect category. Effects exist only for the presentation
/// boundary; nothing in the simulation consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    Spawn,
    Attack,
    Explosion,
}

/// Game phase (top-level engine state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Stage selected but not yet started.
    #[default]
    Briefing,
    /// Simulation running.
    Active,
    /// Simulation frozen; time does not advance.
    Paused,
    /// Enemy tower destroyed; awaiting advance/restart command.
    Victory,
    /// Ally tower destroyed; awaiting restart command.
    Defeat,
}
