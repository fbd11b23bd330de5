//! ECS components for hecs entities, plus the plain tower/effect data
//! owned directly by the engine.
//!
//! Components are plain data structs with no methods. Game logic lives in
//! systems, not components. Target links are `hecs::Entity` handles — a
//! lookup into the registry, never a live reference — so removal during a
//! tick cannot dangle.

use hecs::Entity;

use crate::constants::*;
use crate::enums::{EffectKind, Team, UnitKind};

/// Scalar lane coordinate. The lane is one-dimensional; x is the only
/// meaningful spatial dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanePos {
    pub x: f64,
}

/// Current and maximum health.
#[derive(Debug, Clone, Copy)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Apply damage, saturating at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }
}

/// Combat parameters copied from the archetype at spawn. The stage-4+
/// buff is applied to these copies at instantiation only.
#[derive(Debug, Clone, Copy)]
pub struct CombatStats {
    pub damage: u32,
    /// Lane units per second.
    pub speed: f64,
    pub attack_range: f64,
    pub attack_cooldown_ms: f64,
}

/// What a unit is currently attacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// An opposing unit, by registry handle.
    Unit(Entity),
    /// The opposing tower.
    Tower,
}

/// Per-unit combat state: target link, mode flag, and the absolute
/// timestamp of the last attack. `None` means the unit has never
/// attacked and may swing immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttackState {
    pub last_attack_ms: Option<f64>,
    pub target: Option<Target>,
    /// True when stopped and attacking; false when advancing.
    pub engaged: bool,
}

/// Identity of a unit: stable ordinal, archetype, team.
#[derive(Debug, Clone, Copy)]
pub struct UnitTag {
    /// Monotonic spawn ordinal, unique within an engine's lifetime.
    pub id: u64,
    pub kind: UnitKind,
    pub team: Team,
}

/// Display footprint, copied from the archetype (bosses override it).
#[derive(Debug, Clone, Copy)]
pub struct Footprint {
    pub width: f64,
    pub height: f64,
}

/// A stationary tower. One per team; created at stage start and reset
/// between stages, never destroyed mid-stage.
#[derive(Debug, Clone)]
pub struct Tower {
    pub team: Team,
    pub x: f64,
    pub health: u32,
    pub max_health: u32,
}

impl Tower {
    pub fn new(team: Team, max_health: u32) -> Self {
        let x = match team {
            Team::Ally => ALLY_TOWER_X,
            Team::Enemy => ENEMY_TOWER_X,
        };
        Self {
            team,
            x,
            health: max_health,
            max_health,
        }
    }

    /// Apply damage, saturating at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Cumulative damage this tower has absorbed this stage.
    pub fn damage_taken(&self) -> u32 {
        self.max_health - self.health
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }
}

/// The two towers of a stage.
#[derive(Debug, Clone)]
pub struct Towers {
    pub ally: Tower,
    pub enemy: Tower,
}

impl Towers {
    pub fn get(&self, team: Team) -> &Tower {
        match team {
            Team::Ally => &self.ally,
            Team::Enemy => &self.enemy,
        }
    }

    pub fn get_mut(&mut self, team: Team) -> &mut Tower {
        match team {
            Team::Ally => &mut self.ally,
            Team::Enemy => &mut self.enemy,
        }
    }
}

/// A transient cosmetic effect. Owned by the engine, aged each tick,
/// removed once elapsed reaches its duration.
#[derive(Debug, Clone)]
pub struct Effect {
    pub kind: EffectKind,
    pub x: f64,
    pub elapsed_ms: f64,
    pub duration_ms: f64,
}

impl Effect {
    pub fn new(kind: EffectKind, x: f64) -> Self {
        let duration_ms = match kind {
            EffectKind::Attack => ATTACK_EFFECT_DURATION_MS,
            EffectKind::Spawn => SPAWN_EFFECT_DURATION_MS,
            EffectKind::Explosion => EXPLOSION_EFFECT_DURATION_MS,
        };
        Self {
            kind,
            x,
            elapsed_ms: 0.0,
            duration_ms,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}
