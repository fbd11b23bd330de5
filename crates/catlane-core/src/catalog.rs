//! The unit catalog — immutable stat templates for every archetype.
//!
//! Spawn requests arrive from the presentation boundary as type names, so
//! the catalog is keyed by name and lookups are fallible. Archetype data
//! is fixed at construction; instances copy stats at spawn time.

use std::collections::HashMap;

use serde::Serialize;

use crate::constants::DEFAULT_KILL_REWARD;
use crate::enums::UnitKind;

/// Catalog lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The requested type name is not in the catalog.
    #[error("unknown unit type: {0}")]
    UnknownUnitType(String),
}

/// Immutable stat template for a unit type.
#[derive(Debug, Clone, Serialize)]
pub struct UnitArchetype {
    pub kind: UnitKind,
    /// Display name for the presentation boundary.
    pub display_name: &'static str,
    pub description: &'static str,
    pub health: u32,
    pub damage: u32,
    /// Movement speed in lane units per second.
    pub speed: f64,
    /// Deployment cost; zero for enemy-only archetypes.
    pub cost: u32,
    pub attack_range: f64,
    pub attack_cooldown_ms: f64,
    /// Minimum time between successive deployments of this type.
    /// Enforced by the presentation boundary, not the simulation.
    pub deployment_cooldown_ms: f64,
    /// Money credited when this unit dies on the enemy team.
    pub kill_reward: u32,
    /// Footprint (width, height) in lane units.
    pub width: f64,
    pub height: f64,
}

/// The full archetype table. Built once at process start; no mutation API.
#[derive(Debug)]
pub struct UnitCatalog {
    archetypes: HashMap<&'static str, UnitArchetype>,
}

impl Default for UnitCatalog {
    fn default() -> Self {
        let mut archetypes = HashMap::new();
        for archetype in build_archetypes() {
            archetypes.insert(archetype.kind.name(), archetype);
        }
        Self { archetypes }
    }
}

impl UnitCatalog {
    /// Look up an archetype by type name.
    pub fn lookup(&self, name: &str) -> Result<&UnitArchetype, CatalogError> {
        self.archetypes
            .get(name)
            .ok_or_else(|| CatalogError::UnknownUnitType(name.to_string()))
    }

    /// Look up an archetype by kind. Infallible: every kind is in the table.
    pub fn get(&self, kind: UnitKind) -> &UnitArchetype {
        &self.archetypes[kind.name()]
    }

    /// All type names in the catalog.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.archetypes.keys().copied()
    }
}

/// The fixed archetype tuning table.
fn build_archetypes() -> Vec<UnitArchetype> {
    vec![
        UnitArchetype {
            kind: UnitKind::Basic,
            display_name: "Normal Cat",
            description: "Balanced frontline unit",
            health: 250,
            damage: 20,
            speed: 60.0,
            cost: 50,
            attack_range: 80.0,
            attack_cooldown_ms: 1230.0,
            deployment_cooldown_ms: 2000.0,
            kill_reward: DEFAULT_KILL_REWARD,
            width: 40.0,
            height: 40.0,
        },
        UnitArchetype {
            kind: UnitKind::Tank,
            display_name: "Tank Cat",
            description: "Very durable, weak attack",
            health: 1000,
            damage: 5,
            speed: 48.0,
            cost: 100,
            attack_range: 60.0,
            attack_cooldown_ms: 2230.0,
            deployment_cooldown_ms: 2000.0,
            kill_reward: DEFAULT_KILL_REWARD,
            width: 55.0,
            height: 55.0,
        },
        UnitArchetype {
            kind: UnitKind::Axe,
            display_name: "Axe Cat",
            description: "Fast, powerful attacker",
            health: 500,
            damage: 62,
            speed: 72.0,
            cost: 150,
            attack_range: 120.0,
            attack_cooldown_ms: 900.0,
            deployment_cooldown_ms: 2000.0,
            kill_reward: DEFAULT_KILL_REWARD,
            width: 55.0,
            height: 55.0,
        },
        UnitArchetype {
            kind: UnitKind::Doge,
            display_name: "Doge",
            description: "Basic enemy grunt",
            health: 90,
            damage: 8,
            speed: 30.0,
            cost: 0,
            attack_range: 80.0,
            attack_cooldown_ms: 1570.0,
            deployment_cooldown_ms: 0.0,
            kill_reward: 15,
            width: 40.0,
            height: 40.0,
        },
        UnitArchetype {
            kind: UnitKind::Hippoe,
            display_name: "Desert Hippoe",
            description: "Mid-boss: slow, devastating swings",
            health: 800,
            damage: 35,
            speed: 18.0,
            cost: 0,
            attack_range: 110.0,
            attack_cooldown_ms: 3500.0,
            deployment_cooldown_ms: 0.0,
            kill_reward: 70,
            width: 120.0,
            height: 120.0,
        },
        UnitArchetype {
            kind: UnitKind::Piggie,
            display_name: "Piggie Emperor",
            description: "Final boss: implacable siege engine",
            health: 2000,
            damage: 85,
            speed: 8.0,
            cost: 0,
            attack_range: 140.0,
            attack_cooldown_ms: 5000.0,
            deployment_cooldown_ms: 0.0,
            kill_reward: 150,
            width: 140.0,
            height: 140.0,
        },
    ]
}
