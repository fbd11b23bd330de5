//! Entity spawn factories for the battle world.
//!
//! Units are assembled from their catalog archetype; stats are copied at
//! spawn so later catalog reads never affect live instances.

use hecs::{Entity, World};

use catlane_core::catalog::UnitCatalog;
use catlane_core::components::*;
use catlane_core::constants::*;
use catlane_core::enums::{Team, UnitKind};

/// Spawn a unit of `kind` for `team` at lane position `x`.
///
/// Basic enemies instantiated on stage `ENEMY_BUFF_STAGE` or later get
/// their health and damage multiplied once, at creation only.
pub fn spawn_unit(
    world: &mut World,
    catalog: &UnitCatalog,
    kind: UnitKind,
    team: Team,
    x: f64,
    stage: u32,
    next_unit_id: &mut u64,
) -> Entity {
    let archetype = catalog.get(kind);

    let mut health = archetype.health;
    let mut damage = archetype.damage;
    if team == Team::Enemy && kind == UnitKind::Doge && stage >= ENEMY_BUFF_STAGE {
        health = (health as f64 * ENEMY_BUFF_MULTIPLIER).round() as u32;
        damage = (damage as f64 * ENEMY_BUFF_MULTIPLIER).round() as u32;
    }

    let id = *next_unit_id;
    *next_unit_id += 1;

    world.spawn((
        UnitTag { id, kind, team },
        LanePos { x },
        Health::full(health),
        CombatStats {
            damage,
            speed: archetype.speed,
            attack_range: archetype.attack_range,
            attack_cooldown_ms: archetype.attack_cooldown_ms,
        },
        AttackState::default(),
        Footprint {
            width: archetype.width,
            height: archetype.height,
        },
    ))
}

/// Build both towers for a stage. The ally tower health is fixed; the
/// enemy tower health comes from the progression formula.
pub fn build_towers(enemy_tower_health: u32) -> Towers {
    Towers {
        ally: Tower::new(Team::Ally, ALLY_TOWER_HEALTH),
        enemy: Tower::new(Team::Enemy, enemy_tower_health),
    }
}
