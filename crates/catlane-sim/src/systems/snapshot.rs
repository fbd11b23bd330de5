//! Snapshot system: queries the world and builds a complete
//! `GameSnapshot` for the presentation boundary.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use catlane_core::components::{AttackState, Effect, Footprint, Health, LanePos, Tower, Towers, UnitTag};
use catlane_core::enums::{GamePhase, Team};
use catlane_core::events::GameEvent;
use catlane_core::state::*;
use catlane_core::types::SimTime;

use catlane_campaign::economy::Economy;

/// Build a complete snapshot from the current simulation state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    stage: u32,
    stage_name: &str,
    towers: &Towers,
    effects: &[Effect],
    economy: &Economy,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    let (ally_units, enemy_units) = build_units(world);

    GameSnapshot {
        time: *time,
        phase,
        stage,
        stage_name: stage_name.to_string(),
        towers: TowersView {
            ally: build_tower(&towers.ally),
            enemy: build_tower(&towers.enemy),
        },
        ally_units,
        enemy_units,
        effects: effects.iter().map(build_effect).collect(),
        economy: build_economy(economy),
        events,
    }
}

/// Build both unit view lists, sorted by spawn ordinal for stable output.
fn build_units(world: &World) -> (Vec<UnitView>, Vec<UnitView>) {
    let mut ally_units = Vec::new();
    let mut enemy_units = Vec::new();

    let mut query =
        world.query::<(&UnitTag, &LanePos, &Health, &AttackState, &Footprint)>();
    for (_entity, (tag, pos, health, attack, footprint)) in query.iter() {
        let view = UnitView {
            id: tag.id,
            kind: tag.kind,
            team: tag.team,
            x: pos.x,
            health: health.current,
            max_health: health.max,
            attacking: attack.engaged,
            width: footprint.width,
            height: footprint.height,
        };
        match tag.team {
            Team::Ally => ally_units.push(view),
            Team::Enemy => enemy_units.push(view),
        }
    }

    ally_units.sort_by_key(|unit| unit.id);
    enemy_units.sort_by_key(|unit| unit.id);
    (ally_units, enemy_units)
}

fn build_tower(tower: &Tower) -> TowerView {
    TowerView {
        x: tower.x,
        health: tower.health,
        max_health: tower.max_health,
    }
}

fn build_effect(effect: &Effect) -> EffectView {
    EffectView {
        kind: effect.kind,
        x: effect.x,
        elapsed_ms: effect.elapsed_ms,
        duration_ms: effect.duration_ms,
    }
}

fn build_economy(economy: &Economy) -> EconomyView {
    EconomyView {
        balance: economy.balance(),
        capacity: economy.capacity(),
        capacity_level: economy.capacity_level(),
        income_per_tick: economy.income_per_tick(),
        next_upgrade_cost: economy.upgrade_cost(),
    }
}
