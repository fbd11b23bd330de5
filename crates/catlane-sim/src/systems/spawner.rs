//! Enemy spawn policy: timed interval spawns plus the damage-triggered
//! mid-boss reinforcement.
//!
//! A one-time initial delay must elapse before the first spawn cycle
//! begins; it is tracked separately from the steady-state interval so a
//! stage change never spawns an enemy on its first frame.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use catlane_core::catalog::UnitCatalog;
use catlane_core::components::{Effect, Towers, UnitTag};
use catlane_core::constants::*;
use catlane_core::enums::{EffectKind, Team, UnitKind};

use catlane_campaign::progression::Progression;

use crate::world_setup;

/// Per-stage spawn timers and one-shot flags. Reset wholesale when a
/// stage is (re)built.
#[derive(Debug, Clone, Default)]
pub struct SpawnState {
    /// Elapsed-time accumulator driving both the initial delay and the
    /// steady-state interval.
    pub timer_ms: f64,
    pub initial_delay_passed: bool,
    /// Whether the damage-triggered reinforcement has fired this stage.
    pub reinforcement_sent: bool,
}

/// Advance the spawn timer and spawn one enemy when the interval elapses.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    catalog: &UnitCatalog,
    progression: &Progression,
    state: &mut SpawnState,
    dt_ms: f64,
    next_unit_id: &mut u64,
) {
    state.timer_ms += dt_ms;

    if !state.initial_delay_passed {
        if state.timer_ms >= INITIAL_SPAWN_DELAY_MS {
            state.initial_delay_passed = true;
            state.timer_ms = 0.0;
        }
        return;
    }

    if state.timer_ms < progression.spawn_delay_ms() {
        return;
    }
    state.timer_ms = 0.0;

    spawn_wave_unit(world, rng, catalog, progression, next_unit_id);
}

/// Spawn one unit according to the current stage's policy.
fn spawn_wave_unit(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    catalog: &UnitCatalog,
    progression: &Progression,
    next_unit_id: &mut u64,
) {
    let stage = progression.current_stage();
    let x = ENEMY_TOWER_X + ENEMY_SPAWN_OFFSET;

    // Stage 6 sequencing: the boss spawns while absent; once it is on the
    // lane, intervals send basic reinforcements instead of re-rolling it.
    if stage == MAX_STAGE {
        let boss_alive = {
            let mut query = world.query::<&UnitTag>();
            query
                .iter()
                .any(|(_, tag)| tag.team == Team::Enemy && tag.kind == UnitKind::Piggie)
        };
        let kind = if boss_alive {
            UnitKind::Doge
        } else {
            UnitKind::Piggie
        };
        world_setup::spawn_unit(world, catalog, kind, Team::Enemy, x, stage, next_unit_id);
        return;
    }

    let pool = progression.enemy_pool();
    let kind = pool[rng.gen_range(0..pool.len())];
    world_setup::spawn_unit(world, catalog, kind, Team::Enemy, x, stage, next_unit_id);
}

/// Fire the scripted mid-boss reinforcement: on stages 4-5 only, exactly
/// once per stage, the first time cumulative enemy-tower damage reaches
/// the trigger threshold.
pub fn run_reinforcement(
    world: &mut World,
    catalog: &UnitCatalog,
    progression: &Progression,
    towers: &Towers,
    state: &mut SpawnState,
    effects: &mut Vec<Effect>,
    next_unit_id: &mut u64,
) {
    if state.reinforcement_sent {
        return;
    }
    if !REINFORCEMENT_STAGES.contains(&progression.current_stage()) {
        return;
    }
    if towers.enemy.damage_taken() < REINFORCEMENT_TRIGGER_DAMAGE {
        return;
    }

    state.reinforcement_sent = true;
    let x = ENEMY_TOWER_X + ENEMY_SPAWN_OFFSET;
    world_setup::spawn_unit(
        world,
        catalog,
        UnitKind::Hippoe,
        Team::Enemy,
        x,
        progression.current_stage(),
        next_unit_id,
    );
    effects.push(Effect::new(EffectKind::Spawn, x));
}
