//! Simulation engine — the core of the game.
//!
//! `BattleEngine` owns the hecs world, the towers, the economy and
//! progression state, processes player commands at tick boundaries, runs
//! all systems, and produces `GameSnapshot`s. One engine is one run: a
//! fresh run is a fresh engine, so there is no partial teardown.

use std::collections::VecDeque;
use std::path::PathBuf;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use catlane_core::catalog::{CatalogError, UnitCatalog};
use catlane_core::commands::PlayerCommand;
use catlane_core::components::{Effect, Towers};
use catlane_core::enums::{EffectKind, GamePhase, Team};
use catlane_core::events::GameEvent;
use catlane_core::state::GameSnapshot;
use catlane_core::types::SimTime;

use catlane_campaign::economy::Economy;
use catlane_campaign::progression::Progression;

use crate::systems;
use crate::systems::spawner::SpawnState;
use crate::world_setup;

/// Configuration for starting a new engine.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same commands = same run.
    pub seed: u64,
    /// Where unlock progress is persisted; `None` disables persistence.
    pub save_path: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            save_path: None,
        }
    }
}

/// The simulation engine. Owns the ECS world and all battle state.
pub struct BattleEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    catalog: UnitCatalog,
    economy: Economy,
    progression: Progression,
    rng: ChaCha8Rng,
    towers: Towers,
    effects: Vec<Effect>,
    events: Vec<GameEvent>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    spawn_state: SpawnState,
    next_unit_id: u64,
    last_balance: u32,
}

impl BattleEngine {
    /// Create a new engine with the given config, at stage 1 (or wherever
    /// persisted progress allows the player to jump), awaiting `StartStage`.
    pub fn new(config: SimConfig) -> Self {
        let progression = Progression::new(config.save_path);
        let economy = Economy::default();
        let towers = world_setup::build_towers(progression.enemy_tower_health());
        let last_balance = economy.balance();
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            catalog: UnitCatalog::default(),
            economy,
            progression,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            towers,
            effects: Vec::new(),
            events: Vec::new(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            spawn_state: SpawnState::default(),
            next_unit_id: 0,
            last_balance,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt_ms` milliseconds and return the
    /// resulting snapshot. Commands are processed first; nothing moves
    /// unless the engine is `Active`.
    pub fn tick(&mut self, dt_ms: f64) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.time.advance(dt_ms);
            self.run_systems(dt_ms);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.progression.current_stage(),
            self.progression.stage_name(),
            &self.towers,
            &self.effects,
            &self.economy,
            events,
        )
    }

    /// Spawn an ally unit at `x` without touching the economy. Cost
    /// deduction is the caller's responsibility; the `Deploy` command
    /// composes the two atomically.
    pub fn spawn_ally_unit(&mut self, unit: &str, x: f64) -> Result<(), CatalogError> {
        let kind = self.catalog.lookup(unit)?.kind;
        world_setup::spawn_unit(
            &mut self.world,
            &self.catalog,
            kind,
            Team::Ally,
            x,
            self.progression.current_stage(),
            &mut self.next_unit_id,
        );
        self.effects.push(Effect::new(EffectKind::Spawn, x));
        Ok(())
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn towers(&self) -> &Towers {
        &self.towers
    }

    /// Jump to a stage directly and start it (for tests).
    #[cfg(test)]
    pub fn force_stage(&mut self, stage: u32) {
        let mut scratch = Vec::new();
        while self.progression.current_stage() < stage {
            self.progression.on_enemy_tower_destroyed(&mut scratch);
            if !self.progression.advance() {
                break;
            }
        }
        self.economy.reset_for_next_stage();
        self.setup_stage();
        self.phase = GamePhase::Active;
    }

    /// Spawn an enemy unit directly (for tests).
    #[cfg(test)]
    pub fn spawn_enemy_unit(&mut self, kind: catlane_core::enums::UnitKind, x: f64) {
        world_setup::spawn_unit(
            &mut self.world,
            &self.catalog,
            kind,
            Team::Enemy,
            x,
            self.progression.current_stage(),
            &mut self.next_unit_id,
        );
    }

    /// Get a mutable reference to the towers (for tests).
    #[cfg(test)]
    pub fn towers_mut(&mut self) -> &mut Towers {
        &mut self.towers
    }

    /// Get a mutable reference to the ECS world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Rebuild the battle for the current stage: fresh entity registry,
    /// fresh towers from the progression formulas, cleared timers and
    /// one-shot flags. The sim clock keeps running — attack cooldowns
    /// are stamped against the absolute timeline.
    fn setup_stage(&mut self) {
        self.world.clear();
        self.effects.clear();
        self.events.clear();
        self.despawn_buffer.clear();
        self.spawn_state = SpawnState::default();
        self.towers = world_setup::build_towers(self.progression.enemy_tower_health());
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Illegal commands degrade to a
    /// logged no-op; none of them can corrupt the tick.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Deploy { unit, x } => {
                if self.phase != GamePhase::Active {
                    return;
                }
                let cost = match self.catalog.lookup(&unit) {
                    Ok(archetype) => archetype.cost,
                    Err(err) => {
                        log::warn!("deploy dropped: {err}");
                        return;
                    }
                };
                if !self.economy.spend(cost) {
                    log::debug!("deploy dropped: cannot afford {unit} ({cost})");
                    return;
                }
                // Lookup succeeded above, so the spawn cannot fail.
                let _ = self.spawn_ally_unit(&unit, x);
            }
            PlayerCommand::UpgradeCapacity => match self.economy.upgrade_capacity_level() {
                Ok(()) => self.events.push(GameEvent::CapacityLevelChanged {
                    level: self.economy.capacity_level(),
                    next_cost: self.economy.upgrade_cost(),
                }),
                Err(err) => log::debug!("capacity upgrade dropped: {err}"),
            },
            PlayerCommand::SelectStage { stage } => {
                match self.progression.select_stage(stage) {
                    Ok(()) => {
                        self.economy.reset_for_next_stage();
                        self.setup_stage();
                        self.phase = GamePhase::Briefing;
                    }
                    Err(err) => log::warn!("stage selection dropped: {err}"),
                }
            }
            PlayerCommand::StartStage => {
                if matches!(
                    self.phase,
                    GamePhase::Briefing | GamePhase::Victory | GamePhase::Defeat
                ) {
                    // Re-selecting the current stage clears its completion
                    // flag when a finished stage is replayed.
                    let current = self.progression.current_stage();
                    let _ = self.progression.select_stage(current);
                    self.economy.reset_for_next_stage();
                    self.setup_stage();
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::AdvanceStage => {
                if self.phase == GamePhase::Victory && self.progression.advance() {
                    self.economy.reset_for_next_stage();
                    self.setup_stage();
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::RestartRun => {
                self.progression.reset();
                self.economy.reset_full();
                self.setup_stage();
                self.phase = GamePhase::Active;
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt_ms: f64) {
        // 1. Passive income
        self.economy.tick(dt_ms);
        // 2. Enemy spawn policy
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &self.catalog,
            &self.progression,
            &mut self.spawn_state,
            dt_ms,
            &mut self.next_unit_id,
        );
        // 3. Targeting
        systems::targeting::run(&mut self.world, &self.towers);
        // 4. Attack resolution
        systems::combat::run(
            &mut self.world,
            &mut self.towers,
            self.time.elapsed_ms,
            &mut self.effects,
        );
        // 5. Movement
        systems::movement::run(&mut self.world, dt_ms);
        // 6. Scripted reinforcement (depends on tower damage from combat)
        systems::spawner::run_reinforcement(
            &mut self.world,
            &self.catalog,
            &self.progression,
            &self.towers,
            &mut self.spawn_state,
            &mut self.effects,
            &mut self.next_unit_id,
        );
        // 7. Death rewards + escape cleanup
        systems::cleanup::run(
            &mut self.world,
            &self.catalog,
            &mut self.economy,
            &mut self.effects,
            &mut self.despawn_buffer,
        );
        // 8. Effect aging
        systems::effects::run(&mut self.effects, dt_ms);
        // 9. Stage outcome
        self.check_outcome();
        // 10. Balance diff notification
        if self.economy.balance() != self.last_balance {
            self.last_balance = self.economy.balance();
            self.events.push(GameEvent::MoneyChanged {
                balance: self.last_balance,
            });
        }
    }

    /// End the stage when either tower falls. On victory the next-stage
    /// unlock is applied (and its event emitted) before the outcome
    /// event, so observers always see the unlock first.
    fn check_outcome(&mut self) {
        if self.towers.ally.is_destroyed() {
            self.effects
                .push(Effect::new(EffectKind::Explosion, self.towers.ally.x));
            self.phase = GamePhase::Defeat;
            self.events.push(GameEvent::StageOutcome { victory: false });
        } else if self.towers.enemy.is_destroyed() {
            self.progression.on_enemy_tower_destroyed(&mut self.events);
            self.effects
                .push(Effect::new(EffectKind::Explosion, self.towers.enemy.x));
            self.phase = GamePhase::Victory;
            self.events.push(GameEvent::StageOutcome { victory: true });
        }
    }
}
