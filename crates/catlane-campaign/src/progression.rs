//! The stage progression state machine.
//!
//! Tracks the current stage, per-stage difficulty parameters, completion,
//! and the monotonically growing set of unlocked stages. Unlocks persist
//! through `save_load`; failed writes are logged and otherwise ignored.

use std::collections::BTreeSet;
use std::path::PathBuf;

use catlane_core::constants::*;
use catlane_core::enums::UnitKind;
use catlane_core::events::GameEvent;

use crate::save_load::{self, Progress};

/// Stage selection failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProgressionError {
    #[error("stage {0} is locked")]
    StageLocked(u32),
}

/// Static per-stage configuration.
#[derive(Debug, Clone, Copy)]
pub struct StageConfig {
    pub name: &'static str,
    /// Types eligible for interval spawns. Stage 6 sequencing is special-
    /// cased in the spawner: the boss spawns first, then Doge reinforcements.
    pub enemy_pool: &'static [UnitKind],
}

/// The per-stage config table, indexed by stage 1..=6.
const STAGE_CONFIGS: [StageConfig; MAX_STAGE as usize] = [
    StageConfig {
        name: "Stage 1 - Forest",
        enemy_pool: &[UnitKind::Doge],
    },
    StageConfig {
        name: "Stage 2 - Plains",
        enemy_pool: &[UnitKind::Doge],
    },
    StageConfig {
        name: "Stage 3 - Desert",
        enemy_pool: &[UnitKind::Hippoe],
    },
    StageConfig {
        name: "Stage 4 - Coast",
        enemy_pool: &[UnitKind::Doge],
    },
    StageConfig {
        name: "Stage 5 - Festival",
        enemy_pool: &[UnitKind::Doge],
    },
    StageConfig {
        name: "Stage 6 - The Peak",
        enemy_pool: &[UnitKind::Piggie, UnitKind::Doge],
    },
];

/// Look up the config for a stage (1-based).
pub fn stage_config(stage: u32) -> &'static StageConfig {
    &STAGE_CONFIGS[(stage.clamp(1, MAX_STAGE) - 1) as usize]
}

/// Campaign position and unlock state. The current stage is always a
/// member of the unlocked set.
#[derive(Debug)]
pub struct Progression {
    current_stage: u32,
    completed: bool,
    unlocked: BTreeSet<u32>,
    save_path: Option<PathBuf>,
}

impl Progression {
    /// Create a progression, loading persisted unlocks from `save_path`
    /// when given. `None` disables persistence entirely.
    pub fn new(save_path: Option<PathBuf>) -> Self {
        let mut unlocked: BTreeSet<u32> = match &save_path {
            Some(path) => save_load::load_progress(path).unlocked_stages.into_iter().collect(),
            None => BTreeSet::new(),
        };
        unlocked.insert(1);
        Self {
            current_stage: 1,
            completed: false,
            unlocked,
            save_path,
        }
    }

    pub fn current_stage(&self) -> u32 {
        self.current_stage
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_last_stage(&self) -> bool {
        self.current_stage >= MAX_STAGE
    }

    pub fn is_boss_stage(&self) -> bool {
        BOSS_STAGES.contains(&self.current_stage)
    }

    pub fn is_unlocked(&self, stage: u32) -> bool {
        self.unlocked.contains(&stage)
    }

    /// Unlocked stages in ascending order.
    pub fn unlocked_stages(&self) -> Vec<u32> {
        self.unlocked.iter().copied().collect()
    }

    pub fn stage_name(&self) -> &'static str {
        stage_config(self.current_stage).name
    }

    pub fn enemy_pool(&self) -> &'static [UnitKind] {
        stage_config(self.current_stage).enemy_pool
    }

    /// Steady-state enemy spawn interval for the current stage.
    ///
    /// Boss stages use fixed cadences; all others shrink 10% per stage
    /// from the base delay. No floor is applied: the formula is only
    /// evaluated for stages 1..=6, where it stays positive.
    pub fn spawn_delay_ms(&self) -> f64 {
        match self.current_stage {
            6 => STAGE6_SPAWN_DELAY_MS,
            3 => STAGE3_SPAWN_DELAY_MS,
            stage => {
                let factor = 1.0 - SPAWN_DELAY_REDUCTION_PER_STAGE * (stage - 1) as f64;
                (BASE_SPAWN_DELAY_MS * factor).round()
            }
        }
    }

    /// Enemy tower max health for the current stage: +10% per stage.
    pub fn enemy_tower_health(&self) -> u32 {
        let factor = 1.0 + TOWER_HEALTH_GROWTH_PER_STAGE * (self.current_stage - 1) as f64;
        (BASE_ENEMY_TOWER_HEALTH as f64 * factor).round() as u32
    }

    /// Handle the enemy tower's destruction: mark the stage complete,
    /// unlock the next stage, and emit the completion events in order
    /// (unlock strictly first). Idempotent within a stage.
    pub fn on_enemy_tower_destroyed(&mut self, events: &mut Vec<GameEvent>) {
        if self.completed {
            return;
        }
        self.completed = true;

        let next = self.current_stage + 1;
        if next <= MAX_STAGE && self.unlocked.insert(next) {
            self.persist();
            events.push(GameEvent::StageUnlocked { stage: next });
        }

        events.push(GameEvent::StageCompleted {
            stage: self.current_stage,
        });

        if self.is_last_stage() {
            events.push(GameEvent::GameCompleted);
        }
    }

    /// Move to the next stage. Legal only when the current stage is
    /// complete and not the last; returns whether the move happened.
    pub fn advance(&mut self) -> bool {
        if self.completed && !self.is_last_stage() {
            self.current_stage += 1;
            self.completed = false;
            true
        } else {
            false
        }
    }

    /// Jump directly to an unlocked stage.
    pub fn select_stage(&mut self, stage: u32) -> Result<(), ProgressionError> {
        if !self.is_unlocked(stage) {
            return Err(ProgressionError::StageLocked(stage));
        }
        self.current_stage = stage;
        self.completed = false;
        Ok(())
    }

    /// Reset the run: back to stage 1 with only stage 1 unlocked.
    pub fn reset(&mut self) {
        self.current_stage = 1;
        self.completed = false;
        self.unlocked.clear();
        self.unlocked.insert(1);
        self.persist();
    }

    /// Best-effort write of the unlock set. Failures are logged and do
    /// not propagate: persistence must never fail a tick.
    fn persist(&self) {
        let Some(path) = &self.save_path else {
            return;
        };
        let progress = Progress {
            unlocked_stages: self.unlocked_stages(),
        };
        if let Err(err) = save_load::save_progress(path, &progress) {
            log::warn!("failed to persist progress to {}: {err}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Progression {
        Progression::new(None)
    }

    #[test]
    fn starts_at_stage_one_with_only_it_unlocked() {
        let progression = fresh();
        assert_eq!(progression.current_stage(), 1);
        assert!(progression.is_unlocked(1));
        assert!(!progression.is_unlocked(2));
        assert_eq!(progression.unlocked_stages(), vec![1]);
    }

    #[test]
    fn tower_health_scales_per_stage() {
        let mut progression = fresh();
        assert_eq!(progression.enemy_tower_health(), 1000);
        for (stage, expected) in [(2, 1100), (3, 1200), (4, 1300), (5, 1400), (6, 1500)] {
            let mut events = Vec::new();
            progression.on_enemy_tower_destroyed(&mut events);
            assert!(progression.advance());
            assert_eq!(progression.current_stage(), stage);
            assert_eq!(progression.enemy_tower_health(), expected);
        }
    }

    #[test]
    fn spawn_delay_per_stage() {
        let mut progression = fresh();
        let expected = [
            (1, 6000.0),
            (2, 5400.0),
            (3, 15000.0),
            (4, 4200.0),
            (5, 3600.0),
            (6, 6000.0),
        ];
        for (stage, delay) in expected {
            if stage > 1 {
                let mut events = Vec::new();
                progression.on_enemy_tower_destroyed(&mut events);
                assert!(progression.advance());
            }
            assert_eq!(progression.current_stage(), stage);
            assert_eq!(progression.spawn_delay_ms(), delay);
        }
    }

    #[test]
    fn completion_unlocks_next_stage_first() {
        let mut progression = fresh();
        let mut events = Vec::new();
        progression.on_enemy_tower_destroyed(&mut events);
        assert_eq!(
            events,
            vec![
                GameEvent::StageUnlocked { stage: 2 },
                GameEvent::StageCompleted { stage: 1 },
            ]
        );
        assert!(progression.is_unlocked(2));
    }

    #[test]
    fn completion_is_idempotent_within_stage() {
        let mut progression = fresh();
        let mut events = Vec::new();
        progression.on_enemy_tower_destroyed(&mut events);
        progression.on_enemy_tower_destroyed(&mut events);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn final_stage_completion_emits_game_completed() {
        let mut progression = fresh();
        for _ in 1..MAX_STAGE {
            let mut events = Vec::new();
            progression.on_enemy_tower_destroyed(&mut events);
            assert!(progression.advance());
        }
        assert_eq!(progression.current_stage(), 6);
        let mut events = Vec::new();
        progression.on_enemy_tower_destroyed(&mut events);
        // No stage 7 to unlock.
        assert_eq!(
            events,
            vec![
                GameEvent::StageCompleted { stage: 6 },
                GameEvent::GameCompleted,
            ]
        );
        // Cannot advance past the last stage.
        assert!(!progression.advance());
        assert_eq!(progression.current_stage(), 6);
    }

    #[test]
    fn advance_requires_completion() {
        let mut progression = fresh();
        assert!(!progression.advance());
        assert_eq!(progression.current_stage(), 1);
    }

    #[test]
    fn select_locked_stage_rejected() {
        let mut progression = fresh();
        assert_eq!(
            progression.select_stage(3),
            Err(ProgressionError::StageLocked(3))
        );
        assert_eq!(progression.current_stage(), 1);
    }

    #[test]
    fn select_unlocked_stage_jumps() {
        let mut progression = fresh();
        let mut events = Vec::new();
        progression.on_enemy_tower_destroyed(&mut events);
        assert!(progression.advance());
        assert_eq!(progression.current_stage(), 2);
        progression.select_stage(1).unwrap();
        assert_eq!(progression.current_stage(), 1);
        assert!(!progression.is_completed());
    }

    #[test]
    fn reset_restores_initial_unlocks() {
        let mut progression = fresh();
        let mut events = Vec::new();
        progression.on_enemy_tower_destroyed(&mut events);
        assert!(progression.advance());
        progression.reset();
        assert_eq!(progression.current_stage(), 1);
        assert_eq!(progression.unlocked_stages(), vec![1]);
    }

    #[test]
    fn unlocks_persist_across_instances() {
        let dir = std::env::temp_dir().join("catlane_test_progression_persist");
        let _ = std::fs::remove_dir_all(&dir);
        let path = dir.join("progress.json");

        let mut progression = Progression::new(Some(path.clone()));
        let mut events = Vec::new();
        progression.on_enemy_tower_destroyed(&mut events);
        assert!(progression.is_unlocked(2));

        let reloaded = Progression::new(Some(path));
        assert!(reloaded.is_unlocked(2));
        assert_eq!(reloaded.current_stage(), 1);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn boss_stage_flags() {
        let mut progression = fresh();
        let boss_flags = [false, false, true, false, false, true];
        for (i, expected) in boss_flags.iter().enumerate() {
            let stage = i as u32 + 1;
            if stage > 1 {
                let mut events = Vec::new();
                progression.on_enemy_tower_destroyed(&mut events);
                assert!(progression.advance());
            }
            assert_eq!(progression.is_boss_stage(), *expected, "stage {stage}");
        }
    }

    #[test]
    fn enemy_pools_match_stage_table() {
        assert_eq!(stage_config(1).enemy_pool, &[UnitKind::Doge]);
        assert_eq!(stage_config(3).enemy_pool, &[UnitKind::Hippoe]);
        assert_eq!(
            stage_config(6).enemy_pool,
            &[UnitKind::Piggie, UnitKind::Doge]
        );
    }
}
