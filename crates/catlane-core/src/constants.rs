//! Simulation constants and tuning parameters.

// --- Lane geometry ---

/// Lane length in lane units. Units escaping past either end are removed.
pub const LANE_LENGTH: f64 = 1200.0;

/// Enemy tower x position (left end of the lane).
pub const ENEMY_TOWER_X: f64 = 100.0;

/// Ally tower x position (right end of the lane).
pub const ALLY_TOWER_X: f64 = LANE_LENGTH - 100.0;

/// Offset from the enemy tower at which enemy units spawn.
pub const ENEMY_SPAWN_OFFSET: f64 = 50.0;

/// Tower footprint (width, height) in lane units.
pub const TOWER_WIDTH: f64 = 80.0;
pub const TOWER_HEIGHT: f64 = 120.0;

// --- Towers ---

/// Ally tower health, fixed across all stages.
pub const ALLY_TOWER_HEALTH: u32 = 1000;

/// Base enemy tower health at stage 1; scaled +10% per stage.
pub const BASE_ENEMY_TOWER_HEALTH: u32 = 1000;

/// Per-stage enemy tower health growth.
pub const TOWER_HEALTH_GROWTH_PER_STAGE: f64 = 0.10;

/// Distance within which a tower becomes a targeting candidate.
pub const TOWER_ACQUISITION_RANGE: f64 = 80.0;

// --- Enemy spawning ---

/// Base interval between enemy spawns at stage 1 (ms); reduced 10% per stage.
pub const BASE_SPAWN_DELAY_MS: f64 = 6000.0;

/// Per-stage spawn delay reduction.
pub const SPAWN_DELAY_REDUCTION_PER_STAGE: f64 = 0.10;

/// One-time delay before the first spawn cycle of a stage (ms).
pub const INITIAL_SPAWN_DELAY_MS: f64 = 3000.0;

/// Fixed spawn interval on the stage-3 boss stage (ms).
pub const STAGE3_SPAWN_DELAY_MS: f64 = 15000.0;

/// Fixed reinforcement cadence on stage 6 once the boss is present (ms).
pub const STAGE6_SPAWN_DELAY_MS: f64 = 6000.0;

// --- Difficulty ---

/// First stage on which basic enemies receive the spawn-time buff.
pub const ENEMY_BUFF_STAGE: u32 = 4;

/// Health/damage multiplier for buffed basic enemies (rounded).
pub const ENEMY_BUFF_MULTIPLIER: f64 = 1.2;

/// Cumulative enemy-tower damage that triggers the mid-boss
/// reinforcement on stages 4-5.
pub const REINFORCEMENT_TRIGGER_DAMAGE: u32 = 500;

/// Stages on which the damage-triggered reinforcement can fire.
pub const REINFORCEMENT_STAGES: [u32; 2] = [4, 5];

// --- Stages ---

/// Number of stages in the campaign.
pub const MAX_STAGE: u32 = 6;

/// Stages featuring a scripted boss spawn.
pub const BOSS_STAGES: [u32; 2] = [3, 6];

// --- Economy ---

/// Starting balance at the beginning of a stage.
pub const START_BALANCE: u32 = 50;

/// Starting balance capacity.
pub const START_CAPACITY: u32 = 100;

/// Capacity gained per upgrade level beyond the first.
pub const CAPACITY_PER_LEVEL: u32 = 50;

/// Base passive income per income tick.
pub const BASE_INCOME: u32 = 10;

/// Income multiplier gained per upgrade level beyond the first.
pub const INCOME_BONUS_PER_LEVEL: f64 = 0.05;

/// Capacity upgrade cost step: level N -> N+1 costs N * this.
pub const UPGRADE_COST_STEP: u32 = 40;

/// Highest reachable capacity level.
pub const MAX_CAPACITY_LEVEL: u32 = 8;

/// Passive income interval (ms).
pub const PASSIVE_INCOME_INTERVAL_MS: f64 = 1000.0;

/// Kill reward for enemy archetypes without a modeled reward.
pub const DEFAULT_KILL_REWARD: u32 = 5;

// --- Effects ---

/// Attack flash duration (ms).
pub const ATTACK_EFFECT_DURATION_MS: f64 = 300.0;

/// Spawn ring duration (ms).
pub const SPAWN_EFFECT_DURATION_MS: f64 = 600.0;

/// Explosion duration (ms).
pub const EXPLOSION_EFFECT_DURATION_MS: f64 = 500.0;
