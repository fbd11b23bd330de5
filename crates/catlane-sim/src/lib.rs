//! Simulation engine for CATLANE.
//!
//! `BattleEngine` owns the hecs ECS world, the towers, the economy and
//! progression state, processes player commands, runs all systems, and
//! produces `GameSnapshot`s. Completely headless, enabling deterministic
//! testing.

pub mod engine;
pub mod systems;
pub mod world_setup;
