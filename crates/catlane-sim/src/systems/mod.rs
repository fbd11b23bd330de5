//! Simulation systems, run in a fixed order each tick.

pub mod cleanup;
pub mod combat;
pub mod effects;
pub mod movement;
pub mod snapshot;
pub mod spawner;
pub mod targeting;
