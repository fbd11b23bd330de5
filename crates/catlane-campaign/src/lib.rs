//! Campaign meta-state for CATLANE: the in-stage economy, the stage
//! progression state machine, and persisted unlock progress.
//!
//! Nothing here touches the ECS world; the sim crate owns instances of
//! these types and drives them from its tick loop.

pub mod economy;
pub mod progression;
pub mod save_load;
