//! Shared state between the game loop thread and the driver.

use catlane_core::commands::PlayerCommand;

/// Commands accepted by the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    PlayerCommand(PlayerCommand),
    Shutdown,
}
