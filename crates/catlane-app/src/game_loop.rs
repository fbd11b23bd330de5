//! Game loop thread — runs the battle engine at 30 Hz and publishes
//! snapshots.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. The latest snapshot is
//! stored in shared state for synchronous polling, and notable events
//! are written to stdout (the demo's stand-in for a frontend).

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use catlane_core::events::GameEvent;
use catlane_core::state::GameSnapshot;
use catlane_sim::engine::{BattleEngine, SimConfig};

use crate::state::GameLoopCommand;

/// Tick rate of the host clock (Hz).
pub const TICK_RATE: u32 = 30;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Milliseconds handed to the engine each tick.
pub const TICK_MS: f64 = 1000.0 / TICK_RATE as f64;

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the driver to use.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("catlane-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    let mut engine = BattleEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine handles pause semantics internally)
        let snapshot = engine.tick(TICK_MS);

        // 3. Report events raised this tick
        for event in &snapshot.events {
            report_event(event);
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

fn report_event(event: &GameEvent) {
    match event {
        GameEvent::MoneyChanged { .. } => {}
        GameEvent::CapacityLevelChanged { level, next_cost } => {
            println!("capacity level {level} (next upgrade: {next_cost:?})");
        }
        GameEvent::StageUnlocked { stage } => println!("stage {stage} unlocked"),
        GameEvent::StageCompleted { stage } => println!("stage {stage} complete"),
        GameEvent::GameCompleted => println!("all stages complete!"),
        GameEvent::StageOutcome { victory } => {
            println!("{}", if *victory { "VICTORY" } else { "DEFEAT" });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catlane_core::commands::PlayerCommand;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartStage))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartStage)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_tick_duration_constant() {
        // 30Hz = 33.333ms per tick
        let expected_nanos = 1_000_000_000u64 / 30;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
        assert!((TICK_MS - 1000.0 / 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_loop_publishes_snapshots_and_shuts_down() {
        let slot: Arc<Mutex<Option<GameSnapshot>>> = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(SimConfig::default(), Arc::clone(&slot));

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartStage))
            .unwrap();
        std::thread::sleep(Duration::from_millis(200));

        let snapshot = slot.lock().unwrap().clone();
        let snapshot = snapshot.expect("loop should have published a snapshot");
        assert!(snapshot.time.tick > 0);

        tx.send(GameLoopCommand::Shutdown).unwrap();
    }
}
