//! Headless demo driver: runs one stage with a scripted player and
//! prints the outcome.
//!
//! Usage: `catlane [seed] [stage]`

use std::collections::HashMap;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use catlane_core::catalog::UnitCatalog;
use catlane_core::commands::PlayerCommand;
use catlane_core::constants::ALLY_TOWER_X;
use catlane_core::enums::GamePhase;
use catlane_core::state::GameSnapshot;
use catlane_sim::engine::SimConfig;

mod game_loop;
mod state;

use state::GameLoopCommand;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let stage: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);

    let latest_snapshot: Arc<Mutex<Option<GameSnapshot>>> = Arc::new(Mutex::new(None));
    let cmd_tx = game_loop::spawn_game_loop(
        SimConfig {
            seed,
            save_path: None,
        },
        Arc::clone(&latest_snapshot),
    );

    if stage > 1 {
        send_player(&cmd_tx, PlayerCommand::SelectStage { stage });
    }
    send_player(&cmd_tx, PlayerCommand::StartStage);
    println!("running stage {stage} with seed {seed}");

    run_scripted_player(&cmd_tx, &latest_snapshot);

    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
}

fn send_player(cmd_tx: &Sender<GameLoopCommand>, command: PlayerCommand) {
    let _ = cmd_tx.send(GameLoopCommand::PlayerCommand(command));
}

/// Deploy units whenever affordable until the stage resolves, honoring
/// each type's deployment cooldown (a presentation-side rule).
fn run_scripted_player(
    cmd_tx: &Sender<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    let catalog = UnitCatalog::default();
    let roster = ["tank", "basic", "axe"];
    let mut last_deploy: HashMap<&str, Instant> = HashMap::new();
    let spawn_x = ALLY_TOWER_X - 60.0;

    loop {
        std::thread::sleep(Duration::from_millis(200));

        let Some(snapshot) = latest_snapshot.lock().ok().and_then(|s| s.clone()) else {
            continue;
        };

        match snapshot.phase {
            GamePhase::Victory | GamePhase::Defeat => {
                println!(
                    "stage over after {:.1}s (tower {} / {})",
                    snapshot.time.elapsed_ms / 1000.0,
                    snapshot.towers.ally.health,
                    snapshot.towers.enemy.health
                );
                return;
            }
            GamePhase::Active => {}
            _ => continue,
        }

        for name in roster {
            let archetype = match catalog.lookup(name) {
                Ok(archetype) => archetype,
                Err(_) => continue,
            };
            if snapshot.economy.balance < archetype.cost {
                continue;
            }
            let on_cooldown = last_deploy.get(name).is_some_and(|at| {
                at.elapsed() < Duration::from_millis(archetype.deployment_cooldown_ms as u64)
            });
            if on_cooldown {
                continue;
            }
            last_deploy.insert(name, Instant::now());
            send_player(
                cmd_tx,
                PlayerCommand::Deploy {
                    unit: name.to_string(),
                    x: spawn_x,
                },
            );
            break;
        }
    }
}
