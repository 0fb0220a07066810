//! Session loop thread — ticks the game at the display rate and publishes
//! snapshots.
//!
//! The session is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots go to the
//! `Frontend` and into shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use holdout_core::assets::ModelLoader;
use holdout_core::constants::TICK_RATE;
use holdout_core::state::GameStateSnapshot;
use holdout_sim::session::{GameSession, SessionConfig};

use crate::frontend::Frontend;
use crate::state::SessionLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the session loop in a new thread.
///
/// Returns the command sender for the frontend's input layer to use.
pub fn spawn_session_loop(
    config: SessionConfig,
    loader: Box<dyn ModelLoader>,
    frontend: Box<dyn Frontend>,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> mpsc::Sender<SessionLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<SessionLoopCommand>();

    std::thread::Builder::new()
        .name("holdout-session-loop".into())
        .spawn(move || {
            run_session_loop(config, loader, frontend, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn session loop thread");

    cmd_tx
}

/// The session loop. Runs until Shutdown command or channel disconnect.
fn run_session_loop(
    config: SessionConfig,
    loader: Box<dyn ModelLoader>,
    mut frontend: Box<dyn Frontend>,
    cmd_rx: mpsc::Receiver<SessionLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut session = GameSession::with_loader(config, loader);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(SessionLoopCommand::Player(cmd)) => {
                    session.queue_command(cmd);
                }
                Ok(SessionLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the session gates semantics by phase)
        let snapshot = session.tick();

        // 3. Hand the frame to the frontend
        frontend.present(&snapshot);

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

#[cfg(test)]
mod tests {
    use super::*;
    use holdout_core::assets::InstantLoader;
    use holdout_core::commands::PlayerCommand;
    use holdout_core::enums::GamePhase;
    use crate::frontend::LogFrontend;
    use crate::state::AppState;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<SessionLoopCommand>();

        tx.send(SessionLoopCommand::Player(PlayerCommand::Start))
            .unwrap();
        tx.send(SessionLoopCommand::Player(PlayerCommand::Shoot))
            .unwrap();
        tx.send(SessionLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            SessionLoopCommand::Player(PlayerCommand::Start)
        ));
        assert!(matches!(
            commands[1],
            SessionLoopCommand::Player(PlayerCommand::Shoot)
        ));
        assert!(matches!(commands[2], SessionLoopCommand::Shutdown));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut session = GameSession::new(SessionConfig::default());
        session.queue_command(PlayerCommand::Start);

        // Run enough ticks to populate entities
        for _ in 0..50 {
            session.tick();
        }

        let snapshot = session.tick();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_loop_thread_lifecycle() {
        let state = AppState::new();
        let tx = spawn_session_loop(
            SessionConfig::default(),
            Box::<InstantLoader>::default(),
            Box::<LogFrontend>::default(),
            Arc::clone(&state.latest_snapshot),
        );
        *state.command_tx.lock().unwrap() = Some(tx.clone());
        *state.running.lock().unwrap() = true;

        assert!(state.send(PlayerCommand::Start));

        // Give the loop a few ticks to publish a snapshot.
        let mut started = false;
        for _ in 0..50 {
            std::thread::sleep(Duration::from_millis(10));
            if let Some(snapshot) = state.latest_snapshot.lock().unwrap().as_ref() {
                if snapshot.phase == GamePhase::Active {
                    started = true;
                    break;
                }
            }
        }
        assert!(started, "Loop thread should publish Active snapshots");

        tx.send(SessionLoopCommand::Shutdown).unwrap();
    }
}
