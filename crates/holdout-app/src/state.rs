//! Application state shared between the embedding frontend and the
//! session loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use holdout_core::commands::PlayerCommand;
use holdout_core::state::GameStateSnapshot;

/// Commands sent from the frontend to the session loop thread.
#[derive(Debug)]
pub enum SessionLoopCommand {
    /// A player command to forward to the session.
    Player(PlayerCommand),
    /// Shut down the loop thread gracefully.
    Shutdown,
}

/// Shared application state held by the embedding frontend.
///
/// Everything is Send + Sync:
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` covers state that does not exist before the
///   loop is spawned
/// - The latest snapshot lives behind `Arc<Mutex<...>>`, shared with the
///   loop thread
pub struct AppState {
    /// Channel sender to forward commands to the session loop thread.
    /// `None` before the loop is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<SessionLoopCommand>>>,
    /// Latest snapshot for synchronous polling.
    /// Updated by the loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Whether the session loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a player command to the running loop, if any.
    pub fn send(&self, command: PlayerCommand) -> bool {
        match self.command_tx.lock() {
            Ok(guard) => match guard.as_ref() {
                Some(tx) => tx.send(SessionLoopCommand::Player(command)).is_ok(),
                None => false,
            },
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(state.command_tx.lock().unwrap().is_none());
        assert!(state.latest_snapshot.lock().unwrap().is_none());
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_send_without_loop_is_false() {
        let state = AppState::new();
        assert!(!state.send(PlayerCommand::Start));
    }
}
