//! The rendering and audio collaborator seam.

use tracing::{debug, info, warn};

use holdout_core::events::GameEvent;
use holdout_core::state::GameStateSnapshot;

/// Receives every snapshot the session loop produces.
///
/// Implementations draw the scene, play the cued sounds, and update HUD
/// text from the views. The session never calls back into a frontend
/// except through this method.
pub trait Frontend: Send {
    fn present(&mut self, snapshot: &GameStateSnapshot);
}

/// Headless frontend that narrates the session through `tracing`.
#[derive(Debug, Default)]
pub struct LogFrontend {
    last_ammo_line: String,
    last_score_line: String,
}

impl Frontend for LogFrontend {
    fn present(&mut self, snapshot: &GameStateSnapshot) {
        for event in &snapshot.events {
            match event {
                GameEvent::WaveStarted { wave, enemies } => {
                    info!(wave, enemies, "wave released");
                }
                GameEvent::EnemyDestroyed { score } => {
                    info!(score, "enemy down");
                }
                GameEvent::AssetLoadFailed { model } => {
                    warn!(%model, "enemy model failed to load, slot dropped");
                }
                GameEvent::GameOver { final_score, wave } => {
                    info!(final_score, wave, "game over");
                }
            }
        }
        for cue in &snapshot.audio_events {
            debug!(?cue, "audio cue");
        }

        // HUD lines only when they change, like a DOM layer would repaint.
        let ammo_line = snapshot.player.ammo_text();
        if ammo_line != self.last_ammo_line {
            info!("{ammo_line}");
            self.last_ammo_line = ammo_line;
        }
        let score_line = snapshot.score.hud_line();
        if score_line != self.last_score_line {
            info!("{score_line}");
            self.last_score_line = score_line;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_frontend_tracks_hud_lines() {
        let mut frontend = LogFrontend::default();
        let mut snapshot = GameStateSnapshot::default();
        snapshot.player.ammo = 10;
        snapshot.player.max_ammo = 10;

        frontend.present(&snapshot);
        assert_eq!(frontend.last_ammo_line, "Ammo: 10/10");
        assert_eq!(frontend.last_score_line, "Wave 1 - Score: 0");

        snapshot.player.ammo = 9;
        snapshot.score.score = 10;
        frontend.present(&snapshot);
        assert_eq!(frontend.last_ammo_line, "Ammo: 9/10");
        assert_eq!(frontend.last_score_line, "Wave 1 - Score: 10");
    }
}
