//! Events emitted by the session for audio and UI feedback.

use serde::{Deserialize, Serialize};

/// Audio cues for the frontend sound system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A projectile left the muzzle.
    ShotFired,
    /// An enemy attack landed on the player.
    PlayerHit,
    /// Session started: begin the looping background track.
    MusicStart,
}

/// Gameplay notifications for the HUD layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave was released.
    WaveStarted { wave: u32, enemies: u32 },
    /// A projectile destroyed an enemy; `score` is the new running total.
    EnemyDestroyed { score: u32 },
    /// An enemy model failed to load. Non-fatal: the spawn slot is dropped.
    AssetLoadFailed { model: String },
    /// Health reached zero. Emitted exactly once per session.
    GameOver { final_score: u32, wave: u32 },
}
