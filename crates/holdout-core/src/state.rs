//! Game state snapshot — the complete visible state handed to the frontend
//! each tick.

use serde::{Deserialize, Serialize};

use crate::assets::ModelHandle;
use crate::enums::GamePhase;
use crate::events::{AudioEvent, GameEvent};
use crate::types::{Position, SimTime, Velocity};

/// Complete game state published to the frontend after each tick.
///
/// Audio cues and gameplay events are drained from the session when the
/// snapshot is built, so each appears in exactly one snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub score: Scoreboard,
    /// Spawn slots still waiting on their model load.
    pub pending_spawns: u32,
    pub audio_events: Vec<AudioEvent>,
    pub events: Vec<GameEvent>,
}

/// Player status for the camera, health bar, and ammo counter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    /// Look direction (radians).
    pub yaw: f32,
    pub pitch: f32,
    pub health: u32,
    pub max_health: u32,
    pub ammo: u32,
    pub max_ammo: u32,
    /// Whether pointer input is captured and drives the look direction.
    pub aim_locked: bool,
}

impl PlayerView {
    /// HUD ammo counter text.
    pub fn ammo_text(&self) -> String {
        format!("Ammo: {}/{}", self.ammo, self.max_ammo)
    }

    /// Health bar fill width as a CSS percentage string.
    pub fn health_fill(&self) -> String {
        format!("{}%", self.health)
    }
}

/// A visible enemy for the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    /// Stable entity id for render-object reuse across frames.
    pub id: u32,
    pub position: Position,
    /// Model instance the renderer draws for this enemy.
    pub model: ModelHandle,
    pub scale: f32,
    /// Range to the player (world units).
    pub distance: f32,
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    /// Stable entity id for render-object reuse across frames.
    pub id: u32,
    pub position: Position,
    pub velocity: Velocity,
}

/// Running score and wave tally. The session mutates it in place and each
/// snapshot carries a copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Current wave, 1-based.
    pub wave: u32,
    pub score: u32,
    pub kills: u32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            wave: 1,
            score: 0,
            kills: 0,
        }
    }
}

impl Scoreboard {
    /// HUD score line.
    pub fn hud_line(&self) -> String {
        format!("Wave {} - Score: {}", self.wave, self.score)
    }
}
