//! ECS components for hecs entities.
//!
//! Plain data structs with no behavior; the systems own all game logic.

use serde::{Deserialize, Serialize};

use crate::assets::ModelHandle;

/// Marks the player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an enemy entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks a projectile entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// Hit points. Reaching zero ends the session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

/// Magazine state. Shooting requires at least one round; reloading refills
/// to `max`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ammo {
    pub current: u32,
    pub max: u32,
}

/// Visual binding for the renderer: which loaded model instance to draw,
/// at what scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Visual {
    pub model: ModelHandle,
    pub scale: f32,
}

/// Periodic attack task owned by an enemy entity.
///
/// Scheduled in sim time, so despawning the enemy removes the timer with
/// it and nothing fires posthumously.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttackTimer {
    /// Ticks between attack attempts.
    pub period_ticks: u64,
    /// Tick at which the next attempt is due.
    pub next_fire_tick: u64,
}

// Position, Velocity, and Orientation are defined in types.rs and used as
// ECS components as well.
