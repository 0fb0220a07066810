//! Gameplay tuning configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Tunable game rules. [`Default`] reproduces the classic values from
/// [`crate::constants`]; frontends may override individual fields before
/// starting a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Projectile-to-enemy distance that counts as a hit (world units).
    pub collision_radius: f32,
    /// Range within which an enemy attack lands (world units).
    pub attack_range: f32,
    /// Seconds between attack attempts per enemy.
    pub attack_period_secs: f64,
    /// Damage per landed attack.
    pub attack_damage: u32,
    /// Distance an enemy advances toward the player each tick (world units).
    pub enemy_step: f32,
    /// Renderer scale applied to the enemy model.
    pub enemy_scale: f32,
    /// Model asset loaded for each enemy.
    pub enemy_model: String,
    /// Distance a projectile travels each tick (world units).
    pub projectile_step: f32,
    /// Travel cap: projectiles despawn beyond this range from the origin.
    pub projectile_max_range: f32,
    /// Radius of the ring on which enemies materialize.
    pub spawn_radius: f32,
    /// Magazine capacity.
    pub max_ammo: u32,
    /// Starting (and maximum) player health.
    pub max_health: u32,
    /// Enemies in the opening wave.
    pub first_wave_enemies: u32,
    /// Wave N (N >= 2) spawns this many plus the wave number.
    pub wave_size_base: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            collision_radius: constants::COLLISION_RADIUS,
            attack_range: constants::ATTACK_RANGE,
            attack_period_secs: constants::ATTACK_PERIOD_SECS,
            attack_damage: constants::ATTACK_DAMAGE,
            enemy_step: constants::ENEMY_STEP,
            enemy_scale: constants::ENEMY_SCALE,
            enemy_model: constants::ENEMY_MODEL.to_string(),
            projectile_step: constants::PROJECTILE_STEP,
            projectile_max_range: constants::PROJECTILE_MAX_RANGE,
            spawn_radius: constants::SPAWN_RADIUS,
            max_ammo: constants::MAX_AMMO,
            max_health: constants::MAX_HEALTH,
            first_wave_enemies: constants::FIRST_WAVE_ENEMIES,
            wave_size_base: constants::WAVE_SIZE_BASE,
        }
    }
}

impl GameConfig {
    /// Attack period in whole ticks at the fixed tick rate, at least 1.
    pub fn attack_period_ticks(&self) -> u64 {
        (self.attack_period_secs * constants::TICK_RATE as f64)
            .round()
            .max(1.0) as u64
    }

    /// Enemy count for a given wave number.
    pub fn wave_size(&self, wave: u32) -> u32 {
        if wave <= 1 {
            self.first_wave_enemies
        } else {
            self.wave_size_base + wave
        }
    }
}
