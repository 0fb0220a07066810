//! Session constants and default tuning parameters.
//!
//! Values that [`crate::config::GameConfig`] exposes as knobs are defined
//! here as their classic defaults.

/// Simulation tick rate (Hz) — one tick per rendered frame at nominal 60fps.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Player ---

/// Starting (and maximum) player health.
pub const MAX_HEALTH: u32 = 100;

/// Magazine capacity.
pub const MAX_AMMO: u32 = 10;

/// Pitch limit in radians (straight up / straight down).
pub const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2;

// --- Projectiles ---

/// Distance a projectile travels each tick (world units).
pub const PROJECTILE_STEP: f32 = 1.0;

/// Travel cap: projectiles despawn beyond this range from the origin.
pub const PROJECTILE_MAX_RANGE: f32 = 100.0;

/// Projectile-to-enemy distance that counts as a hit.
pub const COLLISION_RADIUS: f32 = 1.0;

// --- Enemies ---

/// Distance an enemy advances toward the player each tick (world units).
pub const ENEMY_STEP: f32 = 0.05;

/// Radius of the ring on which enemies materialize.
pub const SPAWN_RADIUS: f32 = 50.0;

/// Renderer scale applied to the enemy model.
pub const ENEMY_SCALE: f32 = 1.2;

/// Model asset loaded for each enemy.
pub const ENEMY_MODEL: &str = "assets/enemy.glb";

// --- Enemy attacks ---

/// Seconds between attack attempts per enemy.
pub const ATTACK_PERIOD_SECS: f64 = 2.0;

/// Range within which an attack attempt lands (world units).
pub const ATTACK_RANGE: f32 = 20.0;

/// Damage per landed attack.
pub const ATTACK_DAMAGE: u32 = 10;

// --- Waves and scoring ---

/// Enemies in the opening wave.
pub const FIRST_WAVE_ENEMIES: u32 = 3;

/// Wave N (N >= 2) spawns WAVE_SIZE_BASE + N enemies.
pub const WAVE_SIZE_BASE: u32 = 2;

/// Score awarded per destroyed enemy.
pub const KILL_SCORE: u32 = 10;
