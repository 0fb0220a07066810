//! Entity spawn factories for setting up the session world.
//!
//! Creates the player, enemies, and projectiles with appropriate
//! component bundles.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use holdout_core::assets::ModelHandle;
use holdout_core::components::*;
use holdout_core::config::GameConfig;
use holdout_core::types::{Orientation, Position, Velocity};

/// Spawn the player at the origin with a full magazine and full health.
/// The player never moves; enemies and projectiles do.
pub fn spawn_player(world: &mut World, config: &GameConfig) -> hecs::Entity {
    world.spawn((
        Player,
        Position(Vec3::ZERO),
        Orientation::default(),
        Health {
            current: config.max_health,
            max: config.max_health,
        },
        Ammo {
            current: config.max_ammo,
            max: config.max_ammo,
        },
    ))
}

/// Materialize an enemy on the spawn ring at a random bearing.
///
/// Called by the spawner when the model load for a slot completes; the
/// bearing is drawn at that moment, not when the slot was requested.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    model: ModelHandle,
    current_tick: u64,
) -> hecs::Entity {
    let bearing: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let position = Vec3::new(
        bearing.cos() * config.spawn_radius,
        0.0,
        bearing.sin() * config.spawn_radius,
    );
    spawn_enemy_at(world, config, model, position, current_tick)
}

/// Materialize an enemy at an exact position. Ring placement via
/// [`spawn_enemy`] is the normal path; this exists for scripted setups.
pub fn spawn_enemy_at(
    world: &mut World,
    config: &GameConfig,
    model: ModelHandle,
    position: Vec3,
    current_tick: u64,
) -> hecs::Entity {
    let period = config.attack_period_ticks();
    world.spawn((
        Enemy,
        Position(position),
        Velocity(Vec3::ZERO),
        Visual {
            model,
            scale: config.enemy_scale,
        },
        AttackTimer {
            period_ticks: period,
            next_fire_tick: current_tick + period,
        },
    ))
}

/// Spawn a projectile at the muzzle, flying along the look direction at
/// a fixed step per tick.
pub fn spawn_projectile(
    world: &mut World,
    origin: Position,
    orientation: Orientation,
    step: f32,
) -> hecs::Entity {
    world.spawn((
        Projectile,
        origin,
        Velocity(orientation.forward() * step),
    ))
}
