//! Cleanup system: removes projectiles that flew past their travel cap.
//!
//! The cap bounds the live projectile count — the magazine only bounds the
//! fire rate. Reuses the session's despawn buffer rather than allocating
//! per tick.

use hecs::{Entity, World};

use holdout_core::components::Projectile;
use holdout_core::config::GameConfig;
use holdout_core::types::Position;

/// Remove projectiles beyond `projectile_max_range` from the origin.
pub fn run(world: &mut World, config: &GameConfig, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_projectile, pos)) in world.query_mut::<(&Projectile, &Position)>() {
        if pos.range_from_origin() > config.projectile_max_range {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
