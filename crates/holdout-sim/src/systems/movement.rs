//! Kinematic systems: pursuit retargeting and per-tick integration.
//!
//! Projectiles keep the velocity they were born with. Enemies re-aim at
//! the player's current position every tick — pure pursuit, no smoothing —
//! then everything integrates position += velocity in one pass. Velocities
//! are per-tick displacements, so integration is a plain add.

use glam::Vec3;
use hecs::World;

use holdout_core::components::{Enemy, Player};
use holdout_core::types::{Position, Velocity};

/// Point every enemy's velocity at the player: step * normalize(P - E).
/// An enemy exactly at the player's position holds still.
pub fn retarget_enemies(world: &mut World, enemy_step: f32) {
    let player_pos: Vec3 = match world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| pos.0)
    {
        Some(pos) => pos,
        None => return,
    };

    for (_entity, (_enemy, pos, vel)) in world.query_mut::<(&Enemy, &Position, &mut Velocity)>() {
        vel.0 = (player_pos - pos.0).normalize_or_zero() * enemy_step;
    }
}

/// Integrate position from velocity for every moving entity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0;
    }
}
