//! Projectile impact resolution.
//!
//! All projectile/enemy pairs are tested against positions captured at the
//! start of the pass, and kills are collected before anything is removed,
//! so a despawn can never skip a pair mid-iteration. Each projectile claims
//! at most one enemy per tick and a claimed enemy cannot be claimed again.

use glam::Vec3;
use hecs::{Entity, World};

use holdout_core::components::{Enemy, Projectile};
use holdout_core::config::GameConfig;
use holdout_core::constants::KILL_SCORE;
use holdout_core::events::GameEvent;
use holdout_core::state::Scoreboard;
use holdout_core::types::Position;

/// Test every projectile against every live enemy and despawn both members
/// of each hit pair. Uses the pre-allocated buffer for the despawns.
pub fn run(
    world: &mut World,
    config: &GameConfig,
    score: &mut Scoreboard,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let projectiles: Vec<(Entity, Vec3)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(entity, (_marker, pos))| (entity, pos.0))
        .collect();
    let enemies: Vec<(Entity, Vec3)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (_marker, pos))| (entity, pos.0))
        .collect();

    let mut claimed: Vec<Entity> = Vec::new();
    for (projectile, projectile_pos) in &projectiles {
        for (enemy, enemy_pos) in &enemies {
            if claimed.contains(enemy) {
                continue;
            }
            if projectile_pos.distance(*enemy_pos) < config.collision_radius {
                claimed.push(*enemy);
                despawn_buffer.push(*projectile);
                score.score += KILL_SCORE;
                score.kills += 1;
                events.push(GameEvent::EnemyDestroyed { score: score.score });
                // One kill per projectile
                break;
            }
        }
    }

    despawn_buffer.extend(claimed);
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
