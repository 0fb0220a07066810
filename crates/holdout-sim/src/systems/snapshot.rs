//! Snapshot building: reads the world into the GameStateSnapshot handed to
//! the frontend. Never mutates anything.

use hecs::World;

use holdout_core::components::*;
use holdout_core::enums::GamePhase;
use holdout_core::events::{AudioEvent, GameEvent};
use holdout_core::state::*;
use holdout_core::types::{Orientation, Position, SimTime, Velocity};

/// Assemble the full snapshot for this tick.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    aim_locked: bool,
    pending_spawns: u32,
    score: &Scoreboard,
    audio_events: Vec<AudioEvent>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let player = build_player(world, aim_locked);
    let player_pos = player.position;

    GameStateSnapshot {
        time: *time,
        phase,
        player,
        enemies: build_enemies(world, player_pos),
        projectiles: build_projectiles(world),
        score: score.clone(),
        pending_spawns,
        audio_events,
        events,
    }
}

/// Build the player view from the player entity's components.
fn build_player(world: &World, aim_locked: bool) -> PlayerView {
    world
        .query::<(&Player, &Position, &Orientation, &Health, &Ammo)>()
        .iter()
        .next()
        .map(|(_, (_, pos, orientation, health, ammo))| PlayerView {
            position: *pos,
            yaw: orientation.yaw,
            pitch: orientation.pitch,
            health: health.current,
            max_health: health.max,
            ammo: ammo.current,
            max_ammo: ammo.max,
            aim_locked,
        })
        .unwrap_or_default()
}

/// Build EnemyView list, sorted by entity id for stable ordering.
fn build_enemies(world: &World, player_pos: Position) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Visual)>()
        .iter()
        .map(|(entity, (_enemy, pos, visual))| EnemyView {
            id: entity.id(),
            position: *pos,
            model: visual.model,
            scale: visual.scale,
            distance: pos.distance_to(&player_pos),
        })
        .collect();
    enemies.sort_by_key(|view| view.id);
    enemies
}

/// Build ProjectileView list, sorted by entity id for stable ordering.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(entity, (_projectile, pos, vel))| ProjectileView {
            id: entity.id(),
            position: *pos,
            velocity: *vel,
        })
        .collect();
    projectiles.sort_by_key(|view| view.id);
    projectiles
}
