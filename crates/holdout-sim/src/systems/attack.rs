//! Enemy attack timers.
//!
//! Each enemy carries an [`AttackTimer`] scheduled in sim time. A due timer
//! lands damage when its enemy is inside `attack_range` of the player, then
//! re-arms one period out either way — the range check gates the hit, not
//! the schedule. Timers live and die with their entity, so a destroyed
//! enemy never deals damage again.

use hecs::World;

use holdout_core::components::{AttackTimer, Enemy, Health, Player};
use holdout_core::config::GameConfig;
use holdout_core::events::AudioEvent;
use holdout_core::types::Position;

/// Fire all due attack timers. Returns true if the player's health reached
/// zero this tick; the session handles the phase transition.
pub fn run(
    world: &mut World,
    config: &GameConfig,
    current_tick: u64,
    audio_events: &mut Vec<AudioEvent>,
) -> bool {
    let player_pos: Position = match world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
    {
        Some(pos) => pos,
        None => return false,
    };

    // Resolve timers first; the health query below needs the world again.
    let mut hits: u32 = 0;
    for (_entity, (_enemy, pos, timer)) in
        world.query_mut::<(&Enemy, &Position, &mut AttackTimer)>()
    {
        if current_tick < timer.next_fire_tick {
            continue;
        }
        timer.next_fire_tick = current_tick + timer.period_ticks;
        if pos.distance_to(&player_pos) < config.attack_range {
            hits += 1;
        }
    }

    if hits == 0 {
        return false;
    }

    let mut died = false;
    for (_entity, (_player, health)) in world.query_mut::<(&Player, &mut Health)>() {
        for _ in 0..hits {
            health.current = health.current.saturating_sub(config.attack_damage);
            audio_events.push(AudioEvent::PlayerHit);
        }
        died = health.current == 0;
    }
    died
}
