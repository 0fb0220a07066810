//! Wave progression — refills the arena when it empties.
//!
//! A wave is exhausted only when no live enemy remains AND no spawn slot is
//! still waiting on its model load; counting pending slots as occupancy
//! stops the controller re-triggering every tick while loads are in flight.

use hecs::World;

use holdout_core::components::Enemy;
use holdout_core::config::GameConfig;
use holdout_core::events::GameEvent;
use holdout_core::state::Scoreboard;

use crate::systems::spawner::Spawner;

/// Release the next wave if the current one is exhausted. Only runs while
/// the session is active, so no wave is ever released before start or
/// after defeat.
pub fn run(
    world: &mut World,
    spawner: &mut Spawner,
    score: &mut Scoreboard,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    let live = world.query_mut::<&Enemy>().into_iter().count();
    if live > 0 || spawner.pending_count() > 0 {
        return;
    }

    score.wave += 1;
    let count = config.wave_size(score.wave);
    spawner.request_wave(count);
    events.push(GameEvent::WaveStarted {
        wave: score.wave,
        enemies: count,
    });
}
