//! Enemy materialization — turns completed model loads into live enemies.
//!
//! Spawning is decoupled from the wave controller: [`Spawner::request_wave`]
//! only files load requests with the frontend's [`ModelLoader`]. An enemy
//! joins the world when its load completes, so a slow load leaves it
//! invisible and harmless rather than half-spawned. A failed load drops the
//! slot and surfaces a [`GameEvent::AssetLoadFailed`] — the session goes on.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use holdout_core::assets::{LoadRequestId, ModelLoader};
use holdout_core::config::GameConfig;
use holdout_core::events::GameEvent;

use crate::world_setup;

/// Owns the loader handle and the set of spawn slots still in flight.
pub struct Spawner {
    loader: Box<dyn ModelLoader>,
    pending: Vec<LoadRequestId>,
    model: String,
}

impl Spawner {
    pub fn new(loader: Box<dyn ModelLoader>, model: String) -> Self {
        Self {
            loader,
            pending: Vec::new(),
            model,
        }
    }

    /// File load requests for `count` enemies.
    pub fn request_wave(&mut self, count: u32) {
        for _ in 0..count {
            let request = self.loader.request(&self.model);
            self.pending.push(request);
        }
    }

    /// Spawn slots still waiting on their model load.
    pub fn pending_count(&self) -> u32 {
        self.pending.len() as u32
    }

    /// Abandon all in-flight slots. Late completions are ignored when they
    /// arrive because their request ids are no longer pending.
    pub fn clear_pending(&mut self) {
        self.pending.clear();
    }
}

/// Drain finished loads and materialize an enemy for each success.
pub fn run(
    world: &mut World,
    spawner: &mut Spawner,
    rng: &mut ChaCha8Rng,
    config: &GameConfig,
    current_tick: u64,
    events: &mut Vec<GameEvent>,
) {
    let completions = spawner.loader.poll();
    for (request, outcome) in completions {
        let Some(slot) = spawner.pending.iter().position(|&p| p == request) else {
            // Completion for a request we no longer hold (cleared by reset).
            continue;
        };
        spawner.pending.swap_remove(slot);

        match outcome {
            Ok(model) => {
                world_setup::spawn_enemy(world, rng, config, model, current_tick);
            }
            Err(_) => {
                events.push(GameEvent::AssetLoadFailed {
                    model: spawner.model.clone(),
                });
            }
        }
    }
}
