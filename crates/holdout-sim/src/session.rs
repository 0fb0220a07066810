//! Game session — the core of the game.
//!
//! `GameSession` owns the hecs ECS world, processes player commands, runs
//! all systems, and produces `GameStateSnapshot`s. Completely headless (no
//! rendering or audio dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use holdout_core::assets::{InstantLoader, ModelLoader};
use holdout_core::commands::PlayerCommand;
use holdout_core::components::{Ammo, Player};
use holdout_core::config::GameConfig;
use holdout_core::constants::MAX_PITCH;
use holdout_core::enums::GamePhase;
use holdout_core::events::{AudioEvent, GameEvent};
use holdout_core::state::{GameStateSnapshot, Scoreboard};
use holdout_core::types::{Orientation, Position, SimTime};

use crate::systems;
use crate::systems::spawner::Spawner;
use crate::world_setup;

/// Configuration for starting a new session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// RNG seed for determinism. Same seed = same spawn bearings.
    pub seed: u64,
    /// Gameplay tuning.
    pub game: GameConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

/// The game session. Owns the ECS world and all session state.
pub struct GameSession {
    world: World,
    time: SimTime,
    phase: GamePhase,
    config: GameConfig,
    seed: u64,
    rng: ChaCha8Rng,
    aim_locked: bool,
    score: Scoreboard,
    spawner: Spawner,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    game_events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session with the default instant loader.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_loader(config, Box::<InstantLoader>::default())
    }

    /// Create a session wired to a frontend-provided model loader.
    pub fn with_loader(config: SessionConfig, loader: Box<dyn ModelLoader>) -> Self {
        let spawner = Spawner::new(loader, config.game.enemy_model.clone());
        let mut world = World::new();
        world_setup::spawn_player(&mut world, &config.game);

        Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            aim_locked: false,
            score: Scoreboard::default(),
            spawner,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            game_events: Vec::new(),
            config: config.game,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the session by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        match self.phase {
            GamePhase::Active => {
                self.run_systems();
                self.time.advance();
            }
            GamePhase::GameOver => {
                // Defeat never halts the loop: the scene keeps animating,
                // but damage, scoring, and waves are done.
                systems::movement::retarget_enemies(&mut self.world, self.config.enemy_step);
                systems::movement::run(&mut self.world);
                systems::cleanup::run(&mut self.world, &self.config, &mut self.despawn_buffer);
                self.time.advance();
            }
            GamePhase::Menu => {}
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        let game_events = std::mem::take(&mut self.game_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.aim_locked,
            self.spawner.pending_count(),
            &self.score,
            audio_events,
            game_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the active gameplay tuning.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Tear the session down to a fresh menu state. The one reset path:
    /// world, score, timers, and in-flight spawn slots all go together.
    pub fn reset(&mut self) {
        self.world.clear();
        self.time = SimTime::default();
        self.phase = GamePhase::Menu;
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.aim_locked = false;
        self.score = Scoreboard::default();
        self.spawner.clear_pending();
        self.despawn_buffer.clear();
        self.audio_events.clear();
        self.game_events.clear();
        world_setup::spawn_player(&mut self.world, &self.config);
    }

    /// Spawn an enemy at an exact position, bypassing the loader (for tests).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, position: glam::Vec3) -> hecs::Entity {
        world_setup::spawn_enemy_at(
            &mut self.world,
            &self.config,
            holdout_core::assets::ModelHandle(u64::MAX),
            position,
            self.time.tick,
        )
    }

    /// Get a mutable reference to the ECS world (for tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get a read-only reference to the scoreboard (for tests).
    #[cfg(test)]
    pub fn score(&self) -> &Scoreboard {
        &self.score
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Start => {
                if self.phase == GamePhase::Menu {
                    self.aim_locked = true;
                    self.time = SimTime::default();
                    self.score = Scoreboard::default();
                    self.spawner.request_wave(self.config.first_wave_enemies);
                    self.audio_events.push(AudioEvent::MusicStart);
                    self.game_events.push(GameEvent::WaveStarted {
                        wave: self.score.wave,
                        enemies: self.config.first_wave_enemies,
                    });
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Aim { yaw, pitch } => {
                for (_entity, (_player, orientation)) in
                    self.world.query_mut::<(&Player, &mut Orientation)>()
                {
                    orientation.yaw = yaw;
                    orientation.pitch = pitch.clamp(-MAX_PITCH, MAX_PITCH);
                }
            }
            PlayerCommand::Shoot => {
                self.handle_shoot();
            }
            PlayerCommand::Reload => {
                for (_entity, (_player, ammo)) in self.world.query_mut::<(&Player, &mut Ammo)>() {
                    ammo.current = ammo.max;
                }
            }
            PlayerCommand::Reset => {
                self.reset();
            }
        }
    }

    /// Fire one projectile if the session is running, the aim lock is
    /// engaged, and the magazine has a round. An empty magazine makes the
    /// trigger inert — no projectile, no sound.
    fn handle_shoot(&mut self) {
        if self.phase != GamePhase::Active || !self.aim_locked {
            return;
        }

        let mut shot: Option<(Position, Orientation)> = None;
        for (_entity, (_player, pos, orientation, ammo)) in self
            .world
            .query_mut::<(&Player, &Position, &Orientation, &mut Ammo)>()
        {
            if ammo.current == 0 {
                return;
            }
            ammo.current -= 1;
            shot = Some((*pos, *orientation));
        }

        if let Some((origin, orientation)) = shot {
            world_setup::spawn_projectile(
                &mut self.world,
                origin,
                orientation,
                self.config.projectile_step,
            );
            self.audio_events.push(AudioEvent::ShotFired);
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Materialize enemy loads that completed since the last tick
        systems::spawner::run(
            &mut self.world,
            &mut self.spawner,
            &mut self.rng,
            &self.config,
            self.time.tick,
            &mut self.game_events,
        );
        // 2. Projectile impact resolution
        systems::collision::run(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.game_events,
            &mut self.despawn_buffer,
        );
        // 3. Enemy attack timers
        let defeated = systems::attack::run(
            &mut self.world,
            &self.config,
            self.time.tick,
            &mut self.audio_events,
        );
        if defeated {
            self.phase = GamePhase::GameOver;
            self.game_events.push(GameEvent::GameOver {
                final_score: self.score.score,
                wave: self.score.wave,
            });
        }
        // 4. Movement: pursuit retarget, then integration
        systems::movement::retarget_enemies(&mut self.world, self.config.enemy_step);
        systems::movement::run(&mut self.world);
        // 5. Wave exhaustion check
        if self.phase == GamePhase::Active {
            systems::wave::run(
                &mut self.world,
                &mut self.spawner,
                &mut self.score,
                &self.config,
                &mut self.game_events,
            );
        }
        // 6. Projectile travel cap
        systems::cleanup::run(&mut self.world, &self.config, &mut self.despawn_buffer);
    }
}
