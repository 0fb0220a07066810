//! Headless harness: runs a session with the scripted autopilot and
//! reports how it went. Real frontends embed `session_loop` instead and
//! ship their own loaders and renderers.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use holdout_app::autopilot;
use holdout_app::frontend::{Frontend, LogFrontend};
use holdout_core::commands::PlayerCommand;
use holdout_core::config::GameConfig;
use holdout_core::constants::TICK_RATE;
use holdout_core::enums::GamePhase;
use holdout_sim::session::{GameSession, SessionConfig};

#[derive(Parser)]
#[command(author, version, about = "Holdout headless session harness", long_about = None)]
struct Args {
    /// RNG seed for the session.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Seconds of game time to simulate (runs faster than real time).
    #[arg(long, default_value_t = 120.0)]
    duration: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let ticks = (args.duration * TICK_RATE as f64) as u64;
    let config = SessionConfig {
        seed: args.seed,
        game: GameConfig::default(),
    };

    info!(seed = args.seed, ticks, "starting session");

    let mut frontend = LogFrontend::default();
    let mut session = GameSession::new(config);
    session.queue_command(PlayerCommand::Start);

    let mut snapshot = session.tick();
    frontend.present(&snapshot);

    for _ in 1..ticks {
        session.queue_commands(autopilot::commands_for(&snapshot));
        snapshot = session.tick();
        frontend.present(&snapshot);
        if snapshot.phase == GamePhase::GameOver {
            break;
        }
    }

    info!(
        score = snapshot.score.score,
        kills = snapshot.score.kills,
        wave = snapshot.score.wave,
        ticks = snapshot.time.tick,
        survived = (snapshot.phase != GamePhase::GameOver),
        "session finished"
    );
    Ok(())
}
