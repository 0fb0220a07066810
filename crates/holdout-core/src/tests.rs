#[cfg(test)]
mod tests {
    use crate::assets::{AssetLoadError, InstantLoader, ModelLoader};
    use crate::commands::PlayerCommand;
    use crate::config::GameConfig;
    use crate::enums::GamePhase;
    use crate::events::{AudioEvent, GameEvent};
    use crate::state::{GameStateSnapshot, PlayerView, Scoreboard};
    use crate::types::{Orientation, Position, SimTime};

    /// Verify GamePhase round-trips through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![GamePhase::Menu, GamePhase::Active, GamePhase::GameOver];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Start,
            PlayerCommand::Aim {
                yaw: 1.25,
                pitch: -0.5,
            },
            PlayerCommand::Shoot,
            PlayerCommand::Reload,
            PlayerCommand::Reset,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify AudioEvent and GameEvent round-trip through serde.
    #[test]
    fn test_event_serde() {
        let audio = vec![
            AudioEvent::ShotFired,
            AudioEvent::PlayerHit,
            AudioEvent::MusicStart,
        ];
        for event in &audio {
            let json = serde_json::to_string(event).unwrap();
            let back: AudioEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }

        let game = vec![
            GameEvent::WaveStarted { wave: 2, enemies: 4 },
            GameEvent::EnemyDestroyed { score: 30 },
            GameEvent::AssetLoadFailed {
                model: "assets/enemy.glb".to_string(),
            },
            GameEvent::GameOver {
                final_score: 120,
                wave: 3,
            },
        ];
        for event in &game {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify Position geometry calculations.
    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-6);
        assert!((b.range_from_origin() - 5.0).abs() < 1e-6);
    }

    /// Verify the forward vector convention: yaw 0 / pitch 0 faces -z,
    /// positive yaw swings toward -x, positive pitch tilts up.
    #[test]
    fn test_orientation_forward() {
        let ahead = Orientation::new(0.0, 0.0).forward();
        assert!((ahead.x - 0.0).abs() < 1e-6);
        assert!((ahead.y - 0.0).abs() < 1e-6);
        assert!((ahead.z - (-1.0)).abs() < 1e-6);

        let left = Orientation::new(std::f32::consts::FRAC_PI_2, 0.0).forward();
        assert!((left.x - (-1.0)).abs() < 1e-6);
        assert!(left.y.abs() < 1e-6);
        assert!(left.z.abs() < 1e-6);

        let up = Orientation::new(0.0, std::f32::consts::FRAC_PI_2).forward();
        assert!(up.x.abs() < 1e-6);
        assert!((up.y - 1.0).abs() < 1e-6);
        assert!(up.z.abs() < 1e-6);

        // Forward is always unit length
        let skew = Orientation::new(0.7, -0.4).forward();
        assert!((skew.length() - 1.0).abs() < 1e-6);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    /// Verify HUD string formats match the classic overlay text.
    #[test]
    fn test_hud_strings() {
        let player = PlayerView {
            ammo: 7,
            max_ammo: 10,
            health: 65,
            max_health: 100,
            ..Default::default()
        };
        assert_eq!(player.ammo_text(), "Ammo: 7/10");
        assert_eq!(player.health_fill(), "65%");

        let score = Scoreboard {
            wave: 3,
            score: 120,
            kills: 12,
        };
        assert_eq!(score.hud_line(), "Wave 3 - Score: 120");
    }

    /// Verify config defaults and derived values.
    #[test]
    fn test_config_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.max_ammo, 10);
        assert_eq!(config.max_health, 100);
        assert!((config.spawn_radius - 50.0).abs() < f32::EPSILON);
        // 2 seconds at 60Hz
        assert_eq!(config.attack_period_ticks(), 120);
        // Opening wave is fixed; wave N spawns base + N afterwards
        assert_eq!(config.wave_size(1), 3);
        assert_eq!(config.wave_size(2), 4);
        assert_eq!(config.wave_size(5), 7);
    }

    /// Verify the instant loader completes every request on the next poll.
    #[test]
    fn test_instant_loader() {
        let mut loader = InstantLoader::default();
        let a = loader.request("assets/enemy.glb");
        let b = loader.request("assets/enemy.glb");
        assert_ne!(a, b);

        let done = loader.poll();
        assert_eq!(done.len(), 2);
        assert_eq!(done[0].0, a);
        assert!(done[0].1.is_ok());
        // Handles are unique per request
        assert_ne!(
            done[0].1.as_ref().unwrap(),
            done[1].1.as_ref().unwrap()
        );
        // Drained: nothing left on the second poll
        assert!(loader.poll().is_empty());
    }

    /// Verify load errors carry a readable message.
    #[test]
    fn test_asset_load_error_display() {
        let err = AssetLoadError::NotFound("assets/enemy.glb".to_string());
        assert_eq!(err.to_string(), "model not found: assets/enemy.glb");
    }
}
