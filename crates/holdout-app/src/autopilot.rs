//! Scripted stand-in for pointer and keyboard input, used by the headless
//! harness and soak tests.

use holdout_core::commands::PlayerCommand;
use holdout_core::enums::GamePhase;
use holdout_core::state::GameStateSnapshot;

/// Ticks between trigger pulls. The projectile stream stays well under the
/// travel cap at this rate.
const SHOOT_INTERVAL: u64 = 6;

/// Compute this tick's input from the latest snapshot: track the nearest
/// enemy, fire on an interval, reload on an empty magazine.
pub fn commands_for(snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
    let mut commands = Vec::new();
    if snapshot.phase != GamePhase::Active {
        return commands;
    }

    if snapshot.player.ammo == 0 {
        commands.push(PlayerCommand::Reload);
    }

    if let Some(target) = snapshot
        .enemies
        .iter()
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
    {
        let dir = target.position.0.normalize_or_zero();
        // Invert the forward-vector convention: yaw 0 / pitch 0 faces -z.
        let yaw = (-dir.x).atan2(-dir.z);
        let pitch = dir.y.asin();
        commands.push(PlayerCommand::Aim { yaw, pitch });

        if snapshot.time.tick % SHOOT_INTERVAL == 0 {
            commands.push(PlayerCommand::Shoot);
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdout_core::assets::ModelHandle;
    use holdout_core::state::EnemyView;
    use holdout_core::types::Position;

    fn active_snapshot() -> GameStateSnapshot {
        let mut snapshot = GameStateSnapshot::default();
        snapshot.phase = GamePhase::Active;
        snapshot.player.ammo = 10;
        snapshot.player.max_ammo = 10;
        snapshot
    }

    fn enemy_at(id: u32, x: f32, y: f32, z: f32) -> EnemyView {
        let position = Position::new(x, y, z);
        EnemyView {
            id,
            position,
            model: ModelHandle(0),
            scale: 1.2,
            distance: position.range_from_origin(),
        }
    }

    #[test]
    fn test_idle_outside_active_phase() {
        let snapshot = GameStateSnapshot::default();
        assert!(commands_for(&snapshot).is_empty());
    }

    #[test]
    fn test_aims_at_nearest_enemy() {
        let mut snapshot = active_snapshot();
        snapshot.enemies.push(enemy_at(1, 0.0, 0.0, -40.0));
        snapshot.enemies.push(enemy_at(2, 10.0, 0.0, 0.0));

        let commands = commands_for(&snapshot);
        let aim = commands
            .iter()
            .find_map(|c| match c {
                PlayerCommand::Aim { yaw, pitch } => Some((*yaw, *pitch)),
                _ => None,
            })
            .expect("Should aim at the nearest enemy");

        // Nearest is at +x: that bearing is yaw = -pi/2, level pitch.
        assert!((aim.0 - (-std::f32::consts::FRAC_PI_2)).abs() < 1e-5);
        assert!(aim.1.abs() < 1e-5);
    }

    #[test]
    fn test_aim_dead_ahead() {
        let mut snapshot = active_snapshot();
        snapshot.enemies.push(enemy_at(1, 0.0, 0.0, -25.0));

        let commands = commands_for(&snapshot);
        let aim = commands
            .iter()
            .find_map(|c| match c {
                PlayerCommand::Aim { yaw, pitch } => Some((*yaw, *pitch)),
                _ => None,
            })
            .expect("Should aim");
        assert!(aim.0.abs() < 1e-5);
        assert!(aim.1.abs() < 1e-5);
    }

    #[test]
    fn test_reloads_when_empty() {
        let mut snapshot = active_snapshot();
        snapshot.player.ammo = 0;
        snapshot.enemies.push(enemy_at(1, 0.0, 0.0, -40.0));

        let commands = commands_for(&snapshot);
        assert!(matches!(commands[0], PlayerCommand::Reload));
    }

    #[test]
    fn test_fires_on_interval_only() {
        let mut snapshot = active_snapshot();
        snapshot.enemies.push(enemy_at(1, 0.0, 0.0, -40.0));

        snapshot.time.tick = 12;
        assert!(commands_for(&snapshot)
            .iter()
            .any(|c| matches!(c, PlayerCommand::Shoot)));

        snapshot.time.tick = 13;
        assert!(!commands_for(&snapshot)
            .iter()
            .any(|c| matches!(c, PlayerCommand::Shoot)));
    }
}
