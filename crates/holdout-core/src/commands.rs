//! Player commands sent from the frontend into the session.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin the session: engages the aim lock, starts the music, and
    /// requests the opening wave. Ignored outside the menu.
    Start,
    /// Update the look direction from pointer movement. Pitch is clamped
    /// to straight up / straight down.
    Aim { yaw: f32, pitch: f32 },
    /// Fire one projectile along the current look direction. Requires a
    /// running session, an engaged aim lock, and a non-empty magazine.
    Shoot,
    /// Refill the magazine to capacity.
    Reload,
    /// Tear the session down to a fresh menu state.
    Reset,
}
