//! Enumeration types used throughout the session.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pre-start: the frontend shows the menu overlay and the world holds
    /// only the player.
    #[default]
    Menu,
    /// Live gameplay: full system pipeline runs each tick.
    Active,
    /// Health reached zero. Terminal until reset; the scene keeps animating
    /// but damage, scoring, and waves are done.
    GameOver,
}
