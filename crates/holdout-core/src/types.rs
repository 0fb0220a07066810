//! Geometric primitives and the simulation clock.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// 3D position in world space (world units, Cartesian).
/// x = East, y = Up, z = South: a camera at rest looks down negative z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Per-tick displacement in world space (world units per tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Player look direction in radians: yaw around the vertical axis, pitch
/// above the horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub yaw: f32,
    pub pitch: f32,
}

/// Simulation clock: whole ticks plus elapsed seconds.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Ticks completed since the session began.
    pub tick: u64,
    /// Seconds of simulated time elapsed.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Straight-line distance to another position in world units.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }

    /// Distance from the world origin, where the player stands.
    pub fn range_from_origin(&self) -> f32 {
        self.0.length()
    }
}

impl Orientation {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Unit forward vector for this look direction.
    ///
    /// At yaw = 0, pitch = 0 the forward vector is (0, 0, -1). Positive yaw
    /// swings toward negative x; positive pitch tilts up toward positive y.
    pub fn forward(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }
}

impl SimTime {
    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Step the clock forward one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
