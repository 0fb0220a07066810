//! Session engine for HOLDOUT.
//!
//! Owns the hecs ECS world, runs the per-tick systems in a fixed order,
//! and produces GameStateSnapshots for the frontend.

pub mod session;
pub mod systems;
pub mod world_setup;

pub use holdout_core as core;
pub use session::GameSession;
