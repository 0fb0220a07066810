//! HOLDOUT embedding shell.
//!
//! This crate wires the session core to a frontend: a fixed-rate loop
//! thread, command and snapshot plumbing, and a scripted autopilot for
//! headless runs.

pub mod autopilot;
pub mod frontend;
pub mod session_loop;
pub mod state;

pub use holdout_core as core;
