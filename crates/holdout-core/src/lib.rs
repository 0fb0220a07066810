//! Core types and definitions for the HOLDOUT session.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, constants, and the
//! asset-loading contract. It has no dependency on any runtime framework
//! or rendering stack.

pub mod assets;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
