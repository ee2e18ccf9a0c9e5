//! Simulation engine for VOIDRUSH.
//!
//! Owns the game state, runs systems once per rendered frame with a
//! clamped delta, and produces GameStateSnapshots for the frontend.

pub mod camera;
pub mod config;
pub mod engine;
pub mod game_state;
pub mod pool;
pub mod registry;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use config::SimConfig;
pub use engine::SimulationEngine;
pub use voidrush_core as core;

#[cfg(test)]
mod tests;
