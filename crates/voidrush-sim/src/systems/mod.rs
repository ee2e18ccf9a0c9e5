//! Systems that operate on the game state each frame.
//!
//! Systems are plain functions that take `&mut GameState` (or `&GameState`
//! for read-only work). They do not own state; all state lives in the
//! aggregate.

pub mod collision;
pub mod drones;
pub mod economy;
pub mod effects;
pub mod movement;
pub mod ship;
pub mod snapshot;
pub mod upgrades;
pub mod wave_director;
