//! Entity factories that need randomness.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidrush_core::components::Asteroid;
use voidrush_core::constants::{ASTEROID_BASE_SPEED, SPLIT_VELOCITY_INHERIT};
use voidrush_core::enums::{OreTier, SizeTier};
use voidrush_core::types::{heading, EntityId};

use crate::registry::EntityRegistry;

/// Spawn an asteroid with a rolled ore tier and spin.
pub fn spawn_asteroid(
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    position: DVec2,
    velocity: DVec2,
    size: SizeTier,
) -> EntityId {
    let ore = OreTier::from_roll(rng.gen());
    let spin = rng.gen_range(-1.0..1.0);
    registry.spawn_asteroid(position, velocity, size, ore, spin)
}

/// Replace a destroyed asteroid with its fragments, if its tier has any.
/// Returns how many were spawned.
pub fn split_asteroid(registry: &mut EntityRegistry, rng: &mut ChaCha8Rng, parent: &Asteroid) -> usize {
    let Some(child) = parent.size.child() else {
        return 0;
    };
    let count = parent.size.child_count();
    for _ in 0..count {
        let speed = rng.gen_range(ASTEROID_BASE_SPEED * 0.6..ASTEROID_BASE_SPEED * 1.2);
        let velocity =
            heading(rng.gen_range(0.0..TAU)) * speed + parent.velocity * SPLIT_VELOCITY_INHERIT;
        spawn_asteroid(registry, rng, parent.position, velocity, child);
    }
    count
}
