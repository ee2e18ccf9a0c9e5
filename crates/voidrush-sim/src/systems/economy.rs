//! Score, combo streaks, currency drops and pickup collection.

use glam::DVec2;
use rand::Rng;

use voidrush_core::components::Asteroid;
use voidrush_core::constants::*;
use voidrush_core::enums::{PickupKind, TargetKind};
use voidrush_core::events::GameEvent;

use crate::game_state::{ComboState, GameState};

/// Score a kill through the combo. Returns the points awarded.
pub fn award_kill(state: &mut GameState, base: u32, target: TargetKind, position: DVec2) -> u32 {
    state.combo.count += 1;
    state.combo.timer = COMBO_WINDOW;
    let multiplier = state.combo.multiplier();
    let points = (base as f64 * multiplier).round() as u32;
    state.score += points as u64;
    state.emit(GameEvent::Kill {
        target,
        position,
        score: points,
        combo: state.combo.count,
        multiplier,
    });
    points
}

/// One fixed-interval decay tick.
pub fn decay_combo(combo: &mut ComboState) {
    if combo.timer > 0.0 {
        combo.timer -= COMBO_DECAY_INTERVAL;
        if combo.timer <= 0.0 {
            combo.count = 1;
        }
    }
}

/// Scatter salvage (scaled by size) and, on a lucky roll, one premium shard.
pub fn spawn_drops(state: &mut GameState, asteroid: &Asteroid) {
    let salvage = (asteroid.size.mesh_radius().round() as u32).max(1);
    for _ in 0..salvage {
        spawn_pickup(state, asteroid.position, PickupKind::Salvage);
    }
    if let Some((kind, threshold)) = asteroid.ore.premium_drop() {
        if state.rng.gen::<f64>() > threshold {
            spawn_pickup(state, asteroid.position, kind);
        }
    }
}

fn spawn_pickup(state: &mut GameState, position: DVec2, kind: PickupKind) {
    let velocity = DVec2::new(
        state.rng.gen_range(-PICKUP_SCATTER_SPEED..PICKUP_SCATTER_SPEED),
        state.rng.gen_range(-PICKUP_SCATTER_SPEED..PICKUP_SCATTER_SPEED),
    );
    state.registry.spawn_pickup(position, velocity, kind);
}

/// Drift, damp and wrap pickups; home collectible ones on the ship and
/// bank those that reach it.
pub fn update_pickups(state: &mut GameState, dt: f64) {
    let bounds = state.bounds;
    let ship = state.ship.position;
    let attract = state.modifiers.attract_radius();

    let mut i = state.registry.pickups.len();
    while i > 0 {
        i -= 1;
        let p = &mut state.registry.pickups[i];
        p.age += dt;
        p.position += p.velocity * dt;
        p.velocity *= PICKUP_DAMPING;
        bounds.wrap(&mut p.position);
        if !p.is_collectible() {
            continue;
        }
        let offset = ship - p.position;
        let distance = offset.length();
        if distance < attract {
            p.velocity += offset / (distance + 1e-3) * PICKUP_ATTRACT_ACCEL * dt;
        }
        if distance < PICKUP_COLLECT_RADIUS {
            let pickup = state.registry.pickups.swap_remove(i);
            collect(state, pickup.kind);
        }
    }
}

/// Bank every pickup on the field regardless of distance.
pub fn collect_all(state: &mut GameState) {
    let pickups = std::mem::take(&mut state.registry.pickups);
    for pickup in &pickups {
        collect(state, pickup.kind);
    }
}

fn collect(state: &mut GameState, kind: PickupKind) {
    state.wallet.credit(kind, 1);
    state.emit(GameEvent::PickupCollected { kind });
}
