//! Helper drones orbiting the ship and firing on cue.

use glam::DVec2;

use voidrush_core::constants::*;
use voidrush_core::types::heading;

use crate::game_state::GameState;
use crate::systems::effects;

/// Advance orbits and cooldowns; fire every cued drone that is ready.
pub fn run(state: &mut GameState, dt: f64) {
    let anchor = state.ship.position;
    let bounds = state.bounds;
    for drone in &mut state.registry.drones {
        drone.orbit_angle += dt * drone.orbit_speed();
        drone.position = anchor + heading(drone.orbit_angle) * drone.orbit_radius();
        bounds.wrap(&mut drone.position);
        drone.fire_cooldown -= dt;
    }

    for i in 0..state.registry.drones.len() {
        let drone = &state.registry.drones[i];
        if !drone.pending_shot || drone.fire_cooldown > 0.0 {
            continue;
        }
        let origin = drone.position;
        if let Some(target) = acquire_target(state) {
            let aim = target - origin;
            let velocity =
                heading(aim.y.atan2(aim.x)) * BULLET_SPEED + state.ship.velocity * DRONE_VELOCITY_INHERIT;
            state
                .registry
                .spawn_bullet(origin, velocity, DRONE_BULLET_DAMAGE, 0, 0);
            effects::burst(&mut state.particles, &mut state.rng, origin, &effects::DRONE_MUZZLE);
            state.registry.drones[i].fire_cooldown = DRONE_FIRE_COOLDOWN;
        }
        state.registry.drones[i].pending_shot = false;
    }
}

/// Nearest enemy to the ship, or failing that the nearest asteroid.
pub fn acquire_target(state: &GameState) -> Option<DVec2> {
    let ship = state.ship.position;
    nearest_to(ship, state.registry.enemies.iter().map(|e| e.position))
        .or_else(|| nearest_to(ship, state.registry.asteroids.iter().map(|a| a.position)))
}

fn nearest_to(origin: DVec2, points: impl Iterator<Item = DVec2>) -> Option<DVec2> {
    points.min_by(|a, b| {
        a.distance_squared(origin)
            .total_cmp(&b.distance_squared(origin))
    })
}
