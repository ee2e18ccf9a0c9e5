//! Kinematic integration and toroidal wrap.
//!
//! Semi-implicit Euler: velocity first, then position += velocity * dt.
//! Bullets are integrated here but wrapped separately, after the ricochet
//! pass has had a chance to bounce them off the edges.

use voidrush_core::types::clamp_magnitude;

use crate::game_state::GameState;

/// Age and move bullets, drift asteroids, steer enemies toward the ship.
pub fn run(state: &mut GameState, dt: f64) {
    integrate_bullets(state, dt);
    integrate_asteroids(state, dt);
    chase_ship(state, dt);
}

/// Count down bullet lifetimes, drop the expired ones, move the rest.
pub fn integrate_bullets(state: &mut GameState, dt: f64) {
    let bullets = &mut state.registry.bullets;
    for i in (0..bullets.len()).rev() {
        bullets[i].life -= dt;
        if bullets[i].life <= 0.0 {
            bullets.swap_remove(i);
            continue;
        }
        let b = &mut bullets[i];
        b.position += b.velocity * dt;
    }
}

pub fn wrap_bullets(state: &mut GameState) {
    let bounds = state.bounds;
    for b in &mut state.registry.bullets {
        bounds.wrap(&mut b.position);
    }
}

pub fn integrate_asteroids(state: &mut GameState, dt: f64) {
    let bounds = state.bounds;
    for a in &mut state.registry.asteroids {
        a.position += a.velocity * dt;
        a.rotation += a.spin * dt;
        bounds.wrap(&mut a.position);
    }
}

/// Enemies accelerate straight at the ship (no shortcut across the wrap).
pub fn chase_ship(state: &mut GameState, dt: f64) {
    let bounds = state.bounds;
    let target = state.ship.position;
    for e in &mut state.registry.enemies {
        let offset = target - e.position;
        let direction = offset / (offset.length() + 1e-3);
        e.velocity = clamp_magnitude(e.velocity + direction * e.accel * dt, e.max_speed);
        e.position += e.velocity * dt;
        bounds.wrap(&mut e.position);
        e.rotation = e.velocity.y.atan2(e.velocity.x);
    }
}
