//! Player ship control: steering, thrust and the primary gun.

use glam::DVec2;
use rand::Rng;

use voidrush_core::commands::FrameInput;
use voidrush_core::constants::*;
use voidrush_core::events::GameEvent;
use voidrush_core::types::{clamp_magnitude, heading};

use crate::game_state::GameState;
use crate::systems::effects;

/// Tick invulnerability, turn or aim, apply thrust, integrate and wrap.
pub fn steer(state: &mut GameState, input: &FrameInput, dt: f64) {
    let ship = &mut state.ship;
    ship.invulnerable_secs = (ship.invulnerable_secs - dt).max(0.0);

    match input.aim {
        Some(target) => {
            let offset = target - ship.position;
            if offset.length() > AIM_DEADZONE {
                ship.facing = offset.y.atan2(offset.x);
            }
        }
        None => {
            if input.turn_left {
                ship.facing += SHIP_TURN_RATE * dt;
            }
            if input.turn_right {
                ship.facing -= SHIP_TURN_RATE * dt;
            }
        }
    }

    let engine = state.modifiers.engine;
    let direction = heading(ship.facing);
    ship.thrusting = input.thrust;
    if input.thrust {
        ship.velocity += direction * SHIP_ACCEL * engine * dt;
    }
    ship.velocity = clamp_magnitude(ship.velocity, SHIP_MAX_SPEED * engine);
    ship.velocity *= SHIP_FRICTION;
    ship.position += ship.velocity * dt;
    state.bounds.wrap(&mut ship.position);

    if input.thrust && state.rng.gen_bool(0.5) {
        let exhaust = state.ship.position - direction * 1.2;
        effects::burst(&mut state.particles, &mut state.rng, exhaust, &effects::ENGINE_EXHAUST);
    }
}

/// Count down the gun and fire a volley when the trigger is held.
pub fn fire_control(state: &mut GameState, input: &FrameInput, dt: f64) {
    state.ship.fire_cooldown -= dt;
    if input.fire && state.ship.fire_cooldown <= 0.0 {
        fire_volley(state);
        state.ship.fire_cooldown = state.modifiers.fire_interval();
    }
}

/// One trigger pull: a bullet per spread offset, all sharing pierce and
/// ricochet charges from the current modifiers. Every second volley cues
/// the drones.
pub fn fire_volley(state: &mut GameState) {
    let ship = &state.ship;
    let direction = heading(ship.facing);
    let muzzle = ship.position + direction * MUZZLE_OFFSET;
    let inherited = ship.velocity;
    let facing = ship.facing;
    let pierce = state.modifiers.pierce.charges();
    let ricochet = state.modifiers.ricochet;

    let offsets = state.modifiers.volley_offsets();
    for &offset in offsets {
        let velocity = heading(facing + offset) * BULLET_SPEED + inherited;
        state
            .registry
            .spawn_bullet(muzzle, velocity, BULLET_DAMAGE, pierce, ricochet);
    }

    state.shots_fired += 1;
    if state.shots_fired % DRONE_SHOT_INTERVAL == 0 {
        for drone in &mut state.registry.drones {
            drone.pending_shot = true;
        }
    }

    let flash: DVec2 = state.ship.position + direction * 1.2;
    effects::burst(&mut state.particles, &mut state.rng, flash, &effects::MUZZLE_FLASH);
    state.shake(0.15, 0.06, None);
    state.emit(GameEvent::ShotFired {
        bullets: offsets.len() as u32,
    });
}
