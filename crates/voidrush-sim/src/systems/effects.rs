//! Particle and debris emission, plus the per-frame pool update.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidrush_core::components::{Debris, Particle};
use voidrush_core::types::heading;

use crate::game_state::GameState;
use crate::pool::EffectPool;

/// Shape of a particle burst. Ranges are half-open `[min, max)`.
#[derive(Debug, Clone, Copy)]
pub struct Burst {
    pub count: u32,
    pub speed: (f64, f64),
    pub life: (f64, f64),
    pub size: (f64, f64),
    pub color: u32,
}

pub const ASTEROID_BREAK: Burst = Burst {
    count: 16,
    speed: (12.0, 36.0),
    life: (0.25, 0.6),
    size: (0.25, 1.0),
    color: 0xaad0ff,
};

pub const ENEMY_BREAK: Burst = Burst {
    count: 18,
    speed: (14.0, 34.0),
    life: (0.25, 0.55),
    size: (0.22, 0.8),
    color: 0xffaaaa,
};

pub const SHIELD_HIT: Burst = Burst {
    count: 24,
    speed: (20.0, 40.0),
    life: (0.2, 0.5),
    size: (0.3, 1.2),
    color: 0x66ccff,
};

pub const MUZZLE_FLASH: Burst = Burst {
    count: 6,
    speed: (10.0, 26.0),
    life: (0.08, 0.18),
    size: (0.18, 0.5),
    color: 0xffe6aa,
};

pub const ENGINE_EXHAUST: Burst = Burst {
    count: 2,
    speed: (10.0, 18.0),
    life: (0.15, 0.28),
    size: (0.18, 0.35),
    color: 0x88bbff,
};

pub const RICOCHET_SPARK: Burst = Burst {
    count: 6,
    speed: (8.0, 18.0),
    life: (0.08, 0.18),
    size: (0.18, 0.4),
    color: 0xbbe0ff,
};

pub const DRONE_MUZZLE: Burst = Burst {
    count: 4,
    speed: (8.0, 14.0),
    life: (0.08, 0.16),
    size: (0.15, 0.3),
    color: 0x9fffe6,
};

pub const NOVA_FLASH: Burst = Burst {
    count: 24,
    speed: (16.0, 40.0),
    life: (0.25, 0.6),
    size: (0.25, 1.1),
    color: 0xffe0aa,
};

/// Emit `shape.count` particles at `origin` in random directions.
/// Stops early once the pool runs dry.
pub fn burst(pool: &mut EffectPool<Particle>, rng: &mut ChaCha8Rng, origin: DVec2, shape: &Burst) {
    for _ in 0..shape.count {
        let direction = heading(rng.gen_range(0.0..TAU));
        let speed = rng.gen_range(shape.speed.0..shape.speed.1);
        let ttl = rng.gen_range(shape.life.0..shape.life.1);
        let size = rng.gen_range(shape.size.0..shape.size.1);
        let spawned = pool.spawn(Particle {
            position: origin,
            velocity: direction * speed,
            life: ttl,
            ttl,
            size,
            color: shape.color,
        });
        if !spawned {
            break;
        }
    }
}

/// Scatter between `base` and `2 * base - 1` rock shards.
pub fn debris_burst(pool: &mut EffectPool<Debris>, rng: &mut ChaCha8Rng, origin: DVec2, base: u32) {
    let count = base + (rng.gen::<f64>() * base as f64).floor() as u32;
    for _ in 0..count {
        let direction = heading(rng.gen_range(0.0..TAU));
        let speed = rng.gen_range(6.0..20.0);
        let ttl = rng.gen_range(0.6..1.3);
        let spawned = pool.spawn(Debris {
            position: origin,
            velocity: direction * speed,
            life: ttl,
            ttl,
            rotation: rng.gen_range(0.0..TAU),
            spin: rng.gen_range(-4.0..4.0),
        });
        if !spawned {
            break;
        }
    }
}

/// Advance both pools. Runs every frame, frozen or not.
pub fn run(state: &mut GameState, dt: f64) {
    state.particles.update(dt, &state.bounds);
    state.debris.update(dt, &state.bounds);
}
