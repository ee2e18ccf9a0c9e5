//! Wave spawning, enemy telegraphs and wave completion.
//!
//! Asteroids arrive from just outside the field. From wave 3 on, enemies
//! are announced by a beacon and materialize when its scheduled task comes
//! due. Clearing every asteroid plays the warp cue and, a moment later,
//! opens the draft or (before every third wave) the hangar.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidrush_core::constants::*;
use voidrush_core::enums::SizeTier;
use voidrush_core::events::GameEvent;
use voidrush_core::types::{heading, WorldBounds};

use crate::game_state::GameState;
use crate::scheduler::TaskPayload;
use crate::systems::{economy, upgrades};
use crate::world_setup;

pub fn asteroid_count(wave: u32) -> u32 {
    (3 + wave) * 2
}

pub fn enemy_count(wave: u32) -> u32 {
    if wave < ENEMY_FIRST_WAVE {
        0
    } else {
        (1 + (wave - 2) / 2).min(ENEMY_MAX_PER_WAVE)
    }
}

/// Speed and acceleration scale for enemies of this wave.
pub fn boss_multiplier(wave: u32) -> f64 {
    1.0 + ((wave / 3) as f64 - 1.0) * BOSS_STEP
}

/// True when the hangar, not the draft, precedes `wave`.
pub fn is_hangar_wave(wave: u32) -> bool {
    wave % HANGAR_INTERVAL == 0
}

fn random_sign(rng: &mut ChaCha8Rng) -> f64 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

/// Spawn point beyond the edge. Even indices use the left/right bands,
/// odd ones the top/bottom bands.
pub fn edge_spawn_point(rng: &mut ChaCha8Rng, bounds: &WorldBounds, index: u32) -> DVec2 {
    let min_x = bounds.half_width + SPAWN_BUFFER;
    let min_y = bounds.half_height + SPAWN_BUFFER;
    let sx = random_sign(rng);
    let sy = random_sign(rng);
    if index % 2 == 0 {
        DVec2::new(
            sx * rng.gen_range(min_x..min_x + SPAWN_BAND),
            sy * rng.gen_range(0.0..min_y),
        )
    } else {
        DVec2::new(
            sx * rng.gen_range(0.0..min_x),
            sy * rng.gen_range(min_y..min_y + SPAWN_BAND),
        )
    }
}

/// Spawn the current wave's asteroids and telegraph its enemies.
pub fn spawn_wave(state: &mut GameState) {
    let wave = state.wave;
    let count = asteroid_count(wave);
    for i in 0..count {
        let position = edge_spawn_point(&mut state.rng, &state.bounds, i);
        let jitter = state.rng.gen_range(-SPAWN_HEADING_JITTER..SPAWN_HEADING_JITTER);
        let angle = (-position.y).atan2(-position.x) + jitter;
        let speed = ASTEROID_BASE_SPEED * state.rng.gen_range(0.6..1.2)
            + wave as f64 * SPAWN_SPEED_PER_WAVE;
        world_setup::spawn_asteroid(
            &mut state.registry,
            &mut state.rng,
            position,
            heading(angle) * speed,
            SizeTier::Large,
        );
    }
    telegraph_enemies(state);
    log::info!("wave {wave}: {count} asteroids, {} enemies", enemy_count(wave));
    state.emit(GameEvent::WaveStarted {
        wave,
        asteroids: count,
    });
}

fn telegraph_enemies(state: &mut GameState) {
    let multiplier = boss_multiplier(state.wave);
    for _ in 0..enemy_count(state.wave) {
        let mut position = DVec2::new(
            random_sign(&mut state.rng) * state.rng.gen_range(ENEMY_SPAWN_MIN..ENEMY_SPAWN_MAX),
            random_sign(&mut state.rng) * state.rng.gen_range(ENEMY_SPAWN_MIN..ENEMY_SPAWN_MAX),
        );
        state.bounds.wrap(&mut position);
        let delay = BEACON_DELAY_BASE + state.rng.gen::<f64>() * BEACON_DELAY_JITTER;
        let beacon = state.registry.spawn_beacon(position, delay);
        state.scheduler.schedule(
            delay,
            TaskPayload::MaterializeEnemy {
                beacon,
                position,
                speed_multiplier: multiplier,
            },
        );
        state.emit(GameEvent::EnemyTelegraphed { position, delay });
    }
}

/// Age beacons and carry out every task that came due this step.
pub fn run_scheduled(state: &mut GameState, dt: f64) {
    for beacon in &mut state.registry.beacons {
        beacon.age += dt;
    }
    let mut due = Vec::new();
    state.scheduler.poll(dt, &mut due);
    for payload in due {
        match payload {
            TaskPayload::MaterializeEnemy {
                beacon,
                position,
                speed_multiplier,
            } => {
                state.registry.remove_beacon(beacon);
                state.registry.spawn_enemy(position, speed_multiplier);
                state.emit(GameEvent::EnemyArrived { position });
            }
            TaskPayload::OpenIntermission => open_intermission(state),
        }
    }
}

/// Once per wave, when the last asteroid is gone: sweep pickups with a
/// strong magnet, cue the warp and schedule the intermission.
pub fn check_completion(state: &mut GameState) {
    if state.wave_cleared || !state.registry.asteroids.is_empty() {
        return;
    }
    state.wave_cleared = true;
    if state.modifiers.magnet_level >= MAGNET_AUTO_COLLECT_LEVEL {
        economy::collect_all(state);
    }
    state.emit(GameEvent::WaveCleared { wave: state.wave });
    state.emit(GameEvent::WarpStarted {
        direction: heading(state.ship.facing),
    });
    state
        .scheduler
        .schedule(WARP_DELAY, TaskPayload::OpenIntermission);
}

fn open_intermission(state: &mut GameState) {
    if state.flags.game_over {
        return;
    }
    if is_hangar_wave(state.wave + 1) {
        upgrades::open_hangar(state);
    } else if !upgrades::offer_draft(state) {
        begin_next_wave(state);
    }
}

/// Leave the intermission: brief invulnerability, then the next wave.
pub fn begin_next_wave(state: &mut GameState) {
    state.ship.invulnerable_secs = WAVE_START_INVULN;
    state.wave += 1;
    state.wave_cleared = false;
    spawn_wave(state);
}
