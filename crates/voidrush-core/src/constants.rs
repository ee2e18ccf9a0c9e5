//! Simulation constants and tuning parameters.

use std::f64::consts::{FRAC_PI_2, PI};

/// Largest frame delta the simulation will integrate (seconds).
pub const MAX_FRAME_DT: f64 = 0.033;

// --- World bounds ---

/// Toroidal world half width.
pub const WORLD_HALF_WIDTH: f64 = 375.0;

/// Toroidal world half height.
pub const WORLD_HALF_HEIGHT: f64 = 249.0;

// --- Ship ---

/// Thrust acceleration (units/s²), before the engine multiplier.
pub const SHIP_ACCEL: f64 = 40.0;

/// Speed cap (units/s), before the engine multiplier.
pub const SHIP_MAX_SPEED: f64 = 40.0;

/// Multiplicative velocity damping applied once per stepped frame.
pub const SHIP_FRICTION: f64 = 0.98;

/// Turn rate when steering with the keyboard (rad/s).
pub const SHIP_TURN_RATE: f64 = 3.2;

/// Base seconds between shots.
pub const SHIP_FIRE_INTERVAL: f64 = 0.16;

pub const SHIP_RADIUS: f64 = 1.5;

/// Facing after a reset (pointing toward -y).
pub const SHIP_SPAWN_FACING: f64 = PI + FRAC_PI_2;

/// Invulnerability granted on reset.
pub const SHIP_SPAWN_INVULN: f64 = 2.0;

/// Aim points closer than this do not rotate the ship.
pub const AIM_DEADZONE: f64 = 0.8;

/// Muzzle distance ahead of the ship centre.
pub const MUZZLE_OFFSET: f64 = 1.4;

// --- Bullets ---

pub const BULLET_SPEED: f64 = 70.0;
pub const BULLET_LIFETIME: f64 = 1.1;
pub const BULLET_RADIUS: f64 = 0.2;
pub const BULLET_DAMAGE: f64 = 1.0;

/// Angular offsets of each bullet in a volley, per spread tier (radians).
pub const VOLLEY_SINGLE: [f64; 1] = [0.0];
pub const VOLLEY_NARROW: [f64; 3] = [0.0, -0.18, 0.18];
pub const VOLLEY_WIDE: [f64; 5] = [0.0, -0.12, 0.12, -0.28, 0.28];

// --- Asteroids ---

/// Base drift speed; spawn and split speeds scale from this.
pub const ASTEROID_BASE_SPEED: f64 = 8.0;

/// Collision radius as a fraction of the mesh radius.
pub const ASTEROID_HITBOX_SCALE: f64 = 0.9;

/// Fraction of the parent velocity inherited by split children.
pub const SPLIT_VELOCITY_INHERIT: f64 = 0.2;

// --- Enemies ---

pub const ENEMY_RADIUS: f64 = 1.2;
pub const ENEMY_ACCEL: f64 = 20.0;
pub const ENEMY_MAX_SPEED: f64 = 26.0;
pub const ENEMY_SCORE: u32 = 150;

/// First wave that fields enemies.
pub const ENEMY_FIRST_WAVE: u32 = 3;

/// Upper bound on enemies per wave.
pub const ENEMY_MAX_PER_WAVE: u32 = 4;

/// Enemy spawn distance band per axis (before random sign).
pub const ENEMY_SPAWN_MIN: f64 = 450.0;
pub const ENEMY_SPAWN_MAX: f64 = 600.0;

/// Boss speed multiplier gained per three waves.
pub const BOSS_STEP: f64 = 0.2;

// --- Waves ---

/// Distance beyond the world edge that asteroids spawn.
pub const SPAWN_BUFFER: f64 = 20.0;

/// Depth of the spawn band beyond the buffer.
pub const SPAWN_BAND: f64 = 30.0;

/// Random heading jitter applied to asteroids aimed at the centre (radians).
pub const SPAWN_HEADING_JITTER: f64 = 0.6;

/// Extra asteroid speed per wave number.
pub const SPAWN_SPEED_PER_WAVE: f64 = 0.3;

/// Telegraph beacon delay: base plus up to the jitter.
pub const BEACON_DELAY_BASE: f64 = 1.1;
pub const BEACON_DELAY_JITTER: f64 = 0.4;

/// Delay between the warp cue and the intermission opening.
pub const WARP_DELAY: f64 = 0.6;

/// Every wave divisible by this is preceded by the hangar.
pub const HANGAR_INTERVAL: u32 = 3;

/// Invulnerability granted when a new wave starts after an intermission.
pub const WAVE_START_INVULN: f64 = 3.0;

// --- Combat ---

/// Invulnerability after a shield absorbs a hit.
pub const SHIELD_INVULN: f64 = 1.0;

pub const DRONE_RADIUS: f64 = 0.5;

/// Drone push-out speed when overlapping an asteroid (units/s).
pub const DRONE_PUSH_SPEED: f64 = 15.0;

// --- Drones ---

pub const DRONE_MAX: u32 = 3;
pub const DRONE_ORBIT_RADIUS: f64 = 4.2;
pub const DRONE_ORBIT_RADIUS_STEP: f64 = 0.8;
pub const DRONE_ORBIT_SPEED: f64 = 2.5;
pub const DRONE_ORBIT_SPEED_STEP: f64 = 0.3;
pub const DRONE_FIRE_COOLDOWN: f64 = 0.5;
pub const DRONE_BULLET_DAMAGE: f64 = 0.5;

/// Fraction of ship velocity added to drone bullets.
pub const DRONE_VELOCITY_INHERIT: f64 = 0.2;

/// Drones fire after every this many player shots.
pub const DRONE_SHOT_INTERVAL: u32 = 2;

// --- Economy ---

/// Combo decay window refreshed by each kill (seconds).
pub const COMBO_WINDOW: f64 = 2.3;

/// Period of the combo decay tick (seconds).
pub const COMBO_DECAY_INTERVAL: f64 = 0.25;

/// Multiplier gained per combo step beyond the first.
pub const COMBO_STEP: f64 = 0.2;

pub const PICKUP_COLLECT_DELAY: f64 = 0.25;
pub const PICKUP_SCATTER_SPEED: f64 = 6.0;
pub const PICKUP_DAMPING: f64 = 0.98;
pub const PICKUP_ATTRACT_RADIUS: f64 = 10.0;
pub const PICKUP_ATTRACT_ACCEL: f64 = 60.0;
pub const PICKUP_COLLECT_RADIUS: f64 = 0.8;

/// Age over which a pickup fades to its floor opacity.
pub const PICKUP_FADE_SECS: f64 = 10.0;
pub const PICKUP_MIN_OPACITY: f64 = 0.4;

/// Magnet multiplier with no magnet upgrades.
pub const MAGNET_DEFAULT: f64 = 1.5;

/// Magnet multiplier before the first upgrade level is added.
pub const MAGNET_BASE: f64 = 1.2;
pub const MAGNET_PER_LEVEL: f64 = 0.8;

/// Magnet level at which a cleared wave sweeps up every pickup.
pub const MAGNET_AUTO_COLLECT_LEVEL: u32 = 3;

// --- Upgrades ---

/// Options offered per draft.
pub const DRAFT_SIZE: usize = 3;

/// Offers shown per hangar visit.
pub const SHOP_SIZE: usize = 4;

pub const REROLL_BASE_COST: f64 = 15.0;
pub const REROLL_GROWTH: f64 = 1.15;

/// Reroll count from which epic offers weigh more.
pub const REROLL_EPIC_BONUS_AT: u32 = 4;
pub const REROLL_EPIC_WEIGHT: u32 = 3;

pub const NOVA_RADIUS: f64 = 18.0;
pub const NOVA_SCORE: u32 = 50;

// --- Effects ---

pub const PARTICLE_CAPACITY: usize = 350;
pub const DEBRIS_CAPACITY: usize = 260;

// --- Camera ---

/// Global scale applied to requested shake magnitudes.
pub const SHAKE_SCALE: f64 = 0.35;

/// Distance falloff strength for located shakes.
pub const SHAKE_FALLOFF: f64 = 0.9;

/// Shakes weaker than this are ignored.
pub const SHAKE_MIN: f64 = 0.001;
