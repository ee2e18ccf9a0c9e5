//! Entity data. One plain struct per entity kind; registries own them.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::EntityId;

/// The player ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Direction of travel in radians (0 = +x).
    pub facing: f64,
    pub fire_cooldown: f64,
    pub radius: f64,
    pub alive: bool,
    pub visible: bool,
    pub invulnerable_secs: f64,
    pub thrusting: bool,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            facing: SHIP_SPAWN_FACING,
            fire_cooldown: 0.0,
            radius: SHIP_RADIUS,
            alive: true,
            visible: true,
            invulnerable_secs: SHIP_SPAWN_INVULN,
            thrusting: false,
        }
    }
}

impl Ship {
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_secs > 0.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: EntityId,
    pub position: DVec2,
    pub velocity: DVec2,
    pub life: f64,
    pub radius: f64,
    pub damage: f64,
    pub pierce: u32,
    pub ricochet: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: EntityId,
    pub position: DVec2,
    pub velocity: DVec2,
    pub rotation: f64,
    pub spin: f64,
    /// Collision radius (mesh radius scaled by the hitbox factor).
    pub radius: f64,
    pub size: SizeTier,
    pub ore: OreTier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub position: DVec2,
    pub velocity: DVec2,
    pub rotation: f64,
    pub radius: f64,
    pub accel: f64,
    pub max_speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drone {
    pub id: EntityId,
    pub index: u32,
    pub position: DVec2,
    pub orbit_angle: f64,
    pub fire_cooldown: f64,
    pub pending_shot: bool,
}

impl Drone {
    pub fn orbit_radius(&self) -> f64 {
        DRONE_ORBIT_RADIUS + self.index as f64 * DRONE_ORBIT_RADIUS_STEP
    }

    /// Angular speed (rad/s); outer drones circle faster.
    pub fn orbit_speed(&self) -> f64 {
        DRONE_ORBIT_SPEED * (1.0 + self.index as f64 * DRONE_ORBIT_SPEED_STEP)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub id: EntityId,
    pub position: DVec2,
    pub velocity: DVec2,
    pub age: f64,
    pub kind: PickupKind,
}

impl Pickup {
    pub fn is_collectible(&self) -> bool {
        self.age > PICKUP_COLLECT_DELAY
    }

    pub fn opacity(&self) -> f64 {
        PICKUP_MIN_OPACITY + (1.0 - PICKUP_MIN_OPACITY) * (1.0 - self.age / PICKUP_FADE_SECS).max(0.0)
    }
}

/// Telegraph marker shown where an enemy is about to appear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beacon {
    pub id: EntityId,
    pub position: DVec2,
    pub age: f64,
    pub delay: f64,
}

impl Beacon {
    pub fn scale(&self) -> f64 {
        0.2 + self.age * 3.0
    }

    pub fn opacity(&self) -> f64 {
        (0.9 - self.age * 0.7).max(0.0)
    }
}

/// Short-lived spark. Pooled.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub life: f64,
    pub ttl: f64,
    pub size: f64,
    /// Packed 0xRRGGBB.
    pub color: u32,
}

/// Tumbling rock shard. Pooled.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Debris {
    pub position: DVec2,
    pub velocity: DVec2,
    pub life: f64,
    pub ttl: f64,
    pub rotation: f64,
    pub spin: f64,
}

/// Run-scoped player modifiers accumulated from upgrades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    pub fire_rate: f64,
    pub engine: f64,
    pub spread: SpreadTier,
    pub pierce: PierceTier,
    pub shields: u32,
    pub ricochet: u32,
    pub drones: u32,
    pub magnet_level: u32,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            fire_rate: 1.0,
            engine: 1.0,
            spread: SpreadTier::None,
            pierce: PierceTier::None,
            shields: 0,
            ricochet: 0,
            drones: 0,
            magnet_level: 0,
        }
    }
}

impl Modifiers {
    /// Seconds between player shots.
    pub fn fire_interval(&self) -> f64 {
        SHIP_FIRE_INTERVAL / self.fire_rate
    }

    pub fn magnet_multiplier(&self) -> f64 {
        if self.magnet_level == 0 {
            MAGNET_DEFAULT
        } else {
            MAGNET_BASE + MAGNET_PER_LEVEL * self.magnet_level as f64
        }
    }

    /// Radius inside which collectible pickups home in on the ship.
    pub fn attract_radius(&self) -> f64 {
        PICKUP_ATTRACT_RADIUS * self.magnet_multiplier()
    }

    /// Angular offsets for every bullet of one volley.
    pub fn volley_offsets(&self) -> &'static [f64] {
        match self.spread {
            SpreadTier::None => &VOLLEY_SINGLE,
            SpreadTier::Narrow => &VOLLEY_NARROW,
            SpreadTier::Wide => &VOLLEY_WIDE,
        }
    }
}
