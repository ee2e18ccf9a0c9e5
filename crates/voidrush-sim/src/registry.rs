//! Ordered collections of long-lived entities.
//!
//! Each kind lives in its own `Vec`, in spawn order. Systems that remove
//! entities while scanning walk indices in reverse and use `swap_remove`,
//! so removal never disturbs slots still to be visited.

use glam::DVec2;

use voidrush_core::components::*;
use voidrush_core::constants::*;
use voidrush_core::enums::{OreTier, PickupKind, SizeTier};
use voidrush_core::types::{heading, EntityId, IdAllocator};

#[derive(Debug, Default)]
pub struct EntityRegistry {
    ids: IdAllocator,
    pub bullets: Vec<Bullet>,
    pub asteroids: Vec<Asteroid>,
    pub enemies: Vec<Enemy>,
    pub drones: Vec<Drone>,
    pub pickups: Vec<Pickup>,
    pub beacons: Vec<Beacon>,
}

impl EntityRegistry {
    pub fn spawn_bullet(
        &mut self,
        position: DVec2,
        velocity: DVec2,
        damage: f64,
        pierce: u32,
        ricochet: u32,
    ) -> EntityId {
        let id = self.ids.allocate();
        self.bullets.push(Bullet {
            id,
            position,
            velocity,
            life: BULLET_LIFETIME,
            radius: BULLET_RADIUS,
            damage,
            pierce,
            ricochet,
        });
        id
    }

    pub fn spawn_asteroid(
        &mut self,
        position: DVec2,
        velocity: DVec2,
        size: SizeTier,
        ore: OreTier,
        spin: f64,
    ) -> EntityId {
        let id = self.ids.allocate();
        self.asteroids.push(Asteroid {
            id,
            position,
            velocity,
            rotation: 0.0,
            spin,
            radius: size.mesh_radius() * ASTEROID_HITBOX_SCALE,
            size,
            ore,
        });
        id
    }

    /// Spawn an enemy whose speed and acceleration are scaled by `speed_multiplier`.
    pub fn spawn_enemy(&mut self, position: DVec2, speed_multiplier: f64) -> EntityId {
        let id = self.ids.allocate();
        self.enemies.push(Enemy {
            id,
            position,
            velocity: DVec2::ZERO,
            rotation: 0.0,
            radius: ENEMY_RADIUS,
            accel: ENEMY_ACCEL * speed_multiplier,
            max_speed: ENEMY_MAX_SPEED * speed_multiplier,
        });
        id
    }

    /// Add the next drone in orbit order, unless the cap is reached.
    pub fn spawn_drone(&mut self, anchor: DVec2) -> Option<EntityId> {
        if self.drones.len() >= DRONE_MAX as usize {
            return None;
        }
        let id = self.ids.allocate();
        let index = self.drones.len() as u32;
        let mut drone = Drone {
            id,
            index,
            position: anchor,
            orbit_angle: index as f64 * std::f64::consts::TAU / DRONE_MAX as f64,
            fire_cooldown: 0.0,
            pending_shot: false,
        };
        drone.position = anchor + heading(drone.orbit_angle) * drone.orbit_radius();
        self.drones.push(drone);
        Some(id)
    }

    pub fn spawn_pickup(&mut self, position: DVec2, velocity: DVec2, kind: PickupKind) -> EntityId {
        let id = self.ids.allocate();
        self.pickups.push(Pickup {
            id,
            position,
            velocity,
            age: 0.0,
            kind,
        });
        id
    }

    pub fn spawn_beacon(&mut self, position: DVec2, delay: f64) -> EntityId {
        let id = self.ids.allocate();
        self.beacons.push(Beacon {
            id,
            position,
            age: 0.0,
            delay,
        });
        id
    }

    pub fn remove_beacon(&mut self, id: EntityId) -> Option<Beacon> {
        let index = self.beacons.iter().position(|b| b.id == id)?;
        Some(self.beacons.remove(index))
    }

    /// Entities drawn with an outline: asteroids, enemies and drones.
    pub fn outlined(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.asteroids
            .iter()
            .map(|a| a.id)
            .chain(self.enemies.iter().map(|e| e.id))
            .chain(self.drones.iter().map(|d| d.id))
    }

    /// Drop every entity. Ids keep counting so stale handles never alias.
    pub fn clear(&mut self) {
        self.bullets.clear();
        self.asteroids.clear();
        self.enemies.clear();
        self.drones.clear();
        self.pickups.clear();
        self.beacons.clear();
    }
}
