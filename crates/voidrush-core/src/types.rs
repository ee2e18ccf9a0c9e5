//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{WORLD_HALF_HEIGHT, WORLD_HALF_WIDTH};
use crate::enums::PickupKind;

/// Stable handle for a long-lived entity. Never reused within a process.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EntityId(pub u32);

/// Monotonic source of `EntityId`s.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Half extents of the toroidal play field, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub half_width: f64,
    pub half_height: f64,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            half_width: WORLD_HALF_WIDTH,
            half_height: WORLD_HALF_HEIGHT,
        }
    }
}

impl WorldBounds {
    /// Teleport a position that left the field to the opposite edge.
    ///
    /// Single step: a point past +half lands exactly on -half, not at the
    /// modulo remainder.
    pub fn wrap(&self, pos: &mut DVec2) {
        if pos.x > self.half_width {
            pos.x = -self.half_width;
        } else if pos.x < -self.half_width {
            pos.x = self.half_width;
        }
        if pos.y > self.half_height {
            pos.y = -self.half_height;
        } else if pos.y < -self.half_height {
            pos.y = self.half_height;
        }
    }

    pub fn contains(&self, pos: DVec2) -> bool {
        pos.x.abs() <= self.half_width && pos.y.abs() <= self.half_height
    }

    /// Centre-to-corner distance.
    pub fn diagonal(&self) -> f64 {
        self.half_width.hypot(self.half_height)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Frames presented, including frozen ones.
    pub frame: u64,
    /// Frames in which the simulation actually stepped.
    pub tick: u64,
    /// Simulated seconds (sum of clamped deltas of stepped frames).
    pub elapsed_secs: f64,
}

impl SimTime {
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Currency balances. Also used as a price tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    pub salvage: u32,
    pub gold: u32,
    pub platinum: u32,
    pub adamantium: u32,
}

/// A price in every currency.
pub type Cost = Wallet;

impl Wallet {
    pub const fn salvage(amount: u32) -> Self {
        Self {
            salvage: amount,
            gold: 0,
            platinum: 0,
            adamantium: 0,
        }
    }

    pub fn credit(&mut self, kind: PickupKind, amount: u32) {
        let balance = match kind {
            PickupKind::Salvage => &mut self.salvage,
            PickupKind::Gold => &mut self.gold,
            PickupKind::Platinum => &mut self.platinum,
            PickupKind::Adamantium => &mut self.adamantium,
        };
        *balance = balance.saturating_add(amount);
    }

    pub fn can_afford(&self, cost: &Cost) -> bool {
        self.salvage >= cost.salvage
            && self.gold >= cost.gold
            && self.platinum >= cost.platinum
            && self.adamantium >= cost.adamantium
    }

    /// Deduct `cost` if every balance covers it. Returns false and leaves the
    /// wallet untouched otherwise.
    pub fn try_spend(&mut self, cost: &Cost) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.salvage -= cost.salvage;
        self.gold -= cost.gold;
        self.platinum -= cost.platinum;
        self.adamantium -= cost.adamantium;
        true
    }
}

/// Unit vector for an angle in radians (0 = +x, counter-clockwise).
pub fn heading(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}

/// Scale `v` down to `max` length if it is longer.
pub fn clamp_magnitude(v: DVec2, max: f64) -> DVec2 {
    let len_sq = v.length_squared();
    if len_sq > max * max && len_sq > 0.0 {
        v * (max / len_sq.sqrt())
    } else {
        v
    }
}
