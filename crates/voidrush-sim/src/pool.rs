//! Fixed-capacity pools for transient visual effects.
//!
//! All storage is allocated up front. Requests beyond capacity are dropped,
//! and expired slots go back on the free list for reuse.

use voidrush_core::components::{Debris, Particle};
use voidrush_core::types::WorldBounds;

/// An effect that lives for a fixed time and then returns to its pool.
pub trait Transient: Copy + Default {
    /// Seconds left before the slot is released.
    fn life(&self) -> f64;

    /// Remaining fraction of the lifetime in [0, 1]. Drives fade-out.
    fn fraction(&self) -> f64;

    /// Count down the lifetime and move.
    fn advance(&mut self, dt: f64, bounds: &WorldBounds);
}

impl Transient for Particle {
    fn life(&self) -> f64 {
        self.life
    }

    fn fraction(&self) -> f64 {
        lifetime_fraction(self.life, self.ttl)
    }

    fn advance(&mut self, dt: f64, _bounds: &WorldBounds) {
        self.life -= dt;
        self.position += self.velocity * dt;
    }
}

impl Transient for Debris {
    fn life(&self) -> f64 {
        self.life
    }

    fn fraction(&self) -> f64 {
        lifetime_fraction(self.life, self.ttl)
    }

    fn advance(&mut self, dt: f64, bounds: &WorldBounds) {
        self.life -= dt;
        self.position += self.velocity * dt;
        self.rotation += self.spin * dt;
        bounds.wrap(&mut self.position);
    }
}

fn lifetime_fraction(life: f64, ttl: f64) -> f64 {
    if ttl <= 0.0 {
        0.0
    } else {
        (life / ttl).clamp(0.0, 1.0)
    }
}

pub struct EffectPool<T> {
    slots: Vec<T>,
    active: Vec<bool>,
    free: Vec<usize>,
}

impl<T: Transient> EffectPool<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![T::default(); capacity],
            active: vec![false; capacity],
            free: (0..capacity).rev().collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn active_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Place `effect` in a free slot. Returns false (and drops it) when full.
    pub fn spawn(&mut self, effect: T) -> bool {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = effect;
                self.active[index] = true;
                true
            }
            None => {
                log::trace!("effect pool exhausted ({} slots)", self.slots.len());
                false
            }
        }
    }

    /// Advance every active slot; release the ones whose life ran out.
    pub fn update(&mut self, dt: f64, bounds: &WorldBounds) {
        for index in 0..self.slots.len() {
            if !self.active[index] {
                continue;
            }
            let slot = &mut self.slots[index];
            slot.advance(dt, bounds);
            if slot.life() <= 0.0 {
                self.active[index] = false;
                self.free.push(index);
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots
            .iter()
            .zip(self.active.iter())
            .filter_map(|(slot, &active)| active.then_some(slot))
    }

    /// Release every slot.
    pub fn clear(&mut self) {
        self.active.iter_mut().for_each(|a| *a = false);
        self.free.clear();
        self.free.extend((0..self.slots.len()).rev());
    }
}
