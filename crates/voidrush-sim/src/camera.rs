//! Ship-follow camera with screen shake.
//!
//! Presentation only, but it keeps ticking while the simulation is frozen
//! so shakes settle behind the game-over and intermission screens.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidrush_core::constants::{SHAKE_FALLOFF, SHAKE_MIN, SHAKE_SCALE};
use voidrush_core::types::heading;

#[derive(Debug, Clone, Default)]
pub struct CameraRig {
    pub position: DVec2,
    shake_secs: f64,
    shake_magnitude: f64,
}

impl CameraRig {
    /// Request a shake. With an origin, the strength falls off with distance
    /// from `listener` across `max_distance`.
    pub fn add_shake(
        &mut self,
        magnitude: f64,
        secs: f64,
        origin: Option<DVec2>,
        listener: DVec2,
        max_distance: f64,
    ) {
        let mut scale = SHAKE_SCALE;
        if let Some(origin) = origin {
            let falloff = (1.0 - origin.distance(listener) / max_distance).max(0.0);
            scale *= falloff * SHAKE_FALLOFF;
        }
        let magnitude = magnitude * scale;
        if magnitude < SHAKE_MIN {
            return;
        }
        self.shake_magnitude = self.shake_magnitude.max(magnitude);
        self.shake_secs = self.shake_secs.max(secs);
    }

    pub fn is_shaking(&self) -> bool {
        self.shake_secs > 0.0
    }

    /// Follow `target` when given; jitter around it while a shake is active.
    pub fn update(&mut self, dt: f64, target: Option<DVec2>, rng: &mut ChaCha8Rng) {
        if let Some(target) = target {
            self.position = target;
        }
        if self.shake_secs > 0.0 {
            self.shake_secs -= dt;
            let jitter = heading(rng.gen_range(0.0..std::f64::consts::TAU)) * self.shake_magnitude;
            self.position += jitter;
            if self.shake_secs <= 0.0 {
                self.shake_secs = 0.0;
                self.shake_magnitude = 0.0;
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
