//! The single mutable aggregate every system operates on.

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use voidrush_core::components::{Debris, Modifiers, Particle, Ship};
use voidrush_core::constants::COMBO_STEP;
use voidrush_core::enums::{Intermission, UpgradeId};
use voidrush_core::events::{GameEvent, RunSummary};
use voidrush_core::types::{SimTime, Wallet, WorldBounds};

use crate::camera::CameraRig;
use crate::config::{RarityWeights, SimConfig};
use crate::pool::EffectPool;
use crate::registry::EntityRegistry;
use crate::scheduler::Scheduler;
use crate::systems::upgrades::ShopOffer;

/// Gating flags checked at the top of every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunFlags {
    pub started: bool,
    pub paused: bool,
    pub game_over: bool,
    pub intermission: Intermission,
}

impl RunFlags {
    /// True when the simulation must not step this frame.
    pub fn frozen(&self) -> bool {
        !self.started || self.paused || self.game_over || self.intermission != Intermission::None
    }
}

/// Kill streak. `count` starts at 1 and each kill bumps it before scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComboState {
    pub count: u32,
    pub timer: f64,
}

impl Default for ComboState {
    fn default() -> Self {
        Self {
            count: 1,
            timer: 0.0,
        }
    }
}

impl ComboState {
    pub fn multiplier(&self) -> f64 {
        1.0 + COMBO_STEP * (self.count.saturating_sub(1)) as f64
    }
}

/// Draft offers, hangar stock and the record of everything taken.
#[derive(Debug, Clone, Default)]
pub struct UpgradeState {
    pub history: Vec<UpgradeId>,
    pub draft: Vec<UpgradeId>,
    pub shop: Vec<ShopOffer>,
    pub rerolls: u32,
}

pub struct GameState {
    pub bounds: WorldBounds,
    pub flags: RunFlags,
    pub time: SimTime,
    pub ship: Ship,
    pub registry: EntityRegistry,
    pub particles: EffectPool<Particle>,
    pub debris: EffectPool<Debris>,
    pub camera: CameraRig,
    pub scheduler: Scheduler,
    pub modifiers: Modifiers,
    pub wallet: Wallet,
    pub score: u64,
    pub combo: ComboState,
    pub wave: u32,
    /// Set once the current wave's asteroids are gone; stops the completion
    /// check from firing again while the warp cue plays.
    pub wave_cleared: bool,
    pub shots_fired: u32,
    pub upgrades: UpgradeState,
    pub game_over: Option<RunSummary>,
    pub rarity_weights: RarityWeights,
    pub rng: ChaCha8Rng,
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            bounds: WorldBounds::default(),
            flags: RunFlags::default(),
            time: SimTime::default(),
            ship: Ship::default(),
            registry: EntityRegistry::default(),
            particles: EffectPool::with_capacity(config.particle_capacity),
            debris: EffectPool::with_capacity(config.debris_capacity),
            camera: CameraRig::default(),
            scheduler: Scheduler::default(),
            modifiers: Modifiers::default(),
            wallet: Wallet::default(),
            score: 0,
            combo: ComboState::default(),
            wave: 1,
            wave_cleared: false,
            shots_fired: 0,
            upgrades: UpgradeState::default(),
            game_over: None,
            rarity_weights: config.rarity_weights.clone(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            events: Vec::new(),
        }
    }

    /// Return everything but the wallet to its starting value. Does not spawn.
    pub fn reset_run(&mut self) {
        self.flags = RunFlags {
            started: self.flags.started,
            ..RunFlags::default()
        };
        self.time = SimTime::default();
        self.ship = Ship::default();
        self.registry.clear();
        self.particles.clear();
        self.debris.clear();
        self.camera.reset();
        self.scheduler.clear();
        self.modifiers = Modifiers::default();
        self.score = 0;
        self.combo = ComboState::default();
        self.wave = 1;
        self.wave_cleared = false;
        self.shots_fired = 0;
        self.upgrades = UpgradeState::default();
        self.game_over = None;
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            score: self.score,
            wave: self.wave,
            wallet: self.wallet,
        }
    }

    /// Shake the camera, attenuated by distance from the ship when located.
    pub fn shake(&mut self, magnitude: f64, secs: f64, origin: Option<DVec2>) {
        let listener = self.ship.position;
        let reach = self.bounds.diagonal();
        self.camera.add_shake(magnitude, secs, origin, listener, reach);
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
