//! Events emitted by the simulation for audio, HUD and effect feedback.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Wallet;

/// Feedback events. Drained into every snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Player volley left the muzzle.
    ShotFired { bullets: u32 },
    /// A bullet struck something.
    HitLanded {
        target: TargetKind,
        position: DVec2,
        damage: f64,
    },
    /// Something was destroyed by fire and scored.
    Kill {
        target: TargetKind,
        position: DVec2,
        score: u32,
        combo: u32,
        multiplier: f64,
    },
    ShieldConsumed { remaining: u32 },
    Ricochet { position: DVec2 },
    PickupCollected { kind: PickupKind },
    WaveStarted { wave: u32, asteroids: u32 },
    WaveCleared { wave: u32 },
    /// Cue for the warp-out starfield.
    WarpStarted { direction: DVec2 },
    /// Enemy incoming at this point after `delay` seconds.
    EnemyTelegraphed { position: DVec2, delay: f64 },
    EnemyArrived { position: DVec2 },
    DraftOffered { options: Vec<UpgradeId> },
    HangarOpened,
    HangarClosed,
    UpgradeApplied { upgrade: UpgradeId },
    ShopRerolled { cost: u32, rerolls: u32 },
    NovaDetonated { destroyed: u32 },
    GameOver { cause: DeathCause, summary: RunSummary },
}

/// Final tally shown when a run ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub score: u64,
    pub wave: u32,
    pub wallet: Wallet,
}
