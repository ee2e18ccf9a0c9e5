//! Read-only snapshot of the game sent to the presentation layer each frame.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{GameEvent, RunSummary};
use crate::types::{Cost, EntityId, SimTime, Wallet};

/// Complete view of one frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub started: bool,
    pub paused: bool,
    pub intermission: Intermission,
    pub ship: ShipView,
    pub bullets: Vec<TransformView>,
    pub asteroids: Vec<AsteroidView>,
    pub enemies: Vec<TransformView>,
    pub drones: Vec<TransformView>,
    pub pickups: Vec<PickupView>,
    pub beacons: Vec<BeaconView>,
    pub particles: Vec<EffectView>,
    pub debris: Vec<EffectView>,
    /// Entities the renderer should draw with an outline.
    pub outlined: Vec<EntityId>,
    pub camera: DVec2,
    pub hud: HudView,
    pub draft: Vec<DraftOptionView>,
    pub shop: Option<ShopView>,
    pub events: Vec<GameEvent>,
    pub game_over: Option<RunSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformView {
    pub id: EntityId,
    pub position: DVec2,
    pub rotation: f64,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub position: DVec2,
    pub velocity: DVec2,
    pub facing: f64,
    pub visible: bool,
    pub thrusting: bool,
    pub invulnerable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AsteroidView {
    pub transform: TransformView,
    pub size: SizeTier,
    pub ore: OreTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickupView {
    pub transform: TransformView,
    pub kind: PickupKind,
    pub opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeaconView {
    pub transform: TransformView,
    pub scale: f64,
    pub opacity: f64,
}

/// One active pool slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectView {
    pub position: DVec2,
    pub rotation: f64,
    pub scale: f64,
    pub opacity: f64,
    pub color: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub score: u64,
    pub wave: u32,
    pub combo: u32,
    pub multiplier: f64,
    pub wallet: Wallet,
    pub shields: u32,
    pub drones: u32,
    /// Every upgrade taken this run, oldest first.
    pub history: Vec<UpgradeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftOptionView {
    pub upgrade: UpgradeId,
    pub label: String,
    pub description: String,
    pub rarity: Rarity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopOfferView {
    pub upgrade: UpgradeId,
    pub label: String,
    pub description: String,
    pub rarity: Rarity,
    pub cost: Cost,
    pub affordable: bool,
    pub purchased: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopView {
    pub offers: Vec<ShopOfferView>,
    pub reroll_cost: u32,
    pub rerolls: u32,
}
