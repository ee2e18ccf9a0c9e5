//! Player input types sent from the frontend to the simulation.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Held controls sampled once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub fire: bool,
    /// World-space aim point. Present means pointer aim is active and
    /// keyboard turning is ignored.
    pub aim: Option<DVec2>,
}

/// Discrete commands, applied at the start of the next frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin the first run. Ignored once a run has started.
    Start,
    TogglePause,
    /// Restart immediately, keeping currency.
    Reset,
    /// Pick one of the offered draft upgrades.
    SelectUpgrade { index: usize },
    PurchaseShopItem { index: usize },
    RerollShop,
    LeaveHangar,
}
