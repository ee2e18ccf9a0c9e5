//! Enumeration types used across the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Asteroid size class. Determines radius, score and how it splits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeTier {
    #[default]
    Large,
    Medium,
    Small,
}

impl SizeTier {
    /// Visual radius. Pickup drops scale from this.
    pub fn mesh_radius(self) -> f64 {
        match self {
            SizeTier::Large => 6.0,
            SizeTier::Medium => 3.5,
            SizeTier::Small => 2.0,
        }
    }

    pub fn score(self) -> u32 {
        match self {
            SizeTier::Large => 20,
            SizeTier::Medium => 50,
            SizeTier::Small => 100,
        }
    }

    /// Tier of the fragments left behind, if any.
    pub fn child(self) -> Option<SizeTier> {
        match self {
            SizeTier::Large => Some(SizeTier::Medium),
            SizeTier::Medium => Some(SizeTier::Small),
            SizeTier::Small => None,
        }
    }

    pub fn child_count(self) -> usize {
        if self.child().is_some() {
            2
        } else {
            0
        }
    }
}

/// Mineral content rolled when an asteroid is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OreTier {
    #[default]
    Iron,
    Gold,
    Platinum,
    Adamantium,
}

impl OreTier {
    /// Map a uniform roll in [0, 1) to an ore tier.
    pub fn from_roll(roll: f64) -> OreTier {
        if roll > 0.995 {
            OreTier::Adamantium
        } else if roll > 0.97 {
            OreTier::Platinum
        } else if roll > 0.9 {
            OreTier::Gold
        } else {
            OreTier::Iron
        }
    }

    /// Premium pickup this ore can drop and the roll it must beat.
    pub fn premium_drop(self) -> Option<(PickupKind, f64)> {
        match self {
            OreTier::Iron => None,
            OreTier::Gold => Some((PickupKind::Gold, 0.3)),
            OreTier::Platinum => Some((PickupKind::Platinum, 0.4)),
            OreTier::Adamantium => Some((PickupKind::Adamantium, 0.6)),
        }
    }
}

/// Currency carried by a pickup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    #[default]
    Salvage,
    Gold,
    Platinum,
    Adamantium,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Extra bullets per shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpreadTier {
    #[default]
    None,
    Narrow,
    Wide,
}

/// How many extra asteroids a bullet passes through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PierceTier {
    #[default]
    None,
    Single,
    Double,
    Quad,
}

impl PierceTier {
    pub fn charges(self) -> u32 {
        match self {
            PierceTier::None => 0,
            PierceTier::Single => 1,
            PierceTier::Double => 2,
            PierceTier::Quad => 4,
        }
    }
}

/// What a bullet struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    Asteroid,
    Enemy,
}

/// Reason a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    AsteroidCollision,
    EnemyCollision,
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeathCause::AsteroidCollision => f.write_str("Asteroid collision"),
            DeathCause::EnemyCollision => f.write_str("Enemy collision"),
        }
    }
}

/// Every upgrade that can appear in a draft or the hangar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeId {
    SpreadShot,
    WideSpread,
    PiercingRounds,
    SuperPierce,
    RapidFire,
    EngineBoost,
    ShieldCharge,
    Overshield,
    RicochetRounds,
    SuperRicochet,
    DroneBuddy,
    Overclock,
    QuantumEngine,
    RailPierce,
    DroneSwarm,
    NovaBurst,
    MagneticCollector,
}

/// Which intermission screen is open, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intermission {
    #[default]
    None,
    Draft,
    Hangar,
}
