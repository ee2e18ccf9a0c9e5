//! Upgrade catalogue, the between-wave draft and the hangar shop.
//!
//! Definitions are plain data: each names a rarity, an effect and an
//! availability predicate over the current modifiers. Sampling is a pure
//! function of a weight table and the RNG, so draft and shop share it.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use voidrush_core::components::Modifiers;
use voidrush_core::constants::*;
use voidrush_core::enums::{Intermission, PierceTier, Rarity, SpreadTier, UpgradeId};
use voidrush_core::events::GameEvent;
use voidrush_core::types::{Cost, Wallet};

use crate::config::RarityWeights;
use crate::game_state::GameState;
use crate::systems::effects;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UpgradeError {
    #[error("no draft is open")]
    NoDraft,
    #[error("the hangar is closed")]
    HangarClosed,
    #[error("no option at index {0}")]
    InvalidChoice(usize),
    #[error("offer already purchased")]
    AlreadyPurchased,
    #[error("cannot afford {0:?}")]
    Unaffordable(Cost),
    #[error("{0:?} would have no effect")]
    Unavailable(UpgradeId),
}

/// What taking an upgrade does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpgradeEffect {
    /// Raise the spread tier to at least this.
    Spread(SpreadTier),
    /// Raise the pierce tier to at least this.
    Pierce(PierceTier),
    FireRate(f64),
    Engine(f64),
    Shields(u32),
    /// Raise ricochet bounces to at least this.
    Ricochet(u32),
    /// Add drones, up to the cap.
    Drones(u32),
    Magnet,
    Nova,
}

#[derive(Debug, Clone, Copy)]
pub struct UpgradeDef {
    pub id: UpgradeId,
    pub label: &'static str,
    pub description: &'static str,
    pub rarity: Rarity,
    pub effect: UpgradeEffect,
    pub available: fn(&Modifiers) -> bool,
}

fn always(_: &Modifiers) -> bool {
    true
}

/// Upgrades that can appear in the draft.
pub const DRAFT_POOL: [UpgradeId; 16] = [
    UpgradeId::SpreadShot,
    UpgradeId::WideSpread,
    UpgradeId::PiercingRounds,
    UpgradeId::SuperPierce,
    UpgradeId::RapidFire,
    UpgradeId::EngineBoost,
    UpgradeId::ShieldCharge,
    UpgradeId::Overshield,
    UpgradeId::RicochetRounds,
    UpgradeId::SuperRicochet,
    UpgradeId::DroneBuddy,
    UpgradeId::Overclock,
    UpgradeId::QuantumEngine,
    UpgradeId::RailPierce,
    UpgradeId::DroneSwarm,
    UpgradeId::NovaBurst,
];

pub fn definition(id: UpgradeId) -> UpgradeDef {
    use UpgradeEffect as E;
    use UpgradeId::*;

    let (label, description, rarity, effect, available): (_, _, _, _, fn(&Modifiers) -> bool) =
        match id {
            SpreadShot => (
                "Spread Shot",
                "+2 side bullets",
                Rarity::Common,
                E::Spread(SpreadTier::Narrow),
                |m: &Modifiers| m.spread == SpreadTier::None,
            ),
            WideSpread => (
                "Wide Spread",
                "+2 more side bullets",
                Rarity::Uncommon,
                E::Spread(SpreadTier::Wide),
                |m: &Modifiers| m.spread == SpreadTier::Narrow,
            ),
            PiercingRounds => (
                "Piercing Rounds",
                "Bullets pierce 1 target",
                Rarity::Common,
                E::Pierce(PierceTier::Single),
                |m: &Modifiers| m.pierce == PierceTier::None,
            ),
            SuperPierce => (
                "Super Pierce",
                "Pierce 2 targets",
                Rarity::Uncommon,
                E::Pierce(PierceTier::Double),
                |m: &Modifiers| m.pierce < PierceTier::Double,
            ),
            RapidFire => (
                "Rapid Fire",
                "Fire rate +30%",
                Rarity::Common,
                E::FireRate(1.3),
                always,
            ),
            EngineBoost => (
                "Engine Boost",
                "Accel/Speed +20%",
                Rarity::Common,
                E::Engine(1.2),
                always,
            ),
            ShieldCharge => (
                "Shield Charge",
                "Gain a 1-hit shield",
                Rarity::Common,
                E::Shields(1),
                always,
            ),
            Overshield => (
                "Overshield",
                "+2 shields",
                Rarity::Uncommon,
                E::Shields(2),
                always,
            ),
            RicochetRounds => (
                "Ricochet Rounds",
                "Bullets bounce once on edges",
                Rarity::Uncommon,
                E::Ricochet(1),
                |m: &Modifiers| m.ricochet < 1,
            ),
            SuperRicochet => (
                "Super Ricochet",
                "Bullets bounce twice",
                Rarity::Rare,
                E::Ricochet(2),
                |m: &Modifiers| m.ricochet < 2,
            ),
            DroneBuddy => (
                "Drone Buddy",
                "Add 1 auto-firing drone",
                Rarity::Uncommon,
                E::Drones(1),
                |m: &Modifiers| m.drones < DRONE_MAX,
            ),
            Overclock => (
                "Overclock",
                "Fire rate +60%",
                Rarity::Epic,
                E::FireRate(1.6),
                always,
            ),
            QuantumEngine => (
                "Quantum Engine",
                "Accel/Speed +40%",
                Rarity::Epic,
                E::Engine(1.4),
                always,
            ),
            RailPierce => (
                "Rail Pierce",
                "Pierce 4 targets",
                Rarity::Epic,
                E::Pierce(PierceTier::Quad),
                |m: &Modifiers| m.pierce < PierceTier::Quad,
            ),
            DroneSwarm => (
                "Drone Swarm",
                "+2 drones",
                Rarity::Epic,
                E::Drones(2),
                |m: &Modifiers| m.drones < DRONE_MAX,
            ),
            NovaBurst => (
                "Nova Burst",
                "Detonate a clearing blast now",
                Rarity::Legendary,
                E::Nova,
                always,
            ),
            MagneticCollector => (
                "Magnetic Collector",
                "Bigger pickup radius",
                Rarity::Uncommon,
                E::Magnet,
                always,
            ),
        };
    UpgradeDef {
        id,
        label,
        description,
        rarity,
        effect,
        available,
    }
}

/// Hangar stock and prices.
pub const SHOP_STOCK: [(UpgradeId, Cost); 6] = [
    (
        UpgradeId::Overclock,
        Wallet {
            salvage: 80,
            gold: 2,
            platinum: 0,
            adamantium: 0,
        },
    ),
    (
        UpgradeId::QuantumEngine,
        Wallet {
            salvage: 80,
            gold: 0,
            platinum: 1,
            adamantium: 0,
        },
    ),
    (UpgradeId::MagneticCollector, Wallet::salvage(40)),
    (UpgradeId::ShieldCharge, Wallet::salvage(30)),
    (
        UpgradeId::DroneBuddy,
        Wallet {
            salvage: 50,
            gold: 1,
            platinum: 0,
            adamantium: 0,
        },
    ),
    (UpgradeId::RicochetRounds, Wallet::salvage(60)),
];

/// One slot in the hangar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShopOffer {
    pub upgrade: UpgradeId,
    pub cost: Cost,
    pub purchased: bool,
}

/// Salvage needed for the next reroll.
pub fn reroll_cost(rerolls: u32) -> u32 {
    (REROLL_BASE_COST * REROLL_GROWTH.powi(rerolls as i32)).floor() as u32
}

/// Draft candidates available under `mods`, weighted by rarity.
pub fn draft_weights(mods: &Modifiers, weights: &RarityWeights) -> Vec<(UpgradeId, u32)> {
    DRAFT_POOL
        .iter()
        .map(|&id| definition(id))
        .filter(|def| (def.available)(mods))
        .map(|def| (def.id, weights.weight(def.rarity)))
        .collect()
}

/// Hangar sampling weights. Epic stock weighs more after enough rerolls.
pub fn shop_weights(rerolls: u32) -> Vec<(usize, u32)> {
    SHOP_STOCK
        .iter()
        .enumerate()
        .map(|(index, &(id, _))| {
            let epic = definition(id).rarity == Rarity::Epic;
            let weight = if epic && rerolls >= REROLL_EPIC_BONUS_AT {
                REROLL_EPIC_WEIGHT
            } else {
                1
            };
            (index, weight)
        })
        .collect()
}

/// Draw up to `count` distinct items. Each draw is proportional to weight
/// among the items not yet drawn; zero-weight items are never drawn.
pub fn sample_distinct<T: Copy>(rng: &mut ChaCha8Rng, pool: &[(T, u32)], count: usize) -> Vec<T> {
    let mut remaining: Vec<(T, u32)> = pool.iter().copied().filter(|&(_, w)| w > 0).collect();
    let mut picked = Vec::with_capacity(count);
    while picked.len() < count && !remaining.is_empty() {
        let total: u64 = remaining.iter().map(|&(_, w)| u64::from(w)).sum();
        let mut roll = rng.gen_range(0..total);
        let mut index = remaining.len() - 1;
        for (i, &(_, w)) in remaining.iter().enumerate() {
            let w = u64::from(w);
            if roll < w {
                index = i;
                break;
            }
            roll -= w;
        }
        picked.push(remaining.remove(index).0);
    }
    picked
}

// ---- Draft ----

/// Open the draft. Returns false, leaving the game running, when nothing
/// is eligible.
pub fn offer_draft(state: &mut GameState) -> bool {
    let pool = draft_weights(&state.modifiers, &state.rarity_weights);
    let options = sample_distinct(&mut state.rng, &pool, DRAFT_SIZE);
    if options.is_empty() {
        log::warn!("no upgrades eligible for the draft");
        return false;
    }
    log::info!("wave {} cleared, drafting from {:?}", state.wave, options);
    state.upgrades.draft = options.clone();
    state.flags.intermission = Intermission::Draft;
    state.emit(GameEvent::DraftOffered { options });
    true
}

/// Take draft option `index` and close the draft.
pub fn select_draft(state: &mut GameState, index: usize) -> Result<UpgradeId, UpgradeError> {
    if state.flags.intermission != Intermission::Draft {
        return Err(UpgradeError::NoDraft);
    }
    let id = *state
        .upgrades
        .draft
        .get(index)
        .ok_or(UpgradeError::InvalidChoice(index))?;
    apply(state, id);
    state.upgrades.draft.clear();
    state.flags.intermission = Intermission::None;
    Ok(id)
}

// ---- Hangar ----

pub fn open_hangar(state: &mut GameState) {
    state.upgrades.rerolls = 0;
    restock(state);
    log::info!("wave {} cleared, hangar open", state.wave);
    state.flags.intermission = Intermission::Hangar;
    state.emit(GameEvent::HangarOpened);
}

/// Draw fresh offers from the stock that can still take effect.
fn restock(state: &mut GameState) {
    let weights: Vec<(usize, u32)> = shop_weights(state.upgrades.rerolls)
        .into_iter()
        .filter(|&(index, _)| (definition(SHOP_STOCK[index].0).available)(&state.modifiers))
        .collect();
    let picks = sample_distinct(&mut state.rng, &weights, SHOP_SIZE);
    state.upgrades.shop = picks
        .into_iter()
        .map(|index| {
            let (upgrade, cost) = SHOP_STOCK[index];
            ShopOffer {
                upgrade,
                cost,
                purchased: false,
            }
        })
        .collect();
}

fn require_hangar(state: &GameState) -> Result<(), UpgradeError> {
    if state.flags.intermission == Intermission::Hangar {
        Ok(())
    } else {
        Err(UpgradeError::HangarClosed)
    }
}

/// Buy offer `index`. Nothing changes unless every balance covers the price.
pub fn purchase(state: &mut GameState, index: usize) -> Result<UpgradeId, UpgradeError> {
    require_hangar(state)?;
    let offer = *state
        .upgrades
        .shop
        .get(index)
        .ok_or(UpgradeError::InvalidChoice(index))?;
    if offer.purchased {
        return Err(UpgradeError::AlreadyPurchased);
    }
    if !(definition(offer.upgrade).available)(&state.modifiers) {
        return Err(UpgradeError::Unavailable(offer.upgrade));
    }
    if !state.wallet.try_spend(&offer.cost) {
        return Err(UpgradeError::Unaffordable(offer.cost));
    }
    state.upgrades.shop[index].purchased = true;
    apply(state, offer.upgrade);
    Ok(offer.upgrade)
}

/// Pay for a fresh set of offers. Returns the salvage spent.
pub fn reroll(state: &mut GameState) -> Result<u32, UpgradeError> {
    require_hangar(state)?;
    let cost = reroll_cost(state.upgrades.rerolls);
    if !state.wallet.try_spend(&Wallet::salvage(cost)) {
        return Err(UpgradeError::Unaffordable(Wallet::salvage(cost)));
    }
    state.upgrades.rerolls += 1;
    restock(state);
    state.emit(GameEvent::ShopRerolled {
        cost,
        rerolls: state.upgrades.rerolls,
    });
    Ok(cost)
}

pub fn leave_hangar(state: &mut GameState) -> Result<(), UpgradeError> {
    require_hangar(state)?;
    state.upgrades.shop.clear();
    state.flags.intermission = Intermission::None;
    state.emit(GameEvent::HangarClosed);
    Ok(())
}

// ---- Effects ----

/// Apply an upgrade's effect and record it.
pub fn apply(state: &mut GameState, id: UpgradeId) {
    let mods = &mut state.modifiers;
    match definition(id).effect {
        UpgradeEffect::Spread(tier) => mods.spread = mods.spread.max(tier),
        UpgradeEffect::Pierce(tier) => mods.pierce = mods.pierce.max(tier),
        UpgradeEffect::FireRate(factor) => mods.fire_rate *= factor,
        UpgradeEffect::Engine(factor) => mods.engine *= factor,
        UpgradeEffect::Shields(n) => mods.shields += n,
        UpgradeEffect::Ricochet(n) => mods.ricochet = mods.ricochet.max(n),
        UpgradeEffect::Magnet => mods.magnet_level += 1,
        UpgradeEffect::Drones(n) => {
            for _ in 0..n {
                if state.registry.spawn_drone(state.ship.position).is_some() {
                    state.modifiers.drones += 1;
                }
            }
        }
        UpgradeEffect::Nova => nova_blast(state),
    }
    log::debug!("applied {id:?}: {:?}", state.modifiers);
    state.upgrades.history.push(id);
    state.emit(GameEvent::UpgradeApplied { upgrade: id });
}

/// Destroy every asteroid near the ship outright. No fragments, no drops.
pub fn nova_blast(state: &mut GameState) {
    let center = state.ship.position;
    let mut destroyed = 0;
    let mut i = state.registry.asteroids.len();
    while i > 0 {
        i -= 1;
        let at = state.registry.asteroids[i].position;
        if at.distance_squared(center) > NOVA_RADIUS * NOVA_RADIUS {
            continue;
        }
        state.registry.asteroids.swap_remove(i);
        effects::burst(&mut state.particles, &mut state.rng, at, &effects::NOVA_FLASH);
        effects::debris_burst(&mut state.debris, &mut state.rng, at, 12);
        state.shake(0.8, 0.2, Some(at));
        state.score += NOVA_SCORE as u64;
        destroyed += 1;
    }
    state.emit(GameEvent::NovaDetonated { destroyed });
}

#[cfg(test)]
mod tests {
    use glam::DVec2;
    use rand::SeedableRng;

    use voidrush_core::enums::{OreTier, SizeTier};

    use super::*;
    use crate::config::SimConfig;

    fn state() -> GameState {
        GameState::new(&SimConfig::default())
    }

    #[test]
    fn test_reroll_cost_sequence() {
        let costs: Vec<u32> = (0..5).map(reroll_cost).collect();
        assert_eq!(costs, vec![15, 17, 19, 22, 26]);
    }

    #[test]
    fn test_epic_weight_escalates_after_four_rerolls() {
        let epic_weight = |rerolls| {
            shop_weights(rerolls)
                .into_iter()
                .find(|&(i, _)| SHOP_STOCK[i].0 == UpgradeId::Overclock)
                .map(|(_, w)| w)
        };
        assert_eq!(epic_weight(3), Some(1));
        assert_eq!(epic_weight(4), Some(3));
        let shield = shop_weights(10)
            .into_iter()
            .find(|&(i, _)| SHOP_STOCK[i].0 == UpgradeId::ShieldCharge)
            .map(|(_, w)| w);
        assert_eq!(shield, Some(1), "non-epic stock keeps weight 1");
    }

    #[test]
    fn test_sample_distinct_never_repeats() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let pool = [(1, 5), (2, 2), (3, 1), (4, 0)];
        for _ in 0..50 {
            let picks = sample_distinct(&mut rng, &pool, 3);
            assert_eq!(picks.len(), 3);
            assert!(!picks.contains(&4), "zero weight is never drawn");
            let mut sorted = picks.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), 3);
        }
    }

    #[test]
    fn test_sample_distinct_huge_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let pool = [(1, u32::MAX), (2, u32::MAX), (3, 1)];
        let picks = sample_distinct(&mut rng, &pool, 3);
        assert_eq!(picks.len(), 3);
    }

    #[test]
    fn test_sample_distinct_short_pool() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let picks = sample_distinct(&mut rng, &[("a", 1)], 3);
        assert_eq!(picks, vec!["a"]);
    }

    #[test]
    fn test_draft_filters_unavailable() {
        let mods = Modifiers {
            spread: SpreadTier::Wide,
            pierce: PierceTier::Quad,
            ricochet: 2,
            drones: DRONE_MAX,
            ..Default::default()
        };
        let ids: Vec<UpgradeId> = draft_weights(&mods, &RarityWeights::default())
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        for gone in [
            UpgradeId::SpreadShot,
            UpgradeId::WideSpread,
            UpgradeId::PiercingRounds,
            UpgradeId::SuperPierce,
            UpgradeId::RailPierce,
            UpgradeId::RicochetRounds,
            UpgradeId::SuperRicochet,
            UpgradeId::DroneBuddy,
            UpgradeId::DroneSwarm,
        ] {
            assert!(!ids.contains(&gone), "{gone:?} should be filtered out");
        }
        assert!(ids.contains(&UpgradeId::RapidFire));
        assert!(!ids.contains(&UpgradeId::MagneticCollector), "magnet is hangar-only");
    }

    #[test]
    fn test_wide_spread_needs_narrow_first() {
        let mods = Modifiers::default();
        let ids: Vec<UpgradeId> = draft_weights(&mods, &RarityWeights::default())
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert!(ids.contains(&UpgradeId::SpreadShot));
        assert!(!ids.contains(&UpgradeId::WideSpread));
    }

    #[test]
    fn test_offer_and_select_draft() {
        let mut s = state();
        assert!(offer_draft(&mut s));
        assert_eq!(s.flags.intermission, Intermission::Draft);
        assert_eq!(s.upgrades.draft.len(), DRAFT_SIZE);
        assert_eq!(select_draft(&mut s, 7), Err(UpgradeError::InvalidChoice(7)));
        let picked = select_draft(&mut s, 0).unwrap();
        assert_eq!(s.upgrades.history, vec![picked]);
        assert_eq!(s.flags.intermission, Intermission::None);
        assert_eq!(select_draft(&mut s, 0), Err(UpgradeError::NoDraft));
    }

    #[test]
    fn test_empty_draft_is_not_opened() {
        let mut s = state();
        s.rarity_weights = RarityWeights {
            common: 0,
            uncommon: 0,
            rare: 0,
            epic: 0,
            legendary: 0,
        };
        assert!(!offer_draft(&mut s));
        assert_eq!(s.flags.intermission, Intermission::None);
    }

    #[test]
    fn test_tiers_never_downgrade() {
        let mut s = state();
        apply(&mut s, UpgradeId::RailPierce);
        apply(&mut s, UpgradeId::SuperPierce);
        assert_eq!(s.modifiers.pierce, PierceTier::Quad);
    }

    #[test]
    fn test_swarm_respects_drone_cap() {
        let mut s = state();
        apply(&mut s, UpgradeId::DroneBuddy);
        apply(&mut s, UpgradeId::DroneBuddy);
        apply(&mut s, UpgradeId::DroneSwarm);
        assert_eq!(s.modifiers.drones, DRONE_MAX);
        assert_eq!(s.registry.drones.len(), DRONE_MAX as usize);
    }

    #[test]
    fn test_hangar_purchase_requires_funds() {
        let mut s = state();
        assert_eq!(purchase(&mut s, 0), Err(UpgradeError::HangarClosed));
        open_hangar(&mut s);
        assert_eq!(s.upgrades.shop.len(), SHOP_SIZE);
        let before = s.modifiers.clone();
        assert!(matches!(purchase(&mut s, 0), Err(UpgradeError::Unaffordable(_))));
        assert_eq!(s.modifiers, before, "failed purchase must not apply");

        s.wallet = Wallet {
            salvage: 500,
            gold: 5,
            platinum: 5,
            adamantium: 0,
        };
        let cost = s.upgrades.shop[0].cost;
        let bought = purchase(&mut s, 0).unwrap();
        assert_eq!(s.wallet.salvage, 500 - cost.salvage);
        assert_eq!(s.upgrades.history, vec![bought]);
        assert_eq!(purchase(&mut s, 0), Err(UpgradeError::AlreadyPurchased));
    }

    #[test]
    fn test_hangar_skips_maxed_stock() {
        let mut s = state();
        s.modifiers.drones = DRONE_MAX;
        s.modifiers.ricochet = 2;
        for _ in 0..30 {
            open_hangar(&mut s);
            assert_eq!(s.upgrades.shop.len(), SHOP_SIZE);
            for offer in &s.upgrades.shop {
                assert_ne!(offer.upgrade, UpgradeId::DroneBuddy);
                assert_ne!(offer.upgrade, UpgradeId::RicochetRounds);
            }
            leave_hangar(&mut s).unwrap();
        }
    }

    #[test]
    fn test_purchase_rejected_once_it_would_do_nothing() {
        let mut s = state();
        open_hangar(&mut s);
        let drone_cost = SHOP_STOCK
            .iter()
            .find(|&&(id, _)| id == UpgradeId::DroneBuddy)
            .map(|&(_, cost)| cost)
            .unwrap();
        s.upgrades.shop = vec![
            ShopOffer {
                upgrade: UpgradeId::DroneBuddy,
                cost: drone_cost,
                purchased: false,
            };
            2
        ];
        s.modifiers.drones = DRONE_MAX - 1;
        s.wallet = Wallet {
            salvage: 10_000,
            gold: 100,
            platinum: 0,
            adamantium: 0,
        };

        assert_eq!(purchase(&mut s, 0), Ok(UpgradeId::DroneBuddy));
        assert_eq!(s.modifiers.drones, DRONE_MAX);
        let before = s.wallet;
        assert_eq!(
            purchase(&mut s, 1),
            Err(UpgradeError::Unavailable(UpgradeId::DroneBuddy))
        );
        assert_eq!(s.wallet, before, "rejected purchase must not charge");
        assert_eq!(s.upgrades.history.len(), 1);
        assert!(!s.upgrades.shop[1].purchased);
    }

    #[test]
    fn test_reroll_charges_escalating_salvage() {
        let mut s = state();
        open_hangar(&mut s);
        s.wallet.salvage = 40;
        assert_eq!(reroll(&mut s), Ok(15));
        assert_eq!(reroll(&mut s), Ok(17));
        assert_eq!(s.wallet.salvage, 8);
        assert!(matches!(reroll(&mut s), Err(UpgradeError::Unaffordable(_))));
        assert_eq!(s.upgrades.rerolls, 2);
        assert_eq!(s.wallet.salvage, 8, "failed reroll must not charge");
    }

    #[test]
    fn test_reroll_count_resets_on_entry() {
        let mut s = state();
        open_hangar(&mut s);
        s.wallet.salvage = 100;
        reroll(&mut s).unwrap();
        leave_hangar(&mut s).unwrap();
        open_hangar(&mut s);
        assert_eq!(s.upgrades.rerolls, 0);
    }

    #[test]
    fn test_magnet_purchase_levels_up() {
        let mut s = state();
        apply(&mut s, UpgradeId::MagneticCollector);
        apply(&mut s, UpgradeId::MagneticCollector);
        assert_eq!(s.modifiers.magnet_level, 2);
        assert!((s.modifiers.magnet_multiplier() - 2.8).abs() < 1e-9);
    }

    #[test]
    fn test_nova_clears_nearby_asteroids() {
        let mut s = state();
        s.registry
            .spawn_asteroid(DVec2::new(5.0, 0.0), DVec2::ZERO, SizeTier::Large, OreTier::Iron, 0.0);
        s.registry
            .spawn_asteroid(DVec2::new(100.0, 0.0), DVec2::ZERO, SizeTier::Large, OreTier::Iron, 0.0);
        apply(&mut s, UpgradeId::NovaBurst);
        assert_eq!(s.registry.asteroids.len(), 1);
        assert_eq!(s.score, NOVA_SCORE as u64);
        assert!(s.registry.pickups.is_empty(), "nova leaves no drops");
    }
}
