//! Snapshot system: reads the game state and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the state.

use glam::DVec2;

use voidrush_core::components::{Debris, Particle};
use voidrush_core::enums::Intermission;
use voidrush_core::events::GameEvent;
use voidrush_core::state::*;
use voidrush_core::types::EntityId;

use crate::game_state::GameState;
use crate::pool::{EffectPool, Transient};
use crate::systems::upgrades;

/// Build a complete snapshot. `events` are the ones drained this frame.
pub fn build_snapshot(state: &GameState, events: Vec<GameEvent>) -> GameStateSnapshot {
    GameStateSnapshot {
        time: state.time,
        started: state.flags.started,
        paused: state.flags.paused,
        intermission: state.flags.intermission,
        ship: build_ship(state),
        bullets: build_bullets(state),
        asteroids: build_asteroids(state),
        enemies: state
            .registry
            .enemies
            .iter()
            .map(|e| transform(e.id, e.position, e.rotation))
            .collect(),
        drones: state
            .registry
            .drones
            .iter()
            .map(|d| transform(d.id, d.position, d.orbit_angle))
            .collect(),
        pickups: state
            .registry
            .pickups
            .iter()
            .map(|p| PickupView {
                transform: transform(p.id, p.position, 0.0),
                kind: p.kind,
                opacity: p.opacity(),
            })
            .collect(),
        beacons: state
            .registry
            .beacons
            .iter()
            .map(|b| BeaconView {
                transform: transform(b.id, b.position, 0.0),
                scale: b.scale(),
                opacity: b.opacity(),
            })
            .collect(),
        particles: build_particles(&state.particles),
        debris: build_debris(&state.debris),
        outlined: state.registry.outlined().collect(),
        camera: state.camera.position,
        hud: build_hud(state),
        draft: build_draft(state),
        shop: build_shop(state),
        events,
        game_over: state.game_over,
    }
}

fn transform(id: EntityId, position: DVec2, rotation: f64) -> TransformView {
    TransformView {
        id,
        position,
        rotation,
        visible: true,
    }
}

fn build_ship(state: &GameState) -> ShipView {
    let ship = &state.ship;
    ShipView {
        position: ship.position,
        velocity: ship.velocity,
        facing: ship.facing,
        visible: ship.visible,
        thrusting: ship.thrusting,
        invulnerable: ship.is_invulnerable(),
    }
}

/// Bullets point along their velocity.
fn build_bullets(state: &GameState) -> Vec<TransformView> {
    state
        .registry
        .bullets
        .iter()
        .map(|b| transform(b.id, b.position, b.velocity.y.atan2(b.velocity.x)))
        .collect()
}

fn build_asteroids(state: &GameState) -> Vec<AsteroidView> {
    state
        .registry
        .asteroids
        .iter()
        .map(|a| AsteroidView {
            transform: transform(a.id, a.position, a.rotation),
            size: a.size,
            ore: a.ore,
        })
        .collect()
}

fn build_particles(pool: &EffectPool<Particle>) -> Vec<EffectView> {
    pool.iter()
        .map(|p| EffectView {
            position: p.position,
            rotation: 0.0,
            scale: p.size,
            opacity: p.fraction(),
            color: p.color,
        })
        .collect()
}

/// Debris shrinks as it fades.
fn build_debris(pool: &EffectPool<Debris>) -> Vec<EffectView> {
    pool.iter()
        .map(|d| {
            let t = d.fraction();
            EffectView {
                position: d.position,
                rotation: d.rotation,
                scale: 0.4 + 0.6 * t,
                opacity: t,
                color: 0xc8c8c8,
            }
        })
        .collect()
}

fn build_hud(state: &GameState) -> HudView {
    HudView {
        score: state.score,
        wave: state.wave,
        combo: state.combo.count,
        multiplier: state.combo.multiplier(),
        wallet: state.wallet,
        shields: state.modifiers.shields,
        drones: state.modifiers.drones,
        history: state.upgrades.history.clone(),
    }
}

fn build_draft(state: &GameState) -> Vec<DraftOptionView> {
    if state.flags.intermission != Intermission::Draft {
        return Vec::new();
    }
    state
        .upgrades
        .draft
        .iter()
        .map(|&id| {
            let def = upgrades::definition(id);
            DraftOptionView {
                upgrade: id,
                label: def.label.to_string(),
                description: def.description.to_string(),
                rarity: def.rarity,
            }
        })
        .collect()
}

fn build_shop(state: &GameState) -> Option<ShopView> {
    if state.flags.intermission != Intermission::Hangar {
        return None;
    }
    let offers = state
        .upgrades
        .shop
        .iter()
        .map(|offer| {
            let def = upgrades::definition(offer.upgrade);
            ShopOfferView {
                upgrade: offer.upgrade,
                label: def.label.to_string(),
                description: def.description.to_string(),
                rarity: def.rarity,
                cost: offer.cost,
                affordable: !offer.purchased && state.wallet.can_afford(&offer.cost),
                purchased: offer.purchased,
            }
        })
        .collect();
    Some(ShopView {
        offers,
        reroll_cost: upgrades::reroll_cost(state.upgrades.rerolls),
        rerolls: state.upgrades.rerolls,
    })
}
