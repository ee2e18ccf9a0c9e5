//! Tests for the simulation engine: frame gating, commands, run lifecycle.

use glam::DVec2;

use voidrush_core::commands::{FrameInput, PlayerCommand};
use voidrush_core::constants::*;
use voidrush_core::enums::*;
use voidrush_core::events::GameEvent;
use voidrush_core::types::Wallet;

use crate::config::SimConfig;
use crate::engine::SimulationEngine;

const DT: f64 = 1.0 / 60.0;

fn started(seed: u64) -> SimulationEngine {
    let mut engine = SimulationEngine::new(SimConfig {
        seed,
        ..Default::default()
    });
    engine.queue_command(PlayerCommand::Start);
    engine.frame(DT, &FrameInput::default());
    engine
}

/// Remove every asteroid and step through the warp delay.
fn clear_wave(engine: &mut SimulationEngine) {
    engine.state_mut().registry.asteroids.clear();
    engine.state_mut().registry.enemies.clear();
    for _ in 0..60 {
        engine.frame(DT, &FrameInput::default());
        if engine.flags().intermission != Intermission::None {
            break;
        }
    }
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = started(12345);
    let mut engine_b = started(12345);
    let input = FrameInput {
        fire: true,
        thrust: true,
        turn_left: true,
        ..Default::default()
    };

    for _ in 0..300 {
        let snap_a = engine_a.frame(DT, &input);
        let snap_b = engine_b.frame(DT, &input);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = started(111);
    let mut engine_b = started(222);

    let snap_a = engine_a.frame(DT, &FrameInput::default());
    let snap_b = engine_b.frame(DT, &FrameInput::default());
    let json_a = serde_json::to_string(&snap_a.asteroids).unwrap();
    let json_b = serde_json::to_string(&snap_b.asteroids).unwrap();
    assert_ne!(json_a, json_b, "Different seeds should place asteroids differently");
}

// ---- Frame gating ----

#[test]
fn test_nothing_moves_before_start() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let snap = engine.frame(DT, &FrameInput::default());
    assert!(!snap.started);
    assert!(snap.asteroids.is_empty());
    assert_eq!(snap.time.tick, 0);
    assert_eq!(snap.time.frame, 1);
}

#[test]
fn test_start_spawns_first_wave_once() {
    let mut engine = started(7);
    assert_eq!(engine.state().registry.asteroids.len(), 8);
    engine.queue_command(PlayerCommand::Start);
    engine.frame(DT, &FrameInput::default());
    assert_eq!(engine.state().wave, 1);
    assert_eq!(
        engine.state().registry.asteroids.len(),
        8,
        "a second Start is ignored"
    );
}

#[test]
fn test_pause_freezes_simulation() {
    let mut engine = started(7);
    engine.queue_command(PlayerCommand::TogglePause);
    let before = engine.frame(DT, &FrameInput::default());
    assert!(before.paused);
    let positions: Vec<DVec2> = before.asteroids.iter().map(|a| a.transform.position).collect();
    let tick = before.time.tick;

    for _ in 0..30 {
        engine.frame(DT, &FrameInput::default());
    }
    let after = engine.frame(DT, &FrameInput::default());
    let moved: Vec<DVec2> = after.asteroids.iter().map(|a| a.transform.position).collect();
    assert_eq!(positions, moved, "asteroids must not move while paused");
    assert_eq!(after.time.tick, tick);
    assert!(after.time.frame > before.time.frame);

    engine.queue_command(PlayerCommand::TogglePause);
    let resumed = engine.frame(DT, &FrameInput::default());
    assert!(!resumed.paused);
    assert_eq!(resumed.time.tick, tick + 1);
}

#[test]
fn test_long_frames_are_clamped() {
    let mut engine = started(7);
    let before = engine.time().elapsed_secs;
    engine.frame(1.0, &FrameInput::default());
    let stepped = engine.time().elapsed_secs - before;
    assert!((stepped - MAX_FRAME_DT).abs() < 1e-12, "stepped {stepped}");
}

#[test]
fn test_bad_deltas_count_as_zero() {
    let mut engine = started(7);
    let before = engine.time().elapsed_secs;
    engine.frame(-0.5, &FrameInput::default());
    engine.frame(f64::NAN, &FrameInput::default());
    assert_eq!(engine.time().elapsed_secs, before);
}

// ---- Firing ----

#[test]
fn test_fire_respects_interval() {
    let mut engine = started(7);
    engine.state_mut().ship.fire_cooldown = 0.0;
    let input = FrameInput {
        fire: true,
        ..Default::default()
    };
    let mut shots = 0;
    // Ten frames between shots at 60 fps.
    for _ in 0..31 {
        let snap = engine.frame(DT, &input);
        shots += snap
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::ShotFired { .. }))
            .count();
    }
    assert_eq!(shots, 4);
}

// ---- Run lifecycle ----

#[test]
fn test_clearing_first_wave_offers_draft() {
    let mut engine = started(7);
    clear_wave(&mut engine);
    assert_eq!(engine.flags().intermission, Intermission::Draft);
    let snap = engine.frame(DT, &FrameInput::default());
    assert_eq!(snap.draft.len(), DRAFT_SIZE);

    let tick = snap.time.tick;
    engine.frame(DT, &FrameInput::default());
    assert_eq!(engine.time().tick, tick, "the draft freezes the game");

    engine.queue_command(PlayerCommand::SelectUpgrade { index: 0 });
    let snap = engine.frame(DT, &FrameInput::default());
    assert_eq!(snap.intermission, Intermission::None);
    assert_eq!(snap.hud.wave, 2);
    assert_eq!(snap.hud.history.len(), 1);
    assert!(snap.ship.invulnerable, "new waves start with a grace period");
}

#[test]
fn test_pause_is_ignored_during_intermission() {
    let mut engine = started(7);
    clear_wave(&mut engine);
    engine.queue_command(PlayerCommand::TogglePause);
    let snap = engine.frame(DT, &FrameInput::default());
    assert!(!snap.paused);
}

#[test]
fn test_hangar_before_third_wave() {
    let mut engine = started(7);
    clear_wave(&mut engine);
    engine.queue_command(PlayerCommand::SelectUpgrade { index: 0 });
    engine.frame(DT, &FrameInput::default());
    clear_wave(&mut engine);
    assert_eq!(engine.flags().intermission, Intermission::Hangar);

    engine.state_mut().wallet = Wallet {
        salvage: 1000,
        gold: 50,
        platinum: 50,
        adamantium: 50,
    };
    engine.queue_command(PlayerCommand::PurchaseShopItem { index: 0 });
    engine.queue_command(PlayerCommand::RerollShop);
    let snap = engine.frame(DT, &FrameInput::default());
    let shop = snap.shop.expect("hangar stays open after buying");
    assert_eq!(shop.rerolls, 1);
    assert_eq!(shop.reroll_cost, 17);
    assert_eq!(snap.hud.history.len(), 2);

    engine.queue_command(PlayerCommand::LeaveHangar);
    let snap = engine.frame(DT, &FrameInput::default());
    assert!(snap.shop.is_none());
    assert_eq!(snap.hud.wave, 3);
    assert_eq!(snap.asteroids.len(), 12);
    assert_eq!(snap.beacons.len(), 1, "wave 3 telegraphs its first enemy");
}

#[test]
fn test_stray_commands_are_rejected_quietly() {
    let mut engine = started(7);
    engine.queue_commands([
        PlayerCommand::SelectUpgrade { index: 0 },
        PlayerCommand::PurchaseShopItem { index: 0 },
        PlayerCommand::RerollShop,
        PlayerCommand::LeaveHangar,
    ]);
    let snap = engine.frame(DT, &FrameInput::default());
    assert_eq!(snap.hud.wave, 1);
    assert!(snap.hud.history.is_empty());
}

#[test]
fn test_asteroid_collision_ends_run() {
    let mut engine = started(7);
    let state = engine.state_mut();
    state.ship.invulnerable_secs = 0.0;
    let at = state.ship.position;
    state
        .registry
        .spawn_asteroid(at, DVec2::ZERO, SizeTier::Large, OreTier::Iron, 0.0);

    let snap = engine.frame(DT, &FrameInput::default());
    let summary = snap.game_over.expect("ship should be destroyed");
    assert_eq!(summary.wave, 1);
    assert!(!snap.ship.visible);
    let cause = snap.events.iter().find_map(|e| match e {
        GameEvent::GameOver { cause, .. } => Some(*cause),
        _ => None,
    });
    assert_eq!(cause, Some(DeathCause::AsteroidCollision));
    assert_eq!(cause.map(|c| c.to_string()).as_deref(), Some("Asteroid collision"));

    let tick = snap.time.tick;
    engine.frame(DT, &FrameInput::default());
    assert_eq!(engine.time().tick, tick, "game over freezes the game");
}

#[test]
fn test_shield_saves_ship() {
    let mut engine = started(7);
    let state = engine.state_mut();
    state.ship.invulnerable_secs = 0.0;
    state.modifiers.shields = 1;
    let at = state.ship.position;
    state
        .registry
        .spawn_asteroid(at, DVec2::ZERO, SizeTier::Large, OreTier::Iron, 0.0);

    let snap = engine.frame(DT, &FrameInput::default());
    assert!(snap.game_over.is_none());
    assert_eq!(snap.hud.shields, 0);
    assert!(snap.ship.invulnerable);
}

#[test]
fn test_reset_keeps_wallet_only() {
    let mut engine = started(7);
    {
        let state = engine.state_mut();
        state.wallet.salvage = 40;
        state.wallet.gold = 2;
        state.score = 900;
        state.wave = 5;
        state.modifiers.shields = 3;
        state.modifiers.spread = SpreadTier::Wide;
    }
    engine.queue_command(PlayerCommand::Reset);
    let snap = engine.frame(DT, &FrameInput::default());
    assert_eq!(snap.hud.wallet.salvage, 40);
    assert_eq!(snap.hud.wallet.gold, 2);
    assert_eq!(snap.hud.score, 0);
    assert_eq!(snap.hud.wave, 1);
    assert_eq!(snap.hud.shields, 0);
    assert_eq!(engine.state().modifiers.spread, SpreadTier::None);
    assert_eq!(snap.asteroids.len(), 8);
    assert!(snap.started);
}

#[test]
fn test_camera_follows_ship() {
    let mut engine = started(7);
    let input = FrameInput {
        thrust: true,
        ..Default::default()
    };
    for _ in 0..20 {
        engine.frame(DT, &input);
    }
    let state = engine.state();
    assert!(!state.camera.is_shaking(), "nothing has shaken the camera yet");
    assert_ne!(state.ship.position, DVec2::ZERO, "the ship should have moved");
    assert_eq!(state.camera.position, state.ship.position);
}

#[test]
fn test_combo_decays_without_kills() {
    let mut engine = started(7);
    engine.state_mut().combo.count = 4;
    engine.state_mut().combo.timer = COMBO_WINDOW;
    // Nothing fires, so no kill can refresh the combo.
    for _ in 0..180 {
        engine.frame(DT, &FrameInput::default());
    }
    assert_eq!(engine.state().combo.count, 1);
}

#[test]
fn test_effects_settle_while_paused() {
    let mut engine = started(7);
    let at = engine.state().ship.position;
    {
        let state = engine.state_mut();
        crate::systems::effects::burst(
            &mut state.particles,
            &mut state.rng,
            at,
            &crate::systems::effects::ASTEROID_BREAK,
        );
    }
    engine.queue_command(PlayerCommand::TogglePause);
    for _ in 0..60 {
        engine.frame(DT, &FrameInput::default());
    }
    assert_eq!(engine.state().particles.active_count(), 0);
}
