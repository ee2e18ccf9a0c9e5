//! Circle-vs-circle collision passes and their outcomes.
//!
//! Passes run in a fixed order each step: bullet/asteroid, bullet/enemy,
//! ship/hostile, drone/asteroid. Removal happens during reverse scans with
//! `swap_remove`; anything pushed this step (split fragments) lands past the
//! cursor and is not tested until the next step.

use glam::DVec2;

use voidrush_core::components::Asteroid;
use voidrush_core::constants::*;
use voidrush_core::enums::{DeathCause, TargetKind};
use voidrush_core::events::GameEvent;

use crate::game_state::GameState;
use crate::systems::{economy, effects};
use crate::world_setup;

/// Overlap test on squared distance.
pub fn circle_hit(a: DVec2, a_radius: f64, b: DVec2, b_radius: f64) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) <= reach * reach
}

/// Run every pass in order.
pub fn run(state: &mut GameState, dt: f64) {
    bullets_vs_asteroids(state);
    bullets_vs_enemies(state);
    ship_vs_hostiles(state);
    push_drones_clear(state, dt);
}

/// Bounce bullets that still carry ricochet charges off the world edge.
/// Must run after integration and before the bullet wrap.
pub fn ricochet(state: &mut GameState) {
    let hw = state.bounds.half_width;
    let hh = state.bounds.half_height;
    for i in 0..state.registry.bullets.len() {
        let b = &mut state.registry.bullets[i];
        if b.ricochet == 0 {
            continue;
        }
        let mut bounced = false;
        if b.position.x.abs() > hw {
            b.position.x = b.position.x.clamp(-hw, hw);
            b.velocity.x = -b.velocity.x;
            bounced = true;
        }
        if b.position.y.abs() > hh {
            b.position.y = b.position.y.clamp(-hh, hh);
            b.velocity.y = -b.velocity.y;
            bounced = true;
        }
        if bounced {
            b.ricochet -= 1;
            let at = b.position;
            effects::burst(&mut state.particles, &mut state.rng, at, &effects::RICOCHET_SPARK);
            state.emit(GameEvent::Ricochet { position: at });
        }
    }
}

/// Index of the last bullet overlapping the circle, scanning in reverse.
fn first_bullet_hit(state: &GameState, position: DVec2, radius: f64) -> Option<usize> {
    state
        .registry
        .bullets
        .iter()
        .enumerate()
        .rev()
        .find(|(_, b)| circle_hit(b.position, b.radius, position, radius))
        .map(|(index, _)| index)
}

/// Spend a pierce charge, or remove the bullet when it has none.
/// Returns the bullet's damage.
fn spend_bullet(state: &mut GameState, index: usize) -> f64 {
    let bullet = &mut state.registry.bullets[index];
    let damage = bullet.damage;
    if bullet.pierce > 0 {
        bullet.pierce -= 1;
    } else {
        state.registry.bullets.swap_remove(index);
    }
    damage
}

pub fn bullets_vs_asteroids(state: &mut GameState) {
    let mut i = state.registry.asteroids.len();
    while i > 0 {
        i -= 1;
        let target = &state.registry.asteroids[i];
        let Some(hit) = first_bullet_hit(state, target.position, target.radius) else {
            continue;
        };
        let damage = spend_bullet(state, hit);
        let asteroid = state.registry.asteroids.swap_remove(i);
        state.emit(GameEvent::HitLanded {
            target: TargetKind::Asteroid,
            position: asteroid.position,
            damage,
        });
        destroy_asteroid(state, &asteroid);
    }
}

/// Score, drops, effects and fragments for an asteroid shot down.
fn destroy_asteroid(state: &mut GameState, asteroid: &Asteroid) {
    let at = asteroid.position;
    economy::award_kill(state, asteroid.size.score(), TargetKind::Asteroid, at);
    economy::spawn_drops(state, asteroid);
    effects::burst(&mut state.particles, &mut state.rng, at, &effects::ASTEROID_BREAK);
    let shards = (asteroid.size.mesh_radius() * 2.0).floor() as u32;
    effects::debris_burst(&mut state.debris, &mut state.rng, at, shards);
    state.shake(0.5, 0.12, Some(at));
    world_setup::split_asteroid(&mut state.registry, &mut state.rng, asteroid);
}

pub fn bullets_vs_enemies(state: &mut GameState) {
    let mut i = state.registry.enemies.len();
    while i > 0 {
        i -= 1;
        let target = &state.registry.enemies[i];
        let Some(hit) = first_bullet_hit(state, target.position, target.radius) else {
            continue;
        };
        let damage = spend_bullet(state, hit);
        let enemy = state.registry.enemies.swap_remove(i);
        let at = enemy.position;
        state.emit(GameEvent::HitLanded {
            target: TargetKind::Enemy,
            position: at,
            damage,
        });
        economy::award_kill(state, ENEMY_SCORE, TargetKind::Enemy, at);
        effects::burst(&mut state.particles, &mut state.rng, at, &effects::ENEMY_BREAK);
        effects::debris_burst(&mut state.debris, &mut state.rng, at, 8);
        state.shake(0.6, 0.12, Some(at));
    }
}

/// Ship against asteroids, then against enemies. Each pass resolves at most
/// one contact, and a shield save makes the ship immune to the next pass.
pub fn ship_vs_hostiles(state: &mut GameState) {
    if !state.ship.alive || state.ship.is_invulnerable() {
        return;
    }
    let ship = state.ship.position;
    let radius = state.ship.radius;

    let rammed = state
        .registry
        .asteroids
        .iter()
        .any(|a| circle_hit(a.position, a.radius, ship, radius));
    if rammed {
        if absorb_hit(state) {
            state.shake(0.8, 0.2, Some(ship));
        } else {
            kill_ship(state, DeathCause::AsteroidCollision);
        }
        return;
    }

    let rammed = state
        .registry
        .enemies
        .iter()
        .any(|e| circle_hit(e.position, e.radius, ship, radius));
    if rammed {
        if absorb_hit(state) {
            state.shake(0.6, 0.12, Some(ship));
        } else {
            kill_ship(state, DeathCause::EnemyCollision);
        }
    }
}

/// Burn a shield charge if one is left.
fn absorb_hit(state: &mut GameState) -> bool {
    if state.modifiers.shields == 0 {
        return false;
    }
    state.modifiers.shields -= 1;
    state.ship.invulnerable_secs = SHIELD_INVULN;
    let at = state.ship.position;
    effects::burst(&mut state.particles, &mut state.rng, at, &effects::SHIELD_HIT);
    state.emit(GameEvent::ShieldConsumed {
        remaining: state.modifiers.shields,
    });
    true
}

/// End the run. Freezes the simulation until a reset.
pub fn kill_ship(state: &mut GameState, cause: DeathCause) {
    if state.flags.game_over {
        return;
    }
    state.ship.alive = false;
    state.ship.visible = false;
    state.flags.game_over = true;
    let at = state.ship.position;
    effects::burst(&mut state.particles, &mut state.rng, at, &effects::ENEMY_BREAK);
    effects::debris_burst(&mut state.debris, &mut state.rng, at, 8);
    state.shake(1.0, 0.5, Some(at));
    let summary = state.summary();
    state.game_over = Some(summary);
    log::info!(
        "run over: {cause} on wave {} with score {}",
        summary.wave,
        summary.score
    );
    state.emit(GameEvent::GameOver { cause, summary });
}

/// Drones are immune to asteroids; overlapping ones get shoved outward.
pub fn push_drones_clear(state: &mut GameState, dt: f64) {
    let bounds = state.bounds;
    let asteroids = &state.registry.asteroids;
    for drone in &mut state.registry.drones {
        for a in asteroids {
            if circle_hit(a.position, a.radius, drone.position, DRONE_RADIUS) {
                let offset = drone.position - a.position;
                let distance = offset.length() + 1e-3;
                drone.position += offset / distance * DRONE_PUSH_SPEED * dt;
            }
        }
        bounds.wrap(&mut drone.position);
    }
}

#[cfg(test)]
mod tests {
    use voidrush_core::enums::{OreTier, PierceTier, SizeTier};

    use super::*;
    use crate::config::SimConfig;

    fn state() -> GameState {
        let mut s = GameState::new(&SimConfig::default());
        s.ship.invulnerable_secs = 0.0;
        s.flags.started = true;
        s
    }

    fn rock(s: &mut GameState, x: f64, y: f64, size: SizeTier) {
        s.registry
            .spawn_asteroid(DVec2::new(x, y), DVec2::ZERO, size, OreTier::Iron, 0.0);
    }

    #[test]
    fn test_circle_hit_touching_counts() {
        assert!(circle_hit(DVec2::ZERO, 1.0, DVec2::new(2.0, 0.0), 1.0));
        assert!(!circle_hit(DVec2::ZERO, 1.0, DVec2::new(2.001, 0.0), 1.0));
    }

    #[test]
    fn test_one_resolution_per_asteroid() {
        let mut s = state();
        rock(&mut s, 50.0, 0.0, SizeTier::Small);
        for _ in 0..3 {
            s.registry.spawn_bullet(DVec2::new(50.0, 0.0), DVec2::ZERO, 1.0, 0, 0);
        }
        bullets_vs_asteroids(&mut s);
        assert!(s.registry.asteroids.is_empty());
        assert_eq!(s.registry.bullets.len(), 2, "only one bullet is spent on the asteroid");
        assert_eq!(s.score, 120);
    }

    #[test]
    fn test_large_splits_into_two_medium() {
        let mut s = state();
        rock(&mut s, 50.0, 0.0, SizeTier::Large);
        s.registry.spawn_bullet(DVec2::new(50.0, 0.0), DVec2::ZERO, 1.0, 0, 0);
        bullets_vs_asteroids(&mut s);
        assert_eq!(s.registry.asteroids.len(), 2);
        assert!(s.registry.asteroids.iter().all(|a| a.size == SizeTier::Medium));
        assert_eq!(s.registry.pickups.len(), 6);
        assert!(s.particles.active_count() > 0);
    }

    #[test]
    fn test_fragments_are_not_hit_in_their_spawn_step() {
        let mut s = state();
        rock(&mut s, 50.0, 0.0, SizeTier::Large);
        s.registry.spawn_bullet(DVec2::new(50.0, 0.0), DVec2::ZERO, 1.0, 0, 0);
        s.registry.spawn_bullet(DVec2::new(50.0, 0.0), DVec2::ZERO, 1.0, 0, 0);
        bullets_vs_asteroids(&mut s);
        assert_eq!(s.registry.asteroids.len(), 2);
        assert_eq!(s.registry.bullets.len(), 1);
    }

    #[test]
    fn test_pierce_bullet_survives_hits() {
        let mut s = state();
        rock(&mut s, 10.0, 0.0, SizeTier::Small);
        rock(&mut s, 10.5, 0.0, SizeTier::Small);
        rock(&mut s, 11.0, 0.0, SizeTier::Small);
        rock(&mut s, 11.5, 0.0, SizeTier::Small);
        let charges = PierceTier::Double.charges();
        s.registry.spawn_bullet(DVec2::new(10.75, 0.0), DVec2::ZERO, 1.0, charges, 0);
        bullets_vs_asteroids(&mut s);
        assert_eq!(s.registry.asteroids.len(), 1, "one pierce bullet clears three rocks");
        assert!(s.registry.bullets.is_empty());
    }

    #[test]
    fn test_enemy_kill_scores_150_through_combo() {
        let mut s = state();
        s.registry.spawn_enemy(DVec2::new(30.0, 0.0), 1.0);
        s.registry.spawn_bullet(DVec2::new(30.0, 0.5), DVec2::ZERO, 1.0, 0, 0);
        bullets_vs_enemies(&mut s);
        assert!(s.registry.enemies.is_empty());
        assert_eq!(s.score, 180);
    }

    #[test]
    fn test_unshielded_asteroid_contact_is_fatal() {
        let mut s = state();
        rock(&mut s, 0.0, 0.0, SizeTier::Small);
        ship_vs_hostiles(&mut s);
        assert!(s.flags.game_over);
        assert!(!s.ship.alive);
        let cause = s.events.iter().find_map(|e| match e {
            GameEvent::GameOver { cause, .. } => Some(*cause),
            _ => None,
        });
        assert_eq!(cause, Some(DeathCause::AsteroidCollision));
    }

    #[test]
    fn test_shield_absorbs_and_grants_invulnerability() {
        let mut s = state();
        s.modifiers.shields = 1;
        rock(&mut s, 0.0, 0.0, SizeTier::Small);
        s.registry.spawn_enemy(DVec2::ZERO, 1.0);
        ship_vs_hostiles(&mut s);
        assert!(s.ship.alive, "shield should save the ship");
        assert_eq!(s.modifiers.shields, 0);
        assert!((s.ship.invulnerable_secs - SHIELD_INVULN).abs() < 1e-9);
        ship_vs_hostiles(&mut s);
        assert!(s.ship.alive, "invulnerable ship ignores contact");
    }

    #[test]
    fn test_enemy_contact_cause() {
        let mut s = state();
        s.registry.spawn_enemy(DVec2::new(1.0, 0.0), 1.0);
        ship_vs_hostiles(&mut s);
        assert!(matches!(
            s.events.last(),
            Some(GameEvent::GameOver {
                cause: DeathCause::EnemyCollision,
                ..
            })
        ));
    }

    #[test]
    fn test_ricochet_bounces_instead_of_wrapping() {
        let mut s = state();
        let hw = s.bounds.half_width;
        s.registry
            .spawn_bullet(DVec2::new(hw + 1.0, 0.0), DVec2::new(70.0, 5.0), 1.0, 0, 1);
        s.registry
            .spawn_bullet(DVec2::new(hw + 1.0, 0.0), DVec2::new(70.0, 5.0), 1.0, 0, 0);
        ricochet(&mut s);
        let bounced = &s.registry.bullets[0];
        assert_eq!(bounced.position.x, hw);
        assert_eq!(bounced.velocity, DVec2::new(-70.0, 5.0));
        assert_eq!(bounced.ricochet, 0);
        let plain = &s.registry.bullets[1];
        assert_eq!(plain.velocity.x, 70.0, "bullets without charges are left to wrap");
    }

    #[test]
    fn test_drones_pushed_out_of_asteroids() {
        let mut s = state();
        rock(&mut s, 0.0, 0.0, SizeTier::Large);
        s.registry.spawn_drone(DVec2::ZERO);
        let before = s.registry.drones[0].position;
        push_drones_clear(&mut s, 0.1);
        let after = s.registry.drones[0].position;
        assert!(after.length() > before.length());
    }

    #[test]
    fn test_drone_pushed_past_the_edge_wraps() {
        let mut s = state();
        let hw = s.bounds.half_width;
        rock(&mut s, hw - 1.0, 0.0, SizeTier::Large);
        s.registry.spawn_drone(DVec2::ZERO);
        s.registry.drones[0].position = DVec2::new(hw, 0.0);
        push_drones_clear(&mut s, 0.1);
        let after = s.registry.drones[0].position;
        assert!(s.bounds.contains(after), "drone at {after:?}");
        assert_eq!(after.x, -hw);
    }
}
