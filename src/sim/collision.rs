//! Collision detection and scoring
//!
//! One engine pass per tick, in a fixed order that score/level consistency
//! depends on:
//!
//! 1. bullet/alien hits (plus one power-up roll per kill)
//! 2. high-score fold (once, after the hit pass)
//! 3. alien/ship contact
//! 4. aliens reaching the bottom boundary
//! 5. ship/power-up pickups
//!
//! The fleet-cleared level-up (`check_fleet_cleared`) runs at tick start in
//! the orchestrator instead, so a tick that destroys the last alien ends
//! with an empty formation and the level advances exactly once, on the next
//! tick. A pass that knocks the session out of `Active` (a lost life or
//! game over) ends the engine pass for this tick.

use super::fleet;
use super::powerup;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::HIT_PAUSE_SECS;
use crate::settings::Settings;

/// Run all engine passes for one tick.
pub fn resolve(state: &mut GameState, settings: &mut Settings, events: &mut Vec<GameEvent>) {
    handle_bullet_alien_collisions(state, settings, events);

    handle_alien_ship_collision(state, settings, events);
    if state.phase != GamePhase::Active {
        return;
    }

    handle_aliens_bottom(state, settings, events);
    if state.phase != GamePhase::Active {
        return;
    }

    handle_powerup_pickups(state, settings);
}

/// Pass 1+2: all-pairs bullet/alien intersection. A bullet destroys at most
/// one alien per tick; when several overlap, the first alien in formation
/// order wins, keeping the outcome deterministic. The high score is folded
/// once after the whole pass, not per kill.
fn handle_bullet_alien_collisions(
    state: &mut GameState,
    settings: &Settings,
    events: &mut Vec<GameEvent>,
) {
    let mut bullet_idx = 0;
    while bullet_idx < state.bullets.len() {
        let bullet_rect = state.bullets[bullet_idx].rect();
        let hit = state
            .fleet
            .aliens
            .iter()
            .position(|a| a.rect().intersects(&bullet_rect));

        match hit {
            Some(alien_idx) => {
                let alien = state.fleet.aliens.remove(alien_idx);
                state.bullets.remove(bullet_idx);

                state.stats.score += settings.alien_points as u64;
                events.push(GameEvent::AlienDestroyed);

                if let Some(drop) = powerup::spawn_for_kill(&mut state.rng, settings, alien.pos) {
                    state.powerups.push(drop);
                }
            }
            None => bullet_idx += 1,
        }
    }

    state.stats.check_high_score();
}

/// A cleared fleet ends the level: remaining bullets are wiped, the
/// difficulty steps up once, the level advances exactly once, and a fresh
/// fleet spawns at the already-increased speed.
///
/// Called by the orchestrator at the start of each active tick. This is the
/// only place the level counter moves.
pub fn check_fleet_cleared(state: &mut GameState, settings: &mut Settings) {
    if !state.fleet.is_cleared() {
        return;
    }

    state.bullets.clear();
    settings.increase_speed();
    state.stats.level += 1;
    fleet::spawn_fleet(&mut state.fleet, settings);

    log::info!(
        "level up: level={} alien_speed={:.1} alien_points={}",
        state.stats.level,
        settings.alien_speed_factor,
        settings.alien_points
    );
}

/// Pass 3: any alien touching the ship costs a life, unless the shield is
/// up, in which case the contact is ignored with no state change.
fn handle_alien_ship_collision(
    state: &mut GameState,
    settings: &Settings,
    events: &mut Vec<GameEvent>,
) {
    let ship_rect = state.ship.rect(settings);
    let contact = state
        .fleet
        .aliens
        .iter()
        .any(|a| a.rect().intersects(&ship_rect));

    if contact {
        ship_hit(state, settings, events);
    }
}

/// Pass 4: aliens reaching the screen bottom. Shield up: each offender is
/// removed individually and the scan continues. Shield down: the first
/// offender costs a life and the scan aborts for this tick.
fn handle_aliens_bottom(state: &mut GameState, settings: &Settings, events: &mut Vec<GameEvent>) {
    let mut idx = 0;
    while idx < state.fleet.aliens.len() {
        if state.fleet.aliens[idx].rect().bottom() >= settings.screen_height {
            if state.stats.shield_active() {
                state.fleet.aliens.remove(idx);
                continue;
            }
            ship_hit(state, settings, events);
            break;
        }
        idx += 1;
    }
}

/// Pass 5: collect power-ups overlapping the ship and apply their effects.
fn handle_powerup_pickups(state: &mut GameState, settings: &Settings) {
    let ship_rect = state.ship.rect(settings);
    let now = state.elapsed;

    let mut collected = Vec::new();
    state.powerups.retain(|p| {
        if p.rect().intersects(&ship_rect) {
            collected.push(p.kind);
            false
        } else {
            true
        }
    });

    for kind in collected {
        powerup::apply(kind, &mut state.stats, settings, now);
    }
}

/// Lose a life, or the game.
///
/// No-op while the shield is up. Otherwise the life counter drops; if lives
/// remain the board resets (fleet respawn, ship recentered) and the session
/// pauses for a breather, and if none remain the session goes inactive.
pub fn ship_hit(state: &mut GameState, settings: &Settings, events: &mut Vec<GameEvent>) {
    if state.stats.shield_active() {
        return;
    }

    if state.stats.ships_left > 0 {
        state.stats.ships_left -= 1;
    }

    if state.stats.ships_left > 0 {
        state.bullets.clear();
        fleet::spawn_fleet(&mut state.fleet, settings);
        state.ship.center_ship(settings);
        state.phase = GamePhase::Paused {
            remaining: HIT_PAUSE_SECS,
        };
        events.push(GameEvent::LifeLost);
        log::info!("ship hit, {} lives remaining", state.stats.ships_left);
    } else {
        state.phase = GamePhase::Inactive;
        events.push(GameEvent::GameOver);
        log::info!("game over: score={}", state.stats.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Alien, Bullet, PowerUp, PowerUpKind};
    use glam::Vec2;

    fn active_state(settings: &Settings) -> GameState {
        let mut state = GameState::new(123, settings);
        state.phase = GamePhase::Active;
        state
    }

    #[test]
    fn test_bullet_destroys_overlapping_alien() {
        let mut settings = Settings {
            bonus_chance: 1.0,
            ..Settings::default()
        };
        let mut state = active_state(&settings);
        state.fleet.aliens = vec![Alien {
            pos: Vec2::new(300.0, 300.0),
        }];
        state.bullets = vec![Bullet {
            pos: Vec2::new(310.0, 310.0),
        }];

        let mut events = Vec::new();
        resolve(&mut state, &mut settings, &mut events);

        assert_eq!(state.stats.score, Settings::default().alien_points as u64);
        assert!(events.contains(&GameEvent::AlienDestroyed));
        // Guaranteed drop chance: the single kill made exactly one attempt
        assert_eq!(state.powerups.len(), 1);
        // Both parties removed; the level-up waits for the next tick
        assert!(state.bullets.is_empty());
        assert!(state.fleet.is_cleared());
        assert_eq!(state.stats.level, 1);
    }

    #[test]
    fn test_bullet_hits_at_most_one_alien() {
        let mut settings = Settings {
            bonus_chance: 0.0,
            ..Settings::default()
        };
        let mut state = active_state(&settings);
        // Two aliens stacked on the same spot, one bullet through both
        state.fleet.aliens = vec![
            Alien {
                pos: Vec2::new(300.0, 300.0),
            },
            Alien {
                pos: Vec2::new(300.0, 300.0),
            },
        ];
        state.bullets = vec![Bullet {
            pos: Vec2::new(310.0, 310.0),
        }];

        let mut events = Vec::new();
        resolve(&mut state, &mut settings, &mut events);

        // First match wins; the second alien survives
        assert_eq!(state.fleet.aliens.len(), 1);
        assert_eq!(state.stats.score, settings.alien_points as u64);
    }

    #[test]
    fn test_high_score_updated_after_pass() {
        let mut settings = Settings::default();
        let mut state = active_state(&settings);
        state.fleet.aliens = vec![Alien {
            pos: Vec2::new(300.0, 300.0),
        }];
        state.bullets = vec![Bullet {
            pos: Vec2::new(310.0, 310.0),
        }];

        resolve(&mut state, &mut settings, &mut Vec::new());
        assert!(state.stats.high_score >= state.stats.score);
        assert_eq!(state.stats.high_score, state.stats.score);
    }

    #[test]
    fn test_cleared_fleet_levels_up_once() {
        let mut settings = Settings::default();
        let mut state = active_state(&settings);
        state.fleet.aliens.clear();
        state.bullets = vec![Bullet {
            pos: Vec2::new(0.0, 0.0),
        }];
        let speed_before = settings.alien_speed_factor;

        check_fleet_cleared(&mut state, &mut settings);

        assert_eq!(state.stats.level, 2);
        assert!(state.bullets.is_empty());
        assert!(!state.fleet.is_cleared());
        assert!(settings.alien_speed_factor > speed_before);
    }

    #[test]
    fn test_alien_on_ship_costs_life() {
        let mut settings = Settings::default();
        let mut state = active_state(&settings);
        let ship_rect = state.ship.rect(&settings);
        state.fleet.aliens = vec![Alien {
            pos: ship_rect.pos,
        }];

        let mut events = Vec::new();
        resolve(&mut state, &mut settings, &mut events);

        assert_eq!(state.stats.ships_left, settings.ship_limit - 1);
        assert!(matches!(state.phase, GamePhase::Paused { .. }));
        assert!(events.contains(&GameEvent::LifeLost));
        // Board reset: fresh fleet, recentered ship
        assert!(!state.fleet.is_cleared());
        assert_eq!(state.ship.center_x, settings.screen_width / 2.0);
    }

    #[test]
    fn test_last_life_ends_session_without_respawn() {
        let mut settings = Settings::default();
        let mut state = active_state(&settings);
        state.stats.ships_left = 1;
        let ship_rect = state.ship.rect(&settings);
        state.fleet.aliens = vec![Alien {
            pos: ship_rect.pos,
        }];

        let mut events = Vec::new();
        resolve(&mut state, &mut settings, &mut events);

        assert_eq!(state.stats.ships_left, 0);
        assert_eq!(state.phase, GamePhase::Inactive);
        assert!(events.contains(&GameEvent::GameOver));
        // No respawn happened: the offending alien is still there
        assert_eq!(state.fleet.aliens.len(), 1);
    }

    #[test]
    fn test_shield_ignores_ship_contact() {
        let mut settings = Settings::default();
        let mut state = active_state(&settings);
        state.stats.activate_shield(0.0);
        let ship_rect = state.ship.rect(&settings);
        state.fleet.aliens = vec![Alien {
            pos: ship_rect.pos,
        }];

        let mut events = Vec::new();
        resolve(&mut state, &mut settings, &mut events);

        assert_eq!(state.stats.ships_left, settings.ship_limit);
        assert_eq!(state.phase, GamePhase::Active);
        assert!(!events.contains(&GameEvent::LifeLost));
    }

    #[test]
    fn test_shield_removes_bottom_aliens_individually() {
        let mut settings = Settings::default();
        let mut state = active_state(&settings);
        state.stats.activate_shield(0.0);
        state.fleet.aliens = vec![
            // Two offenders at the bottom, one safe member above
            Alien {
                pos: Vec2::new(100.0, settings.screen_height),
            },
            Alien {
                pos: Vec2::new(300.0, settings.screen_height),
            },
            Alien {
                pos: Vec2::new(500.0, 100.0),
            },
        ];

        let mut events = Vec::new();
        resolve(&mut state, &mut settings, &mut events);

        assert_eq!(state.fleet.aliens.len(), 1);
        assert_eq!(state.stats.ships_left, settings.ship_limit);
        assert!(!events.contains(&GameEvent::LifeLost));
    }

    #[test]
    fn test_bottom_alien_without_shield_costs_life() {
        let mut settings = Settings::default();
        let mut state = active_state(&settings);
        state.fleet.aliens = vec![Alien {
            pos: Vec2::new(100.0, settings.screen_height),
        }];

        let mut events = Vec::new();
        resolve(&mut state, &mut settings, &mut events);

        assert_eq!(state.stats.ships_left, settings.ship_limit - 1);
        assert!(matches!(state.phase, GamePhase::Paused { .. }));
    }

    #[test]
    fn test_powerup_pickup() {
        let mut settings = Settings::default();
        let mut state = active_state(&settings);
        let ship_center = state.ship.rect(&settings).center();
        state.powerups = vec![PowerUp {
            kind: PowerUpKind::Shield,
            pos: ship_center,
        }];

        resolve(&mut state, &mut settings, &mut Vec::new());

        assert!(state.powerups.is_empty());
        assert!(state.stats.shield_active());
    }
}
