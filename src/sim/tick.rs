//! Frame orchestrator
//!
//! One logical tick: resolved input -> movement -> collision engine ->
//! shield timeout. Rendering and persistence are driven from the binary
//! around this call; the simulation itself never touches a platform API.

use super::collision;
use super::fleet;
use super::powerup;
use super::state::{Bullet, GameEvent, GamePhase, GameState, TickInput};
use crate::settings::Settings;

/// Advance the session by one fixed timestep.
///
/// Settings are injected per call; the difficulty step-up on a cleared
/// fleet is the only mutation they see. Returned events are meant for the
/// audio collaborator and carry no gameplay state.
pub fn tick(
    state: &mut GameState,
    settings: &mut Settings,
    input: &TickInput,
    dt: f32,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.new_game && state.phase == GamePhase::Inactive {
        start_new_game(state, settings);
    }

    match state.phase {
        // No active game: move/fire input is ignored entirely
        GamePhase::Inactive => return events,
        // Post-hit breather: the whole simulation is frozen until it runs out
        GamePhase::Paused { remaining } => {
            let remaining = remaining - dt;
            state.phase = if remaining <= 0.0 {
                GamePhase::Active
            } else {
                GamePhase::Paused { remaining }
            };
            return events;
        }
        GamePhase::Active => {}
    }

    state.elapsed += dt;

    // A fleet cleared on the previous tick starts the next level now, so the
    // new formation moves at the already-increased speed from its first step
    collision::check_fleet_cleared(state, settings);

    // Apply resolved input
    state.ship.moving_left = input.move_left;
    state.ship.moving_right = input.move_right;
    if input.fire {
        // Firing at the cap is silently ignored
        if state.bullets.len() < settings.bullet_allowed {
            state
                .bullets
                .push(Bullet::fired_from(&state.ship, settings));
            events.push(GameEvent::BulletFired);
        }
    }

    // Movement integration
    state.ship.update(settings, dt);
    for bullet in &mut state.bullets {
        bullet.pos.y -= settings.bullet_speed_factor * dt;
    }
    state.bullets.retain(|b| b.rect().bottom() > 0.0);

    fleet::check_edges(&mut state.fleet, settings);
    fleet::advance(&mut state.fleet, settings, dt);
    powerup::advance(&mut state.powerups, settings, dt);

    // Collisions and scoring
    collision::resolve(state, settings, &mut events);

    // Shield timeout is polled, so expiry granularity is the tick period
    state.stats.expire_shield(state.elapsed, settings);

    events
}

/// Begin a brand-new game: stats re-baselined, dynamic difficulty reset,
/// board cleared and respawned, ship recentered.
///
/// Not used for the respawn after a lost life, which keeps the current
/// difficulty.
pub fn start_new_game(state: &mut GameState, settings: &mut Settings) {
    state.stats.reset_stats(settings);
    settings.initialize_dynamic_settings();

    state.bullets.clear();
    state.powerups.clear();
    fleet::spawn_fleet(&mut state.fleet, settings);
    state.ship.center_ship(settings);
    state.elapsed = 0.0;
    state.phase = GamePhase::Active;

    log::info!("new game started");
}
