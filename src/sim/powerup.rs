//! Power-up drops and effects
//!
//! Each destroyed alien independently rolls the configured drop chance; a
//! successful roll leaves one power-up at the alien's last position, kind
//! chosen uniformly. Drops fall toward the player and vanish off the bottom.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{PowerUp, PowerUpKind};
use crate::consts::POWERUP_FALL_SPEED;
use crate::settings::Settings;
use crate::stats::GameStats;

/// Roll the drop chance for one kill. At most one power-up per kill; a
/// multi-kill tick rolls once per kill, independently.
pub fn spawn_for_kill(rng: &mut Pcg32, settings: &Settings, at: Vec2) -> Option<PowerUp> {
    if rng.random::<f64>() >= settings.bonus_chance {
        return None;
    }

    let kind = if rng.random::<bool>() {
        PowerUpKind::Life
    } else {
        PowerUpKind::Shield
    };
    log::debug!("power-up drop: {kind:?} at {at}");
    Some(PowerUp { kind, pos: at })
}

/// Drift all drops downward and cull the ones that left the screen.
pub fn advance(powerups: &mut Vec<PowerUp>, settings: &Settings, dt: f32) {
    for powerup in powerups.iter_mut() {
        powerup.pos.y += POWERUP_FALL_SPEED * dt;
    }
    powerups.retain(|p| p.rect().top() < settings.screen_height);
}

/// Apply a collected power-up to the session.
pub fn apply(kind: PowerUpKind, stats: &mut GameStats, settings: &Settings, now: f32) {
    match kind {
        PowerUpKind::Life => {
            if stats.ships_left < settings.ship_limit {
                stats.ships_left += 1;
            }
        }
        PowerUpKind::Shield => stats.activate_shield(now),
    }
}
