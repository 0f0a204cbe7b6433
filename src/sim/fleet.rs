//! Fleet layout and formation movement
//!
//! Computes how many aliens fit the screen, spawns the grid, and handles the
//! classic march: slide sideways until any member touches an edge, then the
//! whole formation reverses and descends one notch.

use glam::Vec2;

use super::state::{Alien, Fleet};
use crate::consts::ALIEN_SIZE;
use crate::settings::Settings;

/// Grid dimensions for the current screen size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetLayout {
    pub columns: usize,
    pub rows: usize,
}

impl FleetLayout {
    /// Fit the grid to the screen. A degenerate screen yields zero rows or
    /// columns, which is a valid empty fleet rather than an error.
    pub fn compute(settings: &Settings) -> Self {
        let alien_w = ALIEN_SIZE.x;
        let alien_h = ALIEN_SIZE.y;
        let ship_h = crate::consts::SHIP_SIZE.y;

        let available_x = settings.screen_width - 2.0 * alien_w;
        let columns = if available_x > 0.0 {
            (available_x / (2.0 * alien_w)) as usize
        } else {
            0
        };

        let available_y = settings.screen_height - 3.0 * alien_h - ship_h;
        let rows = if available_y > 0.0 {
            (available_y / (2.0 * alien_h)) as usize
        } else {
            0
        };

        Self { columns, rows }
    }
}

/// Populate the formation, one alien per grid cell, direction reset to +1.
pub fn spawn_fleet(fleet: &mut Fleet, settings: &Settings) {
    let layout = FleetLayout::compute(settings);

    fleet.aliens.clear();
    fleet.direction = 1.0;
    for row in 0..layout.rows {
        for col in 0..layout.columns {
            fleet.aliens.push(Alien {
                pos: Vec2::new(
                    ALIEN_SIZE.x + 2.0 * ALIEN_SIZE.x * col as f32,
                    ALIEN_SIZE.y + 2.0 * ALIEN_SIZE.y * row as f32,
                ),
            });
        }
    }

    log::debug!(
        "fleet spawned: {} rows x {} columns",
        layout.rows,
        layout.columns
    );
}

/// React to any member touching a screen edge: invert the shared direction
/// and drop the entire formation by the configured step. A single offender
/// triggers the reaction for everyone, exactly once per tick.
pub fn check_edges(fleet: &mut Fleet, settings: &Settings) {
    let hit_edge = fleet
        .aliens
        .iter()
        .any(|a| a.rect().right() >= settings.screen_width || a.rect().left() <= 0.0);

    if hit_edge {
        for alien in &mut fleet.aliens {
            alien.pos.y += settings.fleet_drop_speed;
        }
        fleet.direction *= -1.0;
    }
}

/// Slide every alien sideways at the shared fleet speed.
pub fn advance(fleet: &mut Fleet, settings: &Settings, dt: f32) {
    let dx = settings.alien_speed_factor * fleet.direction * dt;
    for alien in &mut fleet.aliens {
        alien.pos.x += dx;
    }
}
