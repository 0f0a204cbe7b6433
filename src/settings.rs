//! Game settings and difficulty model
//!
//! Holds the static screen parameters plus the dynamic factors that scale up
//! with each cleared fleet. Components receive a `&Settings` per call rather
//! than reaching for shared global state.

use serde::{Deserialize, Serialize};

/// Tunable game parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Dynamic difficulty (scaled by increase_speed) ===
    /// Ship horizontal speed (pixels/sec)
    pub ship_speed_factor: f32,
    /// Bullet upward speed (pixels/sec)
    pub bullet_speed_factor: f32,
    /// Fleet horizontal speed (pixels/sec)
    pub alien_speed_factor: f32,
    /// Score awarded per destroyed alien
    pub alien_points: u32,

    // === Fleet ===
    /// Vertical descent applied on an edge bounce (pixels)
    pub fleet_drop_speed: f32,

    // === Limits ===
    /// Maximum concurrent bullets
    pub bullet_allowed: usize,
    /// Maximum lives (starting count and life power-up cap)
    pub ship_limit: u32,

    // === Progression ===
    /// Multiplier applied to speed factors per level
    pub speedup_scale: f32,
    /// Multiplier applied to alien_points per level
    pub score_scale: f32,

    // === Power-ups ===
    /// Per-kill probability of dropping a power-up
    pub bonus_chance: f64,
    /// Shield lifetime (seconds)
    pub shield_duration: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1200.0,
            screen_height: 800.0,

            ship_speed_factor: BASE_SHIP_SPEED,
            bullet_speed_factor: BASE_BULLET_SPEED,
            alien_speed_factor: BASE_ALIEN_SPEED,
            alien_points: BASE_ALIEN_POINTS,

            fleet_drop_speed: 10.0,

            bullet_allowed: 3,
            ship_limit: 3,

            speedup_scale: 1.1,
            score_scale: 1.5,

            bonus_chance: 0.1,
            shield_duration: 5.0,
        }
    }
}

/// Session-start baselines for the dynamic factors
const BASE_SHIP_SPEED: f32 = 350.0;
const BASE_BULLET_SPEED: f32 = 600.0;
const BASE_ALIEN_SPEED: f32 = 60.0;
const BASE_ALIEN_POINTS: u32 = 50;

impl Settings {
    /// Reset the dynamic factors to their session-start baseline.
    ///
    /// Called when a brand-new game starts, never on a respawn after a lost
    /// life.
    pub fn initialize_dynamic_settings(&mut self) {
        self.ship_speed_factor = BASE_SHIP_SPEED;
        self.bullet_speed_factor = BASE_BULLET_SPEED;
        self.alien_speed_factor = BASE_ALIEN_SPEED;
        self.alien_points = BASE_ALIEN_POINTS;
    }

    /// Step up the difficulty for the next level.
    ///
    /// Speed factors and the per-kill point value only ever grow, so the
    /// scaling is monotonically non-decreasing across a session.
    pub fn increase_speed(&mut self) {
        self.ship_speed_factor *= self.speedup_scale;
        self.bullet_speed_factor *= self.speedup_scale;
        self.alien_speed_factor *= self.speedup_scale;
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increase_speed_monotonic() {
        let mut settings = Settings::default();
        let mut prev = settings.clone();
        for _ in 0..10 {
            settings.increase_speed();
            assert!(settings.ship_speed_factor >= prev.ship_speed_factor);
            assert!(settings.bullet_speed_factor >= prev.bullet_speed_factor);
            assert!(settings.alien_speed_factor >= prev.alien_speed_factor);
            assert!(settings.alien_points >= prev.alien_points);
            prev = settings.clone();
        }
    }

    #[test]
    fn test_initialize_resets_baseline() {
        let mut settings = Settings::default();
        let baseline = settings.clone();
        settings.increase_speed();
        settings.increase_speed();
        settings.initialize_dynamic_settings();

        assert_eq!(settings.ship_speed_factor, baseline.ship_speed_factor);
        assert_eq!(settings.bullet_speed_factor, baseline.bullet_speed_factor);
        assert_eq!(settings.alien_speed_factor, baseline.alien_speed_factor);
        assert_eq!(settings.alien_points, baseline.alien_points);
    }
}
