//! Session progress tracking
//!
//! Score, lives, level and the timed shield effect. The high score survives
//! `reset_stats` so it carries across games within a session; everything else
//! re-baselines when a new game starts.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Mutable per-session game statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStats {
    /// Lives remaining
    pub ships_left: u32,
    /// Current score
    pub score: u64,
    /// Best score seen this session (>= score after every engine pass)
    pub high_score: u64,
    /// Current level (starts at 1)
    pub level: u32,
    /// Sim-time (seconds) at which the shield was activated, if active.
    /// `Some` implies the shield is up, so the active-implies-timestamp
    /// invariant holds by construction.
    pub shield_started: Option<f32>,
}

impl GameStats {
    pub fn new(settings: &Settings) -> Self {
        Self {
            ships_left: settings.ship_limit,
            score: 0,
            high_score: 0,
            level: 1,
            shield_started: None,
        }
    }

    /// Re-initialize everything that changes during play.
    ///
    /// The high score is deliberately left alone.
    pub fn reset_stats(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
        self.shield_started = None;
    }

    pub fn shield_active(&self) -> bool {
        self.shield_started.is_some()
    }

    /// Raise the shield, recording the current sim time.
    pub fn activate_shield(&mut self, now: f32) {
        self.shield_started = Some(now);
    }

    pub fn deactivate_shield(&mut self) {
        self.shield_started = None;
    }

    /// Drop the shield once its duration has elapsed.
    ///
    /// Polled every tick; expiry granularity is therefore the tick period.
    pub fn expire_shield(&mut self, now: f32, settings: &Settings) {
        if let Some(started) = self.shield_started
            && now - started > settings.shield_duration
        {
            self.shield_started = None;
        }
    }

    /// Fold the current score into the high score.
    pub fn check_high_score(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_keeps_high_score() {
        let settings = Settings::default();
        let mut stats = GameStats::new(&settings);
        stats.score = 500;
        stats.check_high_score();
        stats.reset_stats(&settings);

        assert_eq!(stats.score, 0);
        assert_eq!(stats.level, 1);
        assert_eq!(stats.ships_left, settings.ship_limit);
        assert_eq!(stats.high_score, 500);
    }

    #[test]
    fn test_shield_expiry_polling() {
        let settings = Settings::default();
        let mut stats = GameStats::new(&settings);

        stats.activate_shield(10.0);
        assert!(stats.shield_active());

        // Still inside the window
        stats.expire_shield(10.0 + settings.shield_duration, &settings);
        assert!(stats.shield_active());

        // Just past it
        stats.expire_shield(10.0 + settings.shield_duration + 0.1, &settings);
        assert!(!stats.shield_active());
    }

    #[test]
    fn test_high_score_never_decreases() {
        let settings = Settings::default();
        let mut stats = GameStats::new(&settings);
        stats.score = 300;
        stats.check_high_score();
        stats.score = 100;
        stats.check_high_score();
        assert_eq!(stats.high_score, 300);
    }
}
