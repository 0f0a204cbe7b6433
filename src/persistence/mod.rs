//! Save/load of session progress
//!
//! One JSON record of exactly eight fields: the four stats values plus the
//! four dynamic difficulty values, so restoring a save also restores the
//! in-progress difficulty. A record is parsed in full before anything is
//! applied; a bad or missing file leaves the in-memory state untouched.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::Settings;
use crate::stats::GameStats;

/// Default save file name, resolved against the working directory.
pub const DEFAULT_SAVE_FILE: &str = "savegame.json";

/// Persistence failures. `NotFound` is recovered locally by callers; the
/// rest surface to the driver as log lines.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("no save file at the given path")]
    NotFound,
    #[error("save file i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("save file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The persisted record. Field names are part of the on-disk format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub ships_left: u32,
    pub score: u64,
    pub level: u32,
    pub high_score: u64,
    pub ship_speed_factor: f32,
    pub bullet_speed_factor: f32,
    pub alien_speed_factor: f32,
    pub alien_points: u32,
}

impl SaveRecord {
    /// Snapshot the current session.
    pub fn capture(stats: &GameStats, settings: &Settings) -> Self {
        Self {
            ships_left: stats.ships_left,
            score: stats.score,
            level: stats.level,
            high_score: stats.high_score,
            ship_speed_factor: settings.ship_speed_factor,
            bullet_speed_factor: settings.bullet_speed_factor,
            alien_speed_factor: settings.alien_speed_factor,
            alien_points: settings.alien_points,
        }
    }

    /// Overwrite the live session from this record. All eight fields land
    /// together; the caller has already fully parsed the record, so a
    /// partial application cannot happen.
    pub fn apply(&self, stats: &mut GameStats, settings: &mut Settings) {
        stats.ships_left = self.ships_left;
        stats.score = self.score;
        stats.level = self.level;
        stats.high_score = self.high_score;
        settings.ship_speed_factor = self.ship_speed_factor;
        settings.bullet_speed_factor = self.bullet_speed_factor;
        settings.alien_speed_factor = self.alien_speed_factor;
        settings.alien_points = self.alien_points;
    }
}

/// Write the current progress to `path`.
pub fn save_game(path: &Path, stats: &GameStats, settings: &Settings) -> Result<(), SaveError> {
    let record = SaveRecord::capture(stats, settings);
    let json = serde_json::to_vec_pretty(&record)?;
    std::fs::write(path, json)?;
    log::info!("game saved: {record:?}");
    Ok(())
}

/// Restore progress from `path` into the live stats and settings.
///
/// A missing file yields `SaveError::NotFound` and a malformed one
/// `SaveError::Malformed`; in both cases nothing in memory changes.
pub fn load_game(
    path: &Path,
    stats: &mut GameStats,
    settings: &mut Settings,
) -> Result<(), SaveError> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            SaveError::NotFound
        } else {
            SaveError::Io(e)
        }
    })?;

    let record: SaveRecord = serde_json::from_slice(&bytes)?;
    record.apply(stats, settings);
    log::info!("game loaded: {record:?}");
    Ok(())
}
