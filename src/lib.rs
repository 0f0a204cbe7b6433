//! Alien Invasion - a Space Invaders variant
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, fleet, collisions, tick)
//! - `settings`: Tunable difficulty model
//! - `stats`: Session progress (score, lives, level, shield)
//! - `persistence`: Save/load of progress records
//! - `platform`: Collaborator traits for rendering, audio and assets
//! - `render`: Maps final tick state to renderer calls

pub mod persistence;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod stats;

pub use settings::Settings;
pub use stats::GameStats;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep (60 Hz, one logical frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Ship sprite bounding box
    pub const SHIP_SIZE: Vec2 = Vec2::new(60.0, 48.0);
    /// Alien sprite bounding box
    pub const ALIEN_SIZE: Vec2 = Vec2::new(60.0, 58.0);
    /// Bullet bounding box
    pub const BULLET_SIZE: Vec2 = Vec2::new(3.0, 15.0);
    /// Power-up bounding box
    pub const POWERUP_SIZE: Vec2 = Vec2::new(24.0, 24.0);

    /// Downward drift speed of dropped power-ups (pixels/sec)
    pub const POWERUP_FALL_SPEED: f32 = 120.0;

    /// Radius of the shield circle drawn around the ship
    pub const SHIELD_RADIUS: f32 = 50.0;

    /// Real-time pause after losing a life (seconds)
    pub const HIT_PAUSE_SECS: f32 = 1.0;
}
