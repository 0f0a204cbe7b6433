//! Game state and core simulation types
//!
//! Every entity the tick loop touches lives here. Collections are owned by
//! `GameState` and mutated only inside the tick's sequential phases, so no
//! component ever races another for removal.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;
use crate::settings::Settings;
use crate::stats::GameStats;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GamePhase {
    /// No active game; move/fire input is ignored
    Inactive,
    /// Normal play
    Active,
    /// Post-hit breather; the whole tick is frozen until it elapses
    Paused { remaining: f32 },
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Ship {
    /// Continuous horizontal center; y is pinned to the screen bottom
    pub center_x: f32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        Self {
            center_x: settings.screen_width / 2.0,
            moving_left: false,
            moving_right: false,
        }
    }

    pub fn rect(&self, settings: &Settings) -> Rect {
        Rect::new(
            Vec2::new(
                self.center_x - SHIP_SIZE.x / 2.0,
                settings.screen_height - SHIP_SIZE.y,
            ),
            SHIP_SIZE,
        )
    }

    /// Apply movement intent, keeping the sprite on screen.
    pub fn update(&mut self, settings: &Settings, dt: f32) {
        if self.moving_right {
            self.center_x += settings.ship_speed_factor * dt;
        }
        if self.moving_left {
            self.center_x -= settings.ship_speed_factor * dt;
        }
        let half = SHIP_SIZE.x / 2.0;
        self.center_x = self.center_x.clamp(half, settings.screen_width - half);
    }

    /// Recenter at the bottom of the screen (respawn/new game).
    pub fn center_ship(&mut self, settings: &Settings) {
        self.center_x = settings.screen_width / 2.0;
    }
}

/// A player projectile, travelling straight up
#[derive(Debug, Clone)]
pub struct Bullet {
    /// Top-left corner
    pub pos: Vec2,
}

impl Bullet {
    /// Spawn at the ship's nose.
    pub fn fired_from(ship: &Ship, settings: &Settings) -> Self {
        let ship_rect = ship.rect(settings);
        Self {
            pos: Vec2::new(ship.center_x - BULLET_SIZE.x / 2.0, ship_rect.top() - BULLET_SIZE.y),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, BULLET_SIZE)
    }
}

/// A single fleet member
#[derive(Debug, Clone)]
pub struct Alien {
    /// Top-left corner; x is continuous, y only changes on a fleet drop
    pub pos: Vec2,
}

impl Alien {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, ALIEN_SIZE)
    }
}

/// Power-up kinds, chosen uniformly at drop time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Restores one life, capped at the configured maximum
    Life,
    /// Timed invulnerability
    Shield,
}

/// A falling pickup
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub pos: Vec2,
}

impl PowerUp {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, POWERUP_SIZE)
    }
}

/// The enemy formation: the alien set plus the state every member shares.
///
/// Direction and speed are fleet-wide, never per-alien, so an edge bounce is
/// an all-or-nothing reaction regardless of which member triggered it.
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    pub aliens: Vec<Alien>,
    /// Horizontal travel direction, always -1.0 or +1.0
    pub direction: f32,
}

impl Fleet {
    pub fn is_cleared(&self) -> bool {
        self.aliens.is_empty()
    }
}

/// Observable happenings within a tick, consumed by the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BulletFired,
    AlienDestroyed,
    LifeLost,
    GameOver,
}

/// Input commands already resolved for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
    /// Play button / new-game command
    pub new_game: bool,
    pub save: bool,
    pub load: bool,
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducible power-up drops
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub fleet: Fleet,
    pub powerups: Vec<PowerUp>,
    pub stats: GameStats,
    /// Accumulated sim time (seconds); drives all timers
    pub elapsed: f32,
}

impl GameState {
    /// Create a fresh session. The fleet is spawned immediately so it is
    /// visible behind the start prompt, matching play starting as Inactive.
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Inactive,
            ship: Ship::new(settings),
            bullets: Vec::new(),
            fleet: Fleet::default(),
            powerups: Vec::new(),
            stats: GameStats::new(settings),
            elapsed: 0.0,
        };
        super::fleet::spawn_fleet(&mut state.fleet, settings);
        state
    }
}
