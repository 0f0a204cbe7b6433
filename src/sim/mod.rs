//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (formation order, bullet fire order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod fleet;
pub mod powerup;
pub mod rect;
pub mod state;
pub mod tick;

pub use fleet::FleetLayout;
pub use rect::Rect;
pub use state::{
    Alien, Bullet, Fleet, GameEvent, GamePhase, GameState, PowerUp, PowerUpKind, Ship, TickInput,
};
pub use tick::{start_new_game, tick};
