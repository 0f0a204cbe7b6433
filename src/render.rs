//! Frame presentation
//!
//! Maps the final tick state onto the renderer collaborator: sprites for the
//! entities, an untextured rect per bullet, the shield circle while active,
//! and the four-anchor HUD.

use crate::consts::SHIELD_RADIUS;
use crate::platform::{AssetLoader, HudAnchor, ImageHandle, Renderer};
use crate::settings::Settings;
use crate::sim::{GameState, PowerUpKind};

/// Images the core expects the driver to have loaded
#[derive(Debug, Clone, Copy)]
pub struct SpriteBank {
    pub ship: ImageHandle,
    pub alien: ImageHandle,
    pub powerup_life: ImageHandle,
    pub powerup_shield: ImageHandle,
}

impl SpriteBank {
    pub fn load(assets: &mut impl AssetLoader) -> Self {
        Self {
            ship: assets.image("spaceship"),
            alien: assets.image("alienship"),
            powerup_life: assets.image("powerup_life"),
            powerup_shield: assets.image("powerup_shield"),
        }
    }
}

/// Draw one frame of the current state.
///
/// Bullets go down first so ship and aliens render over them.
pub fn draw_frame(
    renderer: &mut impl Renderer,
    sprites: &SpriteBank,
    state: &GameState,
    settings: &Settings,
) {
    for bullet in &state.bullets {
        renderer.draw_rect(bullet.rect());
    }

    let ship_rect = state.ship.rect(settings);
    renderer.draw_entity(sprites.ship, ship_rect);

    if state.stats.shield_active() {
        renderer.draw_circle(ship_rect.center(), SHIELD_RADIUS);
    }

    for alien in &state.fleet.aliens {
        renderer.draw_entity(sprites.alien, alien.rect());
    }

    for powerup in &state.powerups {
        let image = match powerup.kind {
            PowerUpKind::Life => sprites.powerup_life,
            PowerUpKind::Shield => sprites.powerup_shield,
        };
        renderer.draw_entity(image, powerup.rect());
    }

    renderer.draw_text(
        &format!("Ships: {}", state.stats.ships_left),
        HudAnchor::TopLeft,
    );
    renderer.draw_text(
        &format!("Level: {}", state.stats.level),
        HudAnchor::TopRight,
    );
    renderer.draw_text(
        &format!("Score: {}", state.stats.score),
        HudAnchor::BelowTopRight,
    );
    renderer.draw_text(
        &format!("Best: {}", state.stats.high_score),
        HudAnchor::TopCenter,
    );
}
