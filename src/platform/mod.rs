//! Platform collaborator traits
//!
//! The simulation core knows nothing about windows, mixers or image
//! decoders. It talks to them through these narrow interfaces; the real
//! implementations live outside this crate, and the no-op versions here
//! back the headless driver and the tests.

use glam::Vec2;

use crate::sim::{GameEvent, Rect};

/// Opaque handle to a loaded image, issued by the asset loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHandle(pub u32);

/// Opaque handle to a loaded sound, issued by the asset loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundId(pub u32);

/// Fixed HUD text anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudAnchor {
    /// Lives counter
    TopLeft,
    /// Level counter
    TopRight,
    /// Score, right-aligned under the level
    BelowTopRight,
    /// High score
    TopCenter,
}

/// Drawing surface for one frame
pub trait Renderer {
    fn draw_entity(&mut self, image: ImageHandle, rect: Rect);
    /// Untextured fill, used for bullets
    fn draw_rect(&mut self, rect: Rect);
    /// Shield visualization around the ship
    fn draw_circle(&mut self, center: Vec2, radius: f32);
    fn draw_text(&mut self, text: &str, anchor: HudAnchor);
}

/// Fire-and-forget sound playback
pub trait Audio {
    fn play(&mut self, sound: SoundId);
}

/// Resolves logical asset names to handles, independent of the working
/// directory.
pub trait AssetLoader {
    fn image(&mut self, name: &str) -> ImageHandle;
    fn sound(&mut self, name: &str) -> SoundId;
}

/// Sounds the core expects the driver to have loaded
#[derive(Debug, Clone, Copy)]
pub struct SoundBank {
    pub laser: SoundId,
    pub explosion: SoundId,
    pub life_lost: SoundId,
    pub game_over: SoundId,
}

impl SoundBank {
    pub fn load(assets: &mut impl AssetLoader) -> Self {
        Self {
            laser: assets.sound("laser"),
            explosion: assets.sound("explosion"),
            life_lost: assets.sound("life_lost"),
            game_over: assets.sound("game_over"),
        }
    }

    /// Map one tick's events onto the mixer.
    pub fn play_events(&self, audio: &mut impl Audio, events: &[GameEvent]) {
        for event in events {
            let sound = match event {
                GameEvent::BulletFired => self.laser,
                GameEvent::AlienDestroyed => self.explosion,
                GameEvent::LifeLost => self.life_lost,
                GameEvent::GameOver => self.game_over,
            };
            audio.play(sound);
        }
    }
}

/// Renderer that discards every call; used for headless runs.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_entity(&mut self, _image: ImageHandle, _rect: Rect) {}
    fn draw_rect(&mut self, _rect: Rect) {}
    fn draw_circle(&mut self, _center: Vec2, _radius: f32) {}
    fn draw_text(&mut self, _text: &str, _anchor: HudAnchor) {}
}

/// Audio sink that swallows playback requests.
#[derive(Debug, Default)]
pub struct NullAudio;

impl Audio for NullAudio {
    fn play(&mut self, _sound: SoundId) {}
}

/// Asset loader that hands out sequential handles without touching disk.
#[derive(Debug, Default)]
pub struct NullAssets {
    next: u32,
}

impl AssetLoader for NullAssets {
    fn image(&mut self, _name: &str) -> ImageHandle {
        self.next += 1;
        ImageHandle(self.next)
    }

    fn sound(&mut self, _name: &str) -> SoundId {
        self.next += 1;
        SoundId(self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingAudio(Vec<SoundId>);

    impl Audio for RecordingAudio {
        fn play(&mut self, sound: SoundId) {
            self.0.push(sound);
        }
    }

    #[test]
    fn test_events_map_to_sounds() {
        let mut assets = NullAssets::default();
        let bank = SoundBank::load(&mut assets);
        let mut audio = RecordingAudio(Vec::new());

        bank.play_events(
            &mut audio,
            &[
                GameEvent::BulletFired,
                GameEvent::AlienDestroyed,
                GameEvent::GameOver,
            ],
        );

        assert_eq!(audio.0, vec![bank.laser, bank.explosion, bank.game_over]);
    }
}
