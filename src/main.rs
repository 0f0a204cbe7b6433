//! Headless demo driver
//!
//! Runs the simulation with a scripted autopilot and no-op platform
//! collaborators, then prints the session result. Real front ends replace
//! the Null implementations and feed resolved key/mouse input instead.

use std::path::Path;

use alien_invasion::consts::SIM_DT;
use alien_invasion::persistence::{self, DEFAULT_SAVE_FILE, SaveError};
use alien_invasion::platform::{NullAssets, NullAudio, NullRenderer, SoundBank};
use alien_invasion::render::{SpriteBank, draw_frame};
use alien_invasion::settings::Settings;
use alien_invasion::sim::{self, GamePhase, GameState, TickInput};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut settings = Settings::default();
    let mut state = GameState::new(seed_from_clock(), &settings);

    let mut assets = NullAssets::default();
    let sprites = SpriteBank::load(&mut assets);
    let sounds = SoundBank::load(&mut assets);
    let mut renderer = NullRenderer;
    let mut audio = NullAudio;

    // Press the play button on the first frame
    let mut input = TickInput {
        new_game: true,
        ..Default::default()
    };

    let max_ticks = 60 * 60 * 5; // five simulated minutes
    for _ in 0..max_ticks {
        // Save/load are driver commands, not simulation state
        if input.save {
            if let Err(e) = persistence::save_game(
                Path::new(DEFAULT_SAVE_FILE),
                &state.stats,
                &settings,
            ) {
                log::warn!("save failed: {e}");
            }
        }
        if input.load {
            match persistence::load_game(
                Path::new(DEFAULT_SAVE_FILE),
                &mut state.stats,
                &mut settings,
            ) {
                Ok(()) | Err(SaveError::NotFound) => {}
                Err(e) => log::warn!("load failed: {e}"),
            }
        }

        let events = sim::tick(&mut state, &mut settings, &input, SIM_DT);
        sounds.play_events(&mut audio, &events);
        draw_frame(&mut renderer, &sprites, &state, &settings);

        if state.phase == GamePhase::Inactive {
            break;
        }
        input = autopilot(&state, &settings);
    }

    log::info!(
        "session over: score={} high_score={} level={} lives={}",
        state.stats.score,
        state.stats.high_score,
        state.stats.level,
        state.stats.ships_left
    );
}

/// Chase the lowest alien's column and fire continuously.
fn autopilot(state: &GameState, settings: &Settings) -> TickInput {
    let target = state
        .fleet
        .aliens
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|a| a.rect().center().x)
        .unwrap_or(settings.screen_width / 2.0);

    let dx = target - state.ship.center_x;
    TickInput {
        move_left: dx < -5.0,
        move_right: dx > 5.0,
        fire: true,
        ..Default::default()
    }
}

fn seed_from_clock() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
