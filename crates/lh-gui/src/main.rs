//! Liahona desktop GUI: macroquad entry point.
//!
//! Owns the screen stack and the frame loop. Each frame measures the window,
//! fires due session timers, updates the top screen, steps the particle
//! field, and draws every screen bottom to top so overlays sit on the orb.

use lh_core::{JsonFileStore, LanguageSet};
use lh_engine::Viewport;
use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use lh_gui::app::AppState;
use lh_gui::screen::orb::OrbScreen;
use lh_gui::screen::settings::SettingsScreen;
use lh_gui::screen::{Screen, ScreenId, Transition};
use lh_gui::theme::{WINDOW_H, WINDOW_W, palette};

/// Create a screen instance for a given screen id.
fn make_screen(id: ScreenId, app: &AppState) -> Box<dyn Screen> {
    match id {
        ScreenId::Orb => Box::new(OrbScreen::new()),
        ScreenId::Settings => Box::new(SettingsScreen::new(app)),
    }
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Liahona".to_owned(),
        window_width: WINDOW_W,
        window_height: WINDOW_H,
        window_resizable: true,
        ..Default::default()
    }
}

fn open_store(language_set: LanguageSet) -> Option<JsonFileStore> {
    // Parse CLI args: --settings <path>
    let args: Vec<String> = std::env::args().collect();
    if let Some(path) = args.windows(2).find(|w| w[0] == "--settings").map(|w| &w[1]) {
        return Some(JsonFileStore::new(path, language_set));
    }
    match JsonFileStore::at_default_path(language_set) {
        Ok(store) => Some(store),
        Err(e) => {
            tracing::error!(error = %e, "cannot locate a settings file; pass --settings <path>");
            None
        }
    }
}

fn current_viewport() -> Viewport {
    Viewport::new(screen_width(), screen_height())
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    tracing::info!("Starting Liahona");

    let Some(store) = open_store(LanguageSet::from_env()) else {
        return;
    };
    let mut app = AppState::new(store, current_viewport());

    let mut screens: Vec<Box<dyn Screen>> = vec![make_screen(ScreenId::Orb, &app)];

    loop {
        app.tick(current_viewport());

        if let Some(screen) = screens.last_mut() {
            match screen.update(&mut app) {
                Transition::Push(id) => screens.push(make_screen(id, &app)),
                Transition::Pop => {
                    screens.pop();
                }
                Transition::None => {}
            }
        }

        clear_background(palette::NIGHT);
        for screen in &screens {
            screen.draw(&app);
        }

        if screens.is_empty() {
            break;
        }

        next_frame().await;
    }
}
