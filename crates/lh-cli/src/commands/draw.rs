use std::path::Path;

use colored::Colorize;
use lh_core::{SettingsStore, StatusKey, strings};
use lh_engine::{Effect, EngineConfig, Event, Point, Session, Viewport};
use miette::{IntoDiagnostic, Result, bail};

/// Logical size of the simulated screen.
const VIEWPORT: Viewport = Viewport::new(390.0, 844.0);

pub fn run(settings: Option<&Path>, hold_ms: f64, distance: f64, now: Option<f64>) -> Result<()> {
    if !hold_ms.is_finite() || hold_ms < 0.0 {
        bail!("--hold-ms must be a non-negative number, got {hold_ms}");
    }
    if !distance.is_finite() || distance < 0.0 {
        bail!("--distance must be a non-negative number, got {distance}");
    }
    let now = now.unwrap_or_else(|| chrono::Utc::now().timestamp_millis() as f64);

    let store = super::open_store(settings)?;
    let ui = store.load().ui_language;
    let config = EngineConfig::default();
    let reveal_at = now + config.reveal_delay_ms;
    let mut session = Session::new(store, config, VIEWPORT).with_haptics(false);

    let center = VIEWPORT.center();
    let start = now - hold_ms;
    let mut effects = session.handle(Event::PointerDown(center), start);
    // Pointer coordinates are f32, so travel beyond 2^24 px loses whole pixels.
    if distance > 0.0 {
        let to = Point::new(center.x + distance as f32, center.y);
        effects.extend(session.handle(Event::PointerMove(to), start));
    }
    effects.extend(session.handle(Event::PointerUp, now));
    effects.extend(session.advance(reveal_at));

    if effects.contains(&Effect::SetStatus(StatusKey::HoldLonger)) {
        bail!(
            "{} (held {hold_ms} ms, need at least {} ms)",
            strings::status_text(ui, StatusKey::HoldLonger),
            session.config().min_hold_ms
        );
    }

    let Some(selection) = session.selection() else {
        bail!("no verse was drawn");
    };
    let links = session.selection_links().into_diagnostic()?;

    println!("  {}", selection.to_string().bold());
    println!("  {}  {}", "native".dimmed(), links.native);
    println!("  {}     {}", "web".dimmed(), links.web);

    Ok(())
}
