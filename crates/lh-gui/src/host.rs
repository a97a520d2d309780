//! Applying session effects on the desktop.
//!
//! [`HostView`] holds everything the screens draw that the session decides:
//! status, language, orb offset, result card and settings visibility. Link
//! effects go through a [`Launcher`], so the view can be driven in tests
//! without opening anything.

use std::collections::BTreeSet;

use lh_core::{StatusKey, UiLanguage};
use lh_engine::{Effect, Event, ObserverId, Point, Visibility};

/// Opens URIs with the operating system.
pub trait Launcher {
    /// Hand `target` to its registered handler.
    fn launch(&mut self, target: &str) -> Result<(), String>;
}

/// Launches through the platform opener.
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&mut self, target: &str) -> Result<(), String> {
        open::that(target).map_err(|e| e.to_string())
    }
}

/// The result card contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    /// Localized book name.
    pub book_name: String,
    /// `chapter:verse`.
    pub reference: String,
}

/// Host-side state derived from effects.
#[derive(Debug, Clone)]
pub struct HostView {
    /// Current status line.
    pub status: StatusKey,
    /// Interface language.
    pub language: UiLanguage,
    /// Orb displacement from the viewport center.
    pub orb_offset: Point,
    /// Whether the orb is being held.
    pub active: bool,
    /// Result card, when showing.
    pub result: Option<ResultCard>,
    /// Whether the settings panel is showing.
    pub settings_visible: bool,
    watched: BTreeSet<ObserverId>,
}

impl Default for HostView {
    fn default() -> Self {
        Self {
            status: StatusKey::Focus,
            language: UiLanguage::default(),
            orb_offset: Point::default(),
            active: false,
            result: None,
            settings_visible: false,
            watched: BTreeSet::new(),
        }
    }
}

impl HostView {
    /// Apply effects in order. Returns events the host must feed back.
    ///
    /// A native link the platform accepted is reported as the page going
    /// hidden, since a desktop window gets no visibility signal of its own.
    pub fn apply(
        &mut self,
        effects: impl IntoIterator<Item = Effect>,
        launcher: &mut impl Launcher,
    ) -> Vec<Event> {
        let mut follow_up = Vec::new();
        for effect in effects {
            match effect {
                Effect::SetStatus(key) => self.status = key,
                Effect::SetOrbOffset { x, y } => self.orb_offset = Point::new(x, y),
                Effect::SetActive(active) => self.active = active,
                Effect::Vibrate(pattern) => {
                    tracing::debug!(pattern = ?pattern.0, "haptics unavailable on desktop");
                }
                Effect::ShowResult {
                    book_name,
                    reference,
                } => {
                    self.result = Some(ResultCard {
                        book_name,
                        reference,
                    });
                }
                Effect::HideResult => self.result = None,
                Effect::WatchVisibility(id) => {
                    self.watched.insert(id);
                }
                Effect::UnwatchVisibility(id) => {
                    self.watched.remove(&id);
                }
                Effect::Navigate(uri) => match launcher.launch(&uri) {
                    Ok(()) if !self.watched.is_empty() => {
                        follow_up.push(Event::Visibility(Visibility::Hidden));
                    }
                    Ok(()) => {}
                    Err(e) => {
                        tracing::debug!(%uri, error = %e, "no native handler, waiting for fallback");
                    }
                },
                Effect::OpenExternal(url) => {
                    if let Err(e) = launcher.launch(&url) {
                        tracing::warn!(%url, error = %e, "failed to open web page");
                    }
                }
                Effect::ShowSettings => self.settings_visible = true,
                Effect::HideSettings => self.settings_visible = false,
                Effect::ApplyLanguage(language) => self.language = language,
            }
        }
        follow_up
    }

    /// Number of visibility observers currently registered.
    pub fn watched(&self) -> usize {
        self.watched.len()
    }
}

#[cfg(test)]
mod tests {
    use lh_core::MemoryStore;
    use lh_engine::{EngineConfig, Session, Viewport};

    use super::*;

    #[derive(Default)]
    struct RecordingLauncher {
        opened: Vec<String>,
        refuse_native: bool,
    }

    impl Launcher for RecordingLauncher {
        fn launch(&mut self, target: &str) -> Result<(), String> {
            if self.refuse_native && target.starts_with("gospellibrary:") {
                return Err("no handler".into());
            }
            self.opened.push(target.to_string());
            Ok(())
        }
    }

    fn drawn_session() -> Session<MemoryStore> {
        let mut s = Session::new(
            MemoryStore::default(),
            EngineConfig::default(),
            Viewport::new(390.0, 844.0),
        )
        .with_haptics(false);
        s.handle(Event::PointerDown(Point::new(195.0, 422.0)), 0.0);
        s.handle(Event::PointerUp, 800.0);
        s
    }

    #[test]
    fn reveal_fills_result_card() {
        let mut s = drawn_session();
        let mut view = HostView::default();
        let mut launcher = RecordingLauncher::default();
        view.apply(s.advance(2000.0), &mut launcher);
        let card = view.result.clone().unwrap();
        assert_eq!(card.reference, s.selection().unwrap().reference());
    }

    #[test]
    fn accepted_native_link_reports_hidden() {
        let mut s = drawn_session();
        let mut view = HostView::default();
        let mut launcher = RecordingLauncher::default();
        let follow_up = view.apply(s.handle(Event::Open, 1000.0), &mut launcher);
        assert_eq!(follow_up, vec![Event::Visibility(Visibility::Hidden)]);
        assert_eq!(view.watched(), 1);

        for event in follow_up {
            view.apply(s.handle(event, 1001.0), &mut launcher);
        }
        assert_eq!(view.watched(), 0);
        view.apply(s.advance(10_000.0), &mut launcher);
        assert_eq!(launcher.opened.len(), 1);
        assert!(launcher.opened[0].starts_with("gospellibrary://"));
    }

    #[test]
    fn refused_native_link_falls_back_to_web() {
        let mut s = drawn_session();
        let mut view = HostView::default();
        let mut launcher = RecordingLauncher {
            refuse_native: true,
            ..RecordingLauncher::default()
        };
        assert!(view.apply(s.handle(Event::Open, 1000.0), &mut launcher).is_empty());
        view.apply(s.advance(2400.0), &mut launcher);
        assert_eq!(launcher.opened.len(), 1);
        assert!(launcher.opened[0].starts_with("https://www.churchofjesuschrist.org/"));
        assert_eq!(view.watched(), 0);
    }

    #[test]
    fn status_and_language_follow_effects() {
        let mut view = HostView::default();
        let mut launcher = RecordingLauncher::default();
        view.apply(
            [
                Effect::ApplyLanguage(UiLanguage::En),
                Effect::SetStatus(StatusKey::HoldLonger),
                Effect::SetOrbOffset { x: 3.0, y: -4.0 },
                Effect::ShowSettings,
            ],
            &mut launcher,
        );
        assert_eq!(view.language, UiLanguage::En);
        assert_eq!(view.status, StatusKey::HoldLonger);
        assert_eq!(view.orb_offset, Point::new(3.0, -4.0));
        assert!(view.settings_visible);
    }
}
