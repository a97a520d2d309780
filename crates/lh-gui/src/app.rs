//! Application state shared across all screens.

use lh_core::JsonFileStore;
use lh_engine::{Effect, EngineConfig, Event, MonotonicClock, Session, Viewport};

use crate::host::{HostView, SystemLauncher};

/// Shared application state accessible by all screens.
pub struct AppState {
    /// The engine session.
    pub session: Session<JsonFileStore>,
    /// What the session has told the host to show.
    pub view: HostView,
    clock: MonotonicClock,
    launcher: SystemLauncher,
    viewport: Viewport,
}

impl AppState {
    /// Create the app around a settings store and apply the initial state.
    pub fn new(store: JsonFileStore, viewport: Viewport) -> Self {
        let config = EngineConfig::default().with_field_seed(rand::random());
        let session = Session::new(store, config, viewport).with_haptics(false);
        let mut app = Self {
            session,
            view: HostView::default(),
            clock: MonotonicClock::new(),
            launcher: SystemLauncher,
            viewport,
        };
        let initial = app.session.start();
        app.apply(initial);
        app
    }

    /// Milliseconds since startup.
    pub fn now(&self) -> f64 {
        self.clock.now_ms()
    }

    /// Feed an event to the session and apply what comes back.
    pub fn dispatch(&mut self, event: Event) {
        let now = self.now();
        let effects = self.session.handle(event, now);
        self.apply(effects);
    }

    /// Fire due timers and step the particle field.
    pub fn tick(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            self.viewport = viewport;
            self.dispatch(Event::Resize(viewport));
        }
        let now = self.now();
        let effects = self.session.advance(now);
        self.apply(effects);
        self.session.frame();
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        let mut pending = self.view.apply(effects, &mut self.launcher);
        while let Some(event) = pending.pop() {
            let now = self.now();
            let effects = self.session.handle(event, now);
            pending.extend(self.view.apply(effects, &mut self.launcher));
        }
    }
}
