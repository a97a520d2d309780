//! The session controller.
//!
//! A [`Session`] owns every piece of mutable state behind the orb: settings,
//! catalog, gesture machine, particle field, timers, haptic loop, navigation
//! dispatcher and the live selection. Hosts feed it [`Event`]s with a
//! monotonic timestamp and apply the [`Effect`]s it returns.

use lh_core::{Catalog, Links, Selection, Settings, SettingsStore, StatusKey, select};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::event::{Effect, Event, TimerKind};
use crate::field::{FieldMode, ParticleField};
use crate::geometry::{Point, Viewport};
use crate::gesture::{GestureMachine, GesturePhase, Release};
use crate::haptics::{HapticLoop, HapticPattern};
use crate::navigation::{NavigationDispatcher, NavigationOutcome};
use crate::timer::{TimerHandle, TimerQueue};

/// Single-threaded controller driven by host events.
pub struct Session<S: SettingsStore> {
    store: S,
    config: EngineConfig,
    settings: Settings,
    catalog: Catalog,
    gesture: GestureMachine,
    field: ParticleField,
    timers: TimerQueue<TimerKind>,
    pulse: HapticLoop,
    navigation: NavigationDispatcher,
    selection: Option<Selection>,
    hint_timer: Option<TimerHandle>,
    reveal_timer: Option<TimerHandle>,
    supports_haptics: bool,
    settings_open: bool,
    result_visible: bool,
    last_outcome: Option<NavigationOutcome>,
    draws: u64,
}

impl<S: SettingsStore> std::fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("phase", self.gesture.phase())
            .field("catalog", &self.catalog.len())
            .field("selection", &self.selection)
            .field("timers", &self.timers.len())
            .field("draws", &self.draws)
            .finish()
    }
}

impl<S: SettingsStore> Session<S> {
    /// Load settings from `store` and build the catalog.
    pub fn new(store: S, config: EngineConfig, viewport: Viewport) -> Self {
        let settings = store.load();
        let catalog = Catalog::build(&settings.content);
        let gesture = GestureMachine::new(config.min_hold_ms, &config.field);
        let field = ParticleField::new(config.field.clone(), viewport, config.field_seed);
        tracing::debug!(
            ui = %settings.ui_language,
            books = catalog.len(),
            "session created"
        );
        Self {
            store,
            config,
            settings,
            catalog,
            gesture,
            field,
            timers: TimerQueue::new(),
            pulse: HapticLoop::default(),
            navigation: NavigationDispatcher::new(),
            selection: None,
            hint_timer: None,
            reveal_timer: None,
            supports_haptics: true,
            settings_open: false,
            result_visible: false,
            last_outcome: None,
            draws: 0,
        }
    }

    /// Declare whether the host can vibrate. Without haptics no pattern is
    /// emitted and the pulse loop never starts.
    pub fn with_haptics(mut self, supported: bool) -> Self {
        self.supports_haptics = supported;
        self
    }

    /// Effects that put a fresh host into the initial state.
    pub fn start(&self) -> Vec<Effect> {
        vec![
            Effect::ApplyLanguage(self.settings.ui_language),
            Effect::SetStatus(StatusKey::Focus),
        ]
    }

    /// Handle one event at `now` (ms). Due timers fire first.
    pub fn handle(&mut self, event: Event, now: f64) -> Vec<Effect> {
        let mut effects = self.advance(now);
        match event {
            Event::PointerDown(at) => self.on_press(at, now, &mut effects),
            Event::PointerMove(to) => self.on_move(to, &mut effects),
            Event::PointerUp | Event::PointerCancel => self.on_release(now, &mut effects),
            Event::Resize(viewport) => self.field.resize(viewport),
            Event::Visibility(visibility) => {
                let (outcome, settled) = self.navigation.on_visibility(visibility, &mut self.timers);
                self.record_outcome(outcome);
                effects.extend(settled);
            }
            Event::Dismiss => self.on_dismiss(&mut effects),
            Event::Open => self.on_open(now, &mut effects),
            Event::OpenSettings => {
                if !self.settings_open && !self.gesture.is_holding() {
                    self.settings_open = true;
                    effects.push(Effect::ShowSettings);
                }
            }
            Event::CloseSettings => {
                if self.settings_open {
                    self.settings_open = false;
                    effects.push(Effect::HideSettings);
                }
            }
            Event::SaveSettings {
                ui_language,
                content,
            } => {
                self.settings = Settings {
                    ui_language,
                    content,
                };
                if let Err(err) = self.store.save(&self.settings) {
                    tracing::warn!(error = %err, "failed to save settings");
                }
                self.catalog = Catalog::build(&self.settings.content);
                tracing::info!(ui = %ui_language, books = self.catalog.len(), "settings applied");
                effects.push(Effect::ApplyLanguage(ui_language));
                if !self.gesture.is_holding() && !self.result_visible {
                    effects.push(Effect::SetStatus(StatusKey::Focus));
                }
                if self.settings_open {
                    self.settings_open = false;
                    effects.push(Effect::HideSettings);
                }
            }
        }
        effects
    }

    /// Fire every timer due at `now`, in deadline order.
    pub fn advance(&mut self, now: f64) -> Vec<Effect> {
        let mut effects = Vec::new();
        while let Some((handle, kind)) = self.timers.pop_due(now) {
            match kind {
                TimerKind::HapticPulse => effects.push(Effect::Vibrate(HapticPattern::PULSE)),
                TimerKind::HintExpired => {
                    self.hint_timer = None;
                    if self.gesture.hint_expired() {
                        effects.push(Effect::SetStatus(StatusKey::Focus));
                    }
                }
                TimerKind::Reveal => {
                    self.reveal_timer = None;
                    self.reveal(&mut effects);
                }
                TimerKind::NavigationFallback => {
                    let (outcome, settled) = self.navigation.on_fallback(handle);
                    self.record_outcome(outcome);
                    effects.extend(settled);
                }
            }
        }
        effects
    }

    /// Step the particle field by one frame.
    pub fn frame(&mut self) {
        self.field.step();
    }

    fn on_press(&mut self, at: Point, now: f64, effects: &mut Vec<Effect>) {
        if self.settings_open || !self.gesture.press(at, now) {
            return;
        }
        if let Some(hint) = self.hint_timer.take() {
            self.timers.cancel(hint);
        }
        self.selection = None;
        self.field.set_mode(FieldMode::Attraction);
        if self.supports_haptics {
            effects.push(Effect::Vibrate(HapticPattern::PRESS));
            self.pulse.start(
                &mut self.timers,
                now,
                self.config.pulse_interval_ms,
                TimerKind::HapticPulse,
            );
        }
        effects.push(Effect::SetActive(true));
        effects.push(Effect::SetStatus(StatusKey::Receiving));
        tracing::debug!(x = at.x, y = at.y, "press started");
    }

    fn on_move(&mut self, to: Point, effects: &mut Vec<Effect>) {
        let Some(movement) = self.gesture.movement(to, self.field.viewport()) else {
            return;
        };
        self.field.feed_intensity(movement.intensity);
        effects.push(Effect::SetOrbOffset {
            x: movement.orb_offset.x,
            y: movement.orb_offset.y,
        });
    }

    fn on_release(&mut self, now: f64, effects: &mut Vec<Effect>) {
        let Some(release) = self.gesture.release(now) else {
            return;
        };
        self.pulse.stop(&mut self.timers);
        self.field.set_mode(FieldMode::Ambient);
        effects.push(Effect::SetActive(false));
        effects.push(Effect::SetOrbOffset { x: 0.0, y: 0.0 });

        match release {
            Release::Rejected { duration } => {
                tracing::debug!(duration, "press too short");
                effects.push(Effect::SetStatus(StatusKey::HoldLonger));
                self.hint_timer = Some(
                    self.timers
                        .schedule_once(now + self.config.hint_ms, TimerKind::HintExpired),
                );
            }
            Release::Settled(reading) => {
                let selection = select(&self.catalog, reading);
                self.draws += 1;
                tracing::info!(
                    seed = reading.seed(),
                    selection = %selection,
                    "selection drawn"
                );
                self.selection = Some(selection);
                self.reveal_timer = Some(
                    self.timers
                        .schedule_once(now + self.config.reveal_delay_ms, TimerKind::Reveal),
                );
            }
        }
    }

    fn reveal(&mut self, effects: &mut Vec<Effect>) {
        let Some(selection) = self.selection else {
            return;
        };
        if *self.gesture.phase() != GesturePhase::Settled {
            return;
        }
        self.result_visible = true;
        effects.push(Effect::ShowResult {
            book_name: selection.book.name.to_string(),
            reference: selection.reference(),
        });
        if self.supports_haptics {
            effects.push(Effect::Vibrate(HapticPattern::REVEAL));
        }
    }

    fn on_dismiss(&mut self, effects: &mut Vec<Effect>) {
        if !self.gesture.dismiss() {
            return;
        }
        if let Some(reveal) = self.reveal_timer.take() {
            self.timers.cancel(reveal);
        }
        self.selection = None;
        self.result_visible = false;
        effects.push(Effect::HideResult);
        effects.push(Effect::SetStatus(StatusKey::Focus));
        tracing::debug!("result dismissed");
    }

    fn on_open(&mut self, now: f64, effects: &mut Vec<Effect>) {
        let Some(selection) = self.selection else {
            tracing::debug!("open ignored without a selection");
            return;
        };
        effects.extend(self.navigation.open(
            selection.links(),
            &mut self.timers,
            now,
            self.config.fallback_ms,
        ));
    }

    fn record_outcome(&mut self, outcome: Option<NavigationOutcome>) {
        if outcome.is_some() {
            self.last_outcome = outcome;
        }
    }

    /// Links for the live selection.
    pub fn selection_links(&self) -> EngineResult<Links> {
        self.selection
            .map(|s| s.links())
            .ok_or(EngineError::NoSelection)
    }

    /// The most recent draw, if one is live.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// Settings in effect.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Books the current settings allow.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The particle field.
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    /// Where the press gesture stands.
    pub fn phase(&self) -> &GesturePhase {
        self.gesture.phase()
    }

    /// Engine tuning.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The backing settings store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the settings panel is open.
    pub fn is_settings_open(&self) -> bool {
        self.settings_open
    }

    /// Whether the result overlay is showing.
    pub fn is_result_visible(&self) -> bool {
        self.result_visible
    }

    /// Whether a navigation attempt is in flight.
    pub fn is_navigating(&self) -> bool {
        self.navigation.is_pending()
    }

    /// How the most recent navigation attempt ended.
    pub fn last_navigation(&self) -> Option<NavigationOutcome> {
        self.last_outcome
    }

    /// Pending timers of a kind.
    pub fn pending_timers(&self, kind: TimerKind) -> usize {
        self.timers.count_where(|k| *k == kind)
    }

    /// Earliest pending timer deadline.
    pub fn next_deadline(&self) -> Option<f64> {
        self.timers.next_deadline()
    }

    /// Number of selections drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}
