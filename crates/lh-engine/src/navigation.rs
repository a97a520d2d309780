//! Native deep link with a timed web fallback.
//!
//! An open registers a visibility observer, arms the fallback timer and
//! navigates to the native URI. Whichever of "page hidden" or "timer fired"
//! comes first settles the attempt; both paths release the observer.

use lh_core::Links;

use crate::event::{Effect, TimerKind};
use crate::timer::{TimerHandle, TimerQueue};

/// Identifies one visibility observer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(pub u64);

/// Page visibility as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// The page is in front.
    Visible,
    /// The page went to the background.
    Hidden,
}

/// How an open attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// The native handler took over before the timer.
    NativeHandled,
    /// The timer fired first; the web page was opened.
    WebFallback,
    /// Superseded by a newer open.
    Abandoned,
}

#[derive(Debug, Clone)]
struct Pending {
    observer: ObserverId,
    timer: TimerHandle,
    links: Links,
}

/// Runs at most one open attempt at a time.
#[derive(Debug, Default)]
pub struct NavigationDispatcher {
    pending: Option<Pending>,
    next_observer: u64,
}

impl NavigationDispatcher {
    /// Create an idle dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an attempt. A still-pending attempt is abandoned first.
    pub fn open(
        &mut self,
        links: Links,
        timers: &mut TimerQueue<TimerKind>,
        now: f64,
        fallback_ms: f64,
    ) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(previous) = self.pending.take() {
            timers.cancel(previous.timer);
            effects.push(Effect::UnwatchVisibility(previous.observer));
            tracing::debug!(outcome = ?NavigationOutcome::Abandoned, "navigation settled");
        }

        let observer = ObserverId(self.next_observer);
        self.next_observer += 1;
        effects.push(Effect::WatchVisibility(observer));
        let timer = timers.schedule_once(now + fallback_ms, TimerKind::NavigationFallback);
        effects.push(Effect::Navigate(links.native.clone()));
        tracing::info!(uri = %links.native, "opening native link");

        self.pending = Some(Pending {
            observer,
            timer,
            links,
        });
        effects
    }

    /// Feed a visibility change. Only `Hidden` settles a pending attempt.
    pub fn on_visibility(
        &mut self,
        visibility: Visibility,
        timers: &mut TimerQueue<TimerKind>,
    ) -> (Option<NavigationOutcome>, Vec<Effect>) {
        if visibility != Visibility::Hidden {
            return (None, Vec::new());
        }
        let Some(pending) = self.pending.take() else {
            return (None, Vec::new());
        };
        timers.cancel(pending.timer);
        tracing::info!("native handler took over");
        (
            Some(NavigationOutcome::NativeHandled),
            vec![Effect::UnwatchVisibility(pending.observer)],
        )
    }

    /// Handle the fallback timer firing. Stale handles are ignored.
    pub fn on_fallback(&mut self, handle: TimerHandle) -> (Option<NavigationOutcome>, Vec<Effect>) {
        match self.pending.take() {
            Some(pending) if pending.timer == handle => {
                tracing::info!(url = %pending.links.web, "native link unanswered, opening web");
                (
                    Some(NavigationOutcome::WebFallback),
                    vec![
                        Effect::OpenExternal(pending.links.web),
                        Effect::UnwatchVisibility(pending.observer),
                    ],
                )
            }
            other => {
                self.pending = other;
                (None, Vec::new())
            }
        }
    }

    /// Whether an attempt is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Observer of the in-flight attempt.
    pub fn pending_observer(&self) -> Option<ObserverId> {
        self.pending.as_ref().map(|p| p.observer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> Links {
        Links {
            native: "gospellibrary://content/scriptures/bofm/alma/32?verse=21#p21".to_string(),
            web: "https://www.churchofjesuschrist.org/study/scriptures/bofm/alma/32.21?lang=eng#p21"
                .to_string(),
        }
    }

    #[test]
    fn open_watches_then_arms_then_navigates() {
        let mut timers = TimerQueue::new();
        let mut nav = NavigationDispatcher::new();
        let effects = nav.open(links(), &mut timers, 0.0, 1400.0);
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0], Effect::WatchVisibility(ObserverId(0)));
        assert!(matches!(&effects[1], Effect::Navigate(uri) if uri.starts_with("gospellibrary://")));
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.next_deadline(), Some(1400.0));
    }

    #[test]
    fn hidden_before_timer_cancels_fallback() {
        let mut timers = TimerQueue::new();
        let mut nav = NavigationDispatcher::new();
        nav.open(links(), &mut timers, 0.0, 1400.0);
        let (outcome, effects) = nav.on_visibility(Visibility::Hidden, &mut timers);
        assert_eq!(outcome, Some(NavigationOutcome::NativeHandled));
        assert_eq!(effects, vec![Effect::UnwatchVisibility(ObserverId(0))]);
        assert!(timers.is_empty());
        assert!(!nav.is_pending());
    }

    #[test]
    fn timer_first_opens_web() {
        let mut timers = TimerQueue::new();
        let mut nav = NavigationDispatcher::new();
        nav.open(links(), &mut timers, 0.0, 1400.0);
        let (handle, kind) = timers.pop_due(1400.0).unwrap();
        assert_eq!(kind, TimerKind::NavigationFallback);
        let (outcome, effects) = nav.on_fallback(handle);
        assert_eq!(outcome, Some(NavigationOutcome::WebFallback));
        assert!(matches!(&effects[0], Effect::OpenExternal(url) if url.starts_with("https://")));
        assert_eq!(effects[1], Effect::UnwatchVisibility(ObserverId(0)));
        assert!(!nav.is_pending());
    }

    #[test]
    fn visible_is_ignored() {
        let mut timers = TimerQueue::new();
        let mut nav = NavigationDispatcher::new();
        nav.open(links(), &mut timers, 0.0, 1400.0);
        let (outcome, effects) = nav.on_visibility(Visibility::Visible, &mut timers);
        assert!(outcome.is_none());
        assert!(effects.is_empty());
        assert!(nav.is_pending());
    }

    #[test]
    fn hidden_after_settle_is_ignored() {
        let mut timers = TimerQueue::new();
        let mut nav = NavigationDispatcher::new();
        nav.open(links(), &mut timers, 0.0, 1400.0);
        nav.on_visibility(Visibility::Hidden, &mut timers);
        let (outcome, effects) = nav.on_visibility(Visibility::Hidden, &mut timers);
        assert!(outcome.is_none());
        assert!(effects.is_empty());
    }

    #[test]
    fn reopen_abandons_previous_attempt() {
        let mut timers = TimerQueue::new();
        let mut nav = NavigationDispatcher::new();
        nav.open(links(), &mut timers, 0.0, 1400.0);
        let effects = nav.open(links(), &mut timers, 100.0, 1400.0);
        assert_eq!(effects[0], Effect::UnwatchVisibility(ObserverId(0)));
        assert_eq!(effects[1], Effect::WatchVisibility(ObserverId(1)));
        assert_eq!(timers.len(), 1);
        assert_eq!(nav.pending_observer(), Some(ObserverId(1)));
    }

    #[test]
    fn stale_fallback_handle_is_ignored() {
        let mut timers = TimerQueue::new();
        let mut nav = NavigationDispatcher::new();
        nav.open(links(), &mut timers, 0.0, 1400.0);
        let stale = timers.schedule_once(5.0, TimerKind::NavigationFallback);
        let (outcome, _) = nav.on_fallback(stale);
        assert!(outcome.is_none());
        assert!(nav.is_pending());
    }
}
