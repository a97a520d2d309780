//! Haptic patterns and the cancelable pulse loop that runs while holding.

use crate::timer::{TimerHandle, TimerQueue};

/// A vibration pattern: alternating on/off durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HapticPattern(pub &'static [u32]);

impl HapticPattern {
    /// Single tap when a press begins.
    pub const PRESS: Self = Self(&[16]);
    /// Repeated while the orb is held.
    pub const PULSE: Self = Self(&[6, 10]);
    /// Played as the result is revealed.
    pub const REVEAL: Self = Self(&[20, 50, 20, 70]);

    /// Total duration of the pattern in milliseconds.
    pub fn total_ms(&self) -> u32 {
        self.0.iter().sum()
    }
}

/// The periodic pulse while a press is held.
///
/// Starting always stops a previous loop first, so at most one interval is
/// ever scheduled.
#[derive(Debug, Default)]
pub struct HapticLoop {
    timer: Option<TimerHandle>,
}

impl HapticLoop {
    /// Start pulsing every `interval` ms from `now`.
    pub fn start<K: Clone>(&mut self, timers: &mut TimerQueue<K>, now: f64, interval: f64, kind: K) {
        self.stop(timers);
        self.timer = Some(timers.schedule_every(now + interval, interval, kind));
    }

    /// Stop pulsing. Returns whether a loop was running.
    pub fn stop<K: Clone>(&mut self, timers: &mut TimerQueue<K>) -> bool {
        self.timer.take().is_some_and(|h| timers.cancel(h))
    }

    /// Whether a loop is running.
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Handle of the running loop, if any.
    pub fn handle(&self) -> Option<TimerHandle> {
        self.timer
    }
}
