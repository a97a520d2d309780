//! The press/hold/release state machine.
//!
//! `Idle → Holding → (Rejected | Settled)`. The machine only tracks phase
//! and measurements; the session turns its transitions into effects.

use lh_core::GestureReading;

use crate::config::FieldConfig;
use crate::geometry::{Point, Viewport};

/// Measurements for an active press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// When the press began (ms).
    pub start: f64,
    /// Accumulated pointer travel (px).
    pub path_distance: f64,
    /// Last seen pointer position.
    pub last: Point,
    /// Intensity derived from the latest move.
    pub intensity: f32,
}

/// Where the gesture currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    /// No active press.
    Idle,
    /// A press is being held.
    Holding(GestureSample),
    /// The last press was too short; the hint is showing.
    Rejected,
    /// The last press produced a selection; waiting for dismiss.
    Settled,
}

/// What a move while holding produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    /// Distance travelled since the last position.
    pub delta: f32,
    /// Intensity to feed into the particle field.
    pub intensity: f32,
    /// Orb displacement from its resting position.
    pub orb_offset: Point,
}

/// How a release was judged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// Held shorter than the minimum.
    Rejected {
        /// Hold duration (ms).
        duration: f64,
    },
    /// Held long enough; the reading feeds the selector.
    Settled(GestureReading),
}

/// Tracks one press at a time.
#[derive(Debug, Clone)]
pub struct GestureMachine {
    phase: GesturePhase,
    min_hold_ms: f64,
    intensity_cap: f32,
    offset_fraction: f32,
}

impl GestureMachine {
    /// A machine in `Idle`.
    pub fn new(min_hold_ms: f64, field: &FieldConfig) -> Self {
        Self {
            phase: GesturePhase::Idle,
            min_hold_ms,
            intensity_cap: field.intensity_cap,
            offset_fraction: field.offset_fraction,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> &GesturePhase {
        &self.phase
    }

    /// Whether a press is being held.
    pub fn is_holding(&self) -> bool {
        matches!(self.phase, GesturePhase::Holding(_))
    }

    /// Begin a press. Refused while holding or settled.
    pub fn press(&mut self, at: Point, now: f64) -> bool {
        match self.phase {
            GesturePhase::Holding(_) | GesturePhase::Settled => false,
            GesturePhase::Idle | GesturePhase::Rejected => {
                self.phase = GesturePhase::Holding(GestureSample {
                    start: now,
                    path_distance: 0.0,
                    last: at,
                    intensity: 0.0,
                });
                true
            }
        }
    }

    /// Feed a pointer move. Ignored unless holding.
    pub fn movement(&mut self, to: Point, viewport: Viewport) -> Option<Movement> {
        let GesturePhase::Holding(sample) = &mut self.phase else {
            return None;
        };

        let delta = sample.last.distance_to(to);
        sample.path_distance += f64::from(delta);
        sample.intensity = (delta * 2.0).min(self.intensity_cap);
        sample.last = to;

        let max_offset = viewport.min_side() * self.offset_fraction;
        let center = viewport.center();
        let orb_offset = Point::new(
            (to.x - center.x).clamp(-max_offset, max_offset),
            (to.y - center.y).clamp(-max_offset, max_offset),
        );

        Some(Movement {
            delta,
            intensity: sample.intensity,
            orb_offset,
        })
    }

    /// End a press. `None` unless holding.
    pub fn release(&mut self, now: f64) -> Option<Release> {
        let GesturePhase::Holding(sample) = self.phase else {
            return None;
        };

        let duration = now - sample.start;
        if duration < self.min_hold_ms {
            self.phase = GesturePhase::Rejected;
            Some(Release::Rejected { duration })
        } else {
            self.phase = GesturePhase::Settled;
            Some(Release::Settled(GestureReading {
                duration,
                path_distance: sample.path_distance,
                now,
            }))
        }
    }

    /// Leave `Rejected` once the hint has expired.
    pub fn hint_expired(&mut self) -> bool {
        if self.phase == GesturePhase::Rejected {
            self.phase = GesturePhase::Idle;
            true
        } else {
            false
        }
    }

    /// Leave `Settled` on an explicit dismiss.
    pub fn dismiss(&mut self) -> bool {
        if self.phase == GesturePhase::Settled {
            self.phase = GesturePhase::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport::new(400.0, 800.0);

    fn machine() -> GestureMachine {
        GestureMachine::new(600.0, &FieldConfig::default())
    }

    #[test]
    fn press_move_release_settles() {
        let mut g = machine();
        assert!(g.press(Point::new(200.0, 400.0), 1000.0));
        g.movement(Point::new(203.0, 404.0), VIEW).unwrap();
        g.movement(Point::new(203.0, 414.0), VIEW).unwrap();
        let release = g.release(1650.0).unwrap();
        let Release::Settled(reading) = release else {
            panic!("expected settled, got {release:?}");
        };
        assert!((reading.duration - 650.0).abs() < 1e-9);
        assert!((reading.path_distance - 15.0).abs() < 1e-4);
        assert!((reading.now - 1650.0).abs() < 1e-9);
        assert_eq!(*g.phase(), GesturePhase::Settled);
    }

    #[test]
    fn short_press_rejected_regardless_of_distance() {
        let mut g = machine();
        g.press(Point::new(0.0, 0.0), 0.0);
        for i in 1..50 {
            g.movement(Point::new(i as f32 * 40.0, 0.0), VIEW);
        }
        assert_eq!(g.release(400.0), Some(Release::Rejected { duration: 400.0 }));
        assert_eq!(*g.phase(), GesturePhase::Rejected);
    }

    #[test]
    fn exactly_threshold_qualifies() {
        let mut g = machine();
        g.press(Point::default(), 100.0);
        assert!(matches!(g.release(700.0), Some(Release::Settled(_))));
    }

    #[test]
    fn settled_refuses_presses_until_dismissed() {
        let mut g = machine();
        g.press(Point::default(), 0.0);
        g.release(1000.0);
        assert!(!g.press(Point::default(), 1100.0));
        assert!(g.dismiss());
        assert!(!g.dismiss());
        assert!(g.press(Point::default(), 1200.0));
    }

    #[test]
    fn rejected_accepts_new_press() {
        let mut g = machine();
        g.press(Point::default(), 0.0);
        g.release(100.0);
        assert!(g.press(Point::default(), 200.0));
        assert!(!g.hint_expired());
    }

    #[test]
    fn moves_and_releases_ignored_when_idle() {
        let mut g = machine();
        assert!(g.movement(Point::new(5.0, 5.0), VIEW).is_none());
        assert!(g.release(10.0).is_none());
        assert_eq!(*g.phase(), GesturePhase::Idle);
    }

    #[test]
    fn intensity_is_capped() {
        let mut g = machine();
        g.press(Point::new(0.0, 0.0), 0.0);
        let m = g.movement(Point::new(10.0, 0.0), VIEW).unwrap();
        assert!((m.intensity - 20.0).abs() < 1e-6);
        let m = g.movement(Point::new(400.0, 0.0), VIEW).unwrap();
        assert!((m.intensity - 90.0).abs() < 1e-6);
    }

    #[test]
    fn orb_offset_clamped_per_axis() {
        let mut g = machine();
        g.press(Point::new(200.0, 400.0), 0.0);
        // max offset = 0.12 * 400 = 48
        let m = g.movement(Point::new(210.0, 0.0), VIEW).unwrap();
        assert!((m.orb_offset.x - 10.0).abs() < 1e-4);
        assert!((m.orb_offset.y + 48.0).abs() < 1e-4);
        let m = g.movement(Point::new(399.0, 799.0), VIEW).unwrap();
        assert!((m.orb_offset.x - 48.0).abs() < 1e-4);
        assert!((m.orb_offset.y - 48.0).abs() < 1e-4);
    }
}
