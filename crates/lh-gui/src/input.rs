//! Mapping mouse and touch input to pointer events.

use lh_engine::{Event, Point};
use macroquad::prelude::*;

/// Tracks the pointer across frames.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last: Option<Point>,
    down: bool,
}

impl PointerTracker {
    /// Create a tracker with no pointer down.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for this frame. A press only starts when `starts_press`
    /// accepts the position.
    pub fn poll(&mut self, starts_press: impl Fn(Point) -> bool) -> Vec<Event> {
        let (x, y) = mouse_position();
        let at = Point::new(x, y);
        let mut events = Vec::new();

        if touches()
            .iter()
            .any(|t| t.phase == TouchPhase::Cancelled)
            && self.down
        {
            self.down = false;
            events.push(Event::PointerCancel);
            return events;
        }

        if is_mouse_button_pressed(MouseButton::Left) && starts_press(at) {
            self.down = true;
            events.push(Event::PointerDown(at));
        } else if self.down && self.last != Some(at) {
            events.push(Event::PointerMove(at));
        }

        if self.down && is_mouse_button_released(MouseButton::Left) {
            self.down = false;
            events.push(Event::PointerUp);
        }

        self.last = Some(at);
        events
    }
}

/// Check if the Escape key was pressed this frame.
pub fn escape_pressed() -> bool {
    is_key_pressed(KeyCode::Escape)
}
