//! Screen management: trait definition, screen identifiers, and transitions.

pub mod orb;
pub mod settings;

use crate::app::AppState;

/// Identifies which screen to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    /// Field, orb, status and result card.
    Orb,
    /// Settings panel drawn over the orb.
    Settings,
}

/// A transition between screens.
#[derive(Debug, Clone)]
pub enum Transition {
    /// Push a new screen onto the stack.
    Push(ScreenId),
    /// Pop the current screen and return to the previous one.
    Pop,
    /// No transition.
    None,
}

/// Trait that all screens implement.
pub trait Screen {
    /// Update state based on input. Returns a transition if the screen should change.
    fn update(&mut self, app: &mut AppState) -> Transition;
    /// Draw the screen.
    fn draw(&self, app: &AppState);
}
