//! Visual theme: colors, sizes, and the orb's geometry.

use macroquad::prelude::*;

/// Initial window width (logical pixels).
pub const WINDOW_W: i32 = 390;
/// Initial window height (logical pixels).
pub const WINDOW_H: i32 = 844;

/// Resting orb radius.
pub const ORB_RADIUS: f32 = 64.0;
/// Extra radius while the orb pulses.
pub const ORB_PULSE: f32 = 6.0;

/// Body text size.
pub const TEXT_SIZE: f32 = 20.0;
/// Heading text size.
pub const HEADING_SIZE: f32 = 30.0;
/// Height of a button or toggle row.
pub const ROW_H: f32 = 36.0;

/// Night-sky palette.
pub mod palette {
    use macroquad::prelude::Color;

    /// Deep background.
    pub const NIGHT: Color = Color::new(0.024, 0.031, 0.071, 1.0);
    /// Panel fill.
    pub const PANEL: Color = Color::new(0.063, 0.078, 0.149, 0.96);
    /// Dim veil behind overlays.
    pub const VEIL: Color = Color::new(0.0, 0.0, 0.0, 0.55);
    /// Orb core and particles.
    pub const GOLD: Color = Color::new(1.0, 0.855, 0.541, 1.0);
    /// Outer orb glow.
    pub const EMBER: Color = Color::new(0.965, 0.620, 0.298, 1.0);
    /// Primary text.
    pub const TEXT: Color = Color::new(0.953, 0.929, 0.878, 1.0);
    /// Secondary text.
    pub const MUTED: Color = Color::new(0.600, 0.620, 0.690, 1.0);
    /// Borders and separators.
    pub const LINE: Color = Color::new(0.251, 0.282, 0.388, 1.0);
    /// Hovered control.
    pub const HOVER: Color = Color::new(0.133, 0.161, 0.286, 1.0);
}

/// `base` with its alpha replaced.
pub fn with_alpha(base: Color, alpha: f32) -> Color {
    Color::new(base.r, base.g, base.b, alpha.clamp(0.0, 1.0))
}

/// Draw text centered horizontally on `cx` with its baseline at `y`.
pub fn draw_centered_text(text: &str, cx: f32, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, cx - dims.width / 2.0, y, size, color);
}
