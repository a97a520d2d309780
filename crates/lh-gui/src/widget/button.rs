//! Clickable button with a hover state.

use macroquad::prelude::*;

use super::Rect2;
use crate::theme::{TEXT_SIZE, draw_centered_text, palette};

/// Draw a button, highlighted while the mouse is over it.
pub fn draw_button(label: &str, area: &Rect2, mouse: (f32, f32)) {
    let hovered = area.contains(mouse.0, mouse.1);
    let fill = if hovered { palette::HOVER } else { palette::PANEL };
    let border = if hovered { palette::GOLD } else { palette::LINE };
    super::bordered_rect(area, fill, border);
    draw_centered_text(
        label,
        area.x + area.w / 2.0,
        area.y + area.h / 2.0 + TEXT_SIZE / 3.0,
        TEXT_SIZE,
        palette::TEXT,
    );
}

/// Whether the left mouse button went down this frame.
pub fn left_click() -> bool {
    is_mouse_button_pressed(MouseButton::Left)
}
