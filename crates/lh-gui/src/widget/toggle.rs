//! Checkbox and radio rows for the settings panel.

use macroquad::prelude::*;

use super::Rect2;
use crate::theme::{TEXT_SIZE, palette};

const BOX: f32 = 18.0;

/// Whether a toggle is drawn square (checkbox) or round (radio).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleStyle {
    /// Independent on/off.
    Check,
    /// One of a group.
    Radio,
}

/// Draw a labeled toggle row.
pub fn draw_toggle(label: &str, on: bool, style: ToggleStyle, area: &Rect2, mouse: (f32, f32)) {
    let hovered = area.contains(mouse.0, mouse.1);
    if hovered {
        draw_rectangle(area.x, area.y, area.w, area.h, palette::HOVER);
    }

    let cx = area.x + BOX / 2.0 + 4.0;
    let cy = area.y + area.h / 2.0;
    match style {
        ToggleStyle::Check => {
            let b = Rect2::centered(cx, cy, BOX, BOX);
            draw_rectangle_lines(b.x, b.y, b.w, b.h, 2.0, palette::LINE);
            if on {
                let inner = b.inset(4.0);
                draw_rectangle(inner.x, inner.y, inner.w, inner.h, palette::GOLD);
            }
        }
        ToggleStyle::Radio => {
            draw_circle_lines(cx, cy, BOX / 2.0, 2.0, palette::LINE);
            if on {
                draw_circle(cx, cy, BOX / 2.0 - 4.0, palette::GOLD);
            }
        }
    }

    draw_text(
        label,
        area.x + BOX + 14.0,
        cy + TEXT_SIZE / 3.0,
        TEXT_SIZE,
        palette::TEXT,
    );
}
