//! Small immediate-mode widgets: buttons and toggles.

pub mod button;
pub mod toggle;

use macroquad::prelude::*;

/// Draw a rectangle with a 1-pixel border inside its bounds.
pub fn bordered_rect(area: &Rect2, fill: Color, border: Color) {
    draw_rectangle(area.x, area.y, area.w, area.h, fill);
    draw_rectangle_lines(area.x, area.y, area.w, area.h, 1.0, border);
}

/// A rectangular area for layout and hit-testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect2 {
    /// X position.
    pub x: f32,
    /// Y position.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect2 {
    /// Create a new rect.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// A rect of the given size centered on a point.
    pub fn centered(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, cy - h / 2.0, w, h)
    }

    /// Check if a point is inside this rect.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        (self.x..self.x + self.w).contains(&px) && (self.y..self.y + self.h).contains(&py)
    }

    /// Take a fixed height from the top, return (top_strip, remainder).
    pub fn take_top(&self, height: f32) -> (Self, Self) {
        let h = height.min(self.h);
        (
            Self::new(self.x, self.y, self.w, h),
            Self::new(self.x, self.y + h, self.w, self.h - h),
        )
    }

    /// Split horizontally: returns (left, right) at the given x fraction.
    pub fn split_h(&self, fraction: f32) -> (Self, Self) {
        let left_w = self.w * fraction;
        (
            Self::new(self.x, self.y, left_w, self.h),
            Self::new(self.x + left_w, self.y, self.w - left_w, self.h),
        )
    }

    /// Inset the rect by a margin on all sides.
    pub fn inset(&self, margin: f32) -> Self {
        Self {
            x: self.x + margin,
            y: self.y + margin,
            w: (self.w - margin * 2.0).max(0.0),
            h: (self.h - margin * 2.0).max(0.0),
        }
    }
}
