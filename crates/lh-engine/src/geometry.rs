/// A pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl Point {
    /// A point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Viewport {
    /// A viewport.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The center point.
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// The smaller side.
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }

    /// The larger side.
    pub fn max_side(self) -> f32 {
        self.width.max(self.height)
    }

    /// Whether a point lies in `[0, width) × [0, height)`.
    pub fn contains(self, p: Point) -> bool {
        (0.0..self.width).contains(&p.x) && (0.0..self.height).contains(&p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance() {
        assert!((Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn viewport_sides() {
        let v = Viewport::new(390.0, 844.0);
        assert_eq!(v.center(), Point::new(195.0, 422.0));
        assert_eq!(v.min_side(), 390.0);
        assert_eq!(v.max_side(), 844.0);
        assert!(v.contains(Point::new(0.0, 843.9)));
        assert!(!v.contains(Point::new(390.0, 10.0)));
    }
}
