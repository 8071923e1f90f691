//! Floating-point rectangle with anchor placement
//!
//! Sprites are positioned by placing one anchor point of their box
//! (center, mid-top, ...) at a coordinate. The box is axis-aligned, y grows
//! downward.

use macroquad::math::{vec2, Vec2};

/// Which point of a rectangle a placement refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
    MidBottom,
    BottomLeft,
}

/// Axis-aligned rectangle: top-left corner plus size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl FRect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rectangle of `size` whose `anchor` point sits at `at`
    pub fn anchored(size: Vec2, anchor: Anchor, at: Vec2) -> Self {
        let mut rect = Self::new(0.0, 0.0, size.x, size.y);
        rect.set_anchor(anchor, at);
        rect
    }

    /// Move the rectangle so its `anchor` point sits at `at`
    pub fn set_anchor(&mut self, anchor: Anchor, at: Vec2) {
        match anchor {
            Anchor::Center => self.set_center(at),
            Anchor::MidBottom => {
                self.x = at.x - self.w * 0.5;
                self.y = at.y - self.h;
            }
            Anchor::BottomLeft => {
                self.x = at.x;
                self.y = at.y - self.h;
            }
        }
    }

    // =========================================================================
    // Edges
    // =========================================================================

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    /// Move horizontally so the right edge sits at `right`
    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    /// Move vertically so the bottom edge sits at `bottom`
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.h;
    }

    // =========================================================================
    // Anchor points
    // =========================================================================

    pub fn center(&self) -> Vec2 {
        vec2(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Move so the center sits at `center`
    pub fn set_center(&mut self, center: Vec2) {
        self.x = center.x - self.w * 0.5;
        self.y = center.y - self.h * 0.5;
    }

    /// Where lasers leave the ship and explosions start
    pub fn midtop(&self) -> Vec2 {
        vec2(self.x + self.w * 0.5, self.y)
    }

    /// Shift by `delta`
    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Same rectangle shifted by (dx, dy)
    pub fn moved(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Grow by (dw, dh) keeping the center fixed
    pub fn inflate(&self, dw: f32, dh: f32) -> Self {
        Self::new(self.x - dw * 0.5, self.y - dh * 0.5, self.w + dw, self.h + dh)
    }

    /// Resize keeping the center fixed
    pub fn resize_centered(&mut self, size: Vec2) {
        let center = self.center();
        self.w = size.x;
        self.h = size.y;
        self.set_center(center);
    }

    /// Strict overlap test. Rectangles that only share an edge, or that have
    /// no area, do not collide.
    pub fn collides(&self, other: &FRect) -> bool {
        if self.w <= 0.0 || self.h <= 0.0 || other.w <= 0.0 || other.h <= 0.0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
impl FRect {
    pub fn size(&self) -> Vec2 {
        vec2(self.w, self.h)
    }

    pub fn midbottom(&self) -> Vec2 {
        vec2(self.x + self.w * 0.5, self.bottom())
    }

    pub fn bottomleft(&self) -> Vec2 {
        vec2(self.x, self.bottom())
    }
}

/// Bounding box size of a `size` image rotated by `degrees`
pub fn rotated_size(size: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    vec2(size.x * cos + size.y * sin, size.x * sin + size.y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_anchored_placements() {
        let size = vec2(10.0, 20.0);

        let r = FRect::anchored(size, Anchor::Center, vec2(50.0, 50.0));
        assert!(approx(r.x, 45.0) && approx(r.y, 40.0));

        let r = FRect::anchored(size, Anchor::MidBottom, vec2(50.0, 50.0));
        assert!(approx(r.x, 45.0) && approx(r.bottom(), 50.0));

        let r = FRect::anchored(size, Anchor::BottomLeft, vec2(50.0, 0.0));
        assert!(approx(r.left(), 50.0) && approx(r.bottom(), 0.0) && approx(r.top(), -20.0));
    }

    #[test]
    fn test_edge_setters_keep_size() {
        let mut r = FRect::new(0.0, 0.0, 10.0, 20.0);
        r.set_right(100.0);
        r.set_bottom(50.0);
        assert!(approx(r.x, 90.0));
        assert!(approx(r.y, 30.0));
        assert!(approx(r.w, 10.0) && approx(r.h, 20.0));
    }

    #[test]
    fn test_collides_is_strict() {
        let a = FRect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.collides(&FRect::new(5.0, 5.0, 10.0, 10.0)));
        // Touching edges only
        assert!(!a.collides(&FRect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.collides(&FRect::new(0.0, 10.0, 10.0, 10.0)));
        // Empty rect never collides
        assert!(!a.collides(&FRect::new(2.0, 2.0, 0.0, 5.0)));
    }

    #[test]
    fn test_inflate_and_move() {
        let r = FRect::new(10.0, 10.0, 20.0, 10.0).inflate(20.0, 16.0).moved(0.0, -8.0);
        assert!(approx(r.x, 0.0));
        assert!(approx(r.y, -6.0));
        assert!(approx(r.w, 40.0));
        assert!(approx(r.h, 26.0));
    }

    #[test]
    fn test_resize_keeps_center() {
        let mut r = FRect::new(0.0, 0.0, 10.0, 10.0);
        r.resize_centered(vec2(20.0, 30.0));
        assert!(approx(r.center().x, 5.0) && approx(r.center().y, 5.0));
        assert!(approx(r.w, 20.0) && approx(r.h, 30.0));
    }

    #[test]
    fn test_rotated_size() {
        let s = rotated_size(vec2(100.0, 100.0), 0.0);
        assert!(approx(s.x, 100.0) && approx(s.y, 100.0));

        let s = rotated_size(vec2(100.0, 100.0), 45.0);
        assert!(approx(s.x, 141.421) && approx(s.y, 141.421));

        let s = rotated_size(vec2(100.0, 50.0), 90.0);
        assert!(approx(s.x, 50.0) && approx(s.y, 100.0));
    }
}
