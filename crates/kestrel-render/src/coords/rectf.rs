use core::fmt;

use super::{Rect, Vec2};

/// Axis-aligned float rectangle, stored as top-left `p1` and bottom-right `p2`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rectf {
    pub p1: Vec2,
    pub p2: Vec2,
}

impl Rectf {
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { p1: Vec2::new(left, top), p2: Vec2::new(right, bottom) }
    }

    #[inline]
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { p1: origin, p2: origin + size }
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.p2.x - self.p1.x
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.p2.y - self.p1.y
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Half-open containment: [p1, p2).
    #[inline]
    pub fn contains_point(self, p: Vec2) -> bool {
        p.x >= self.p1.x && p.y >= self.p1.y && p.x < self.p2.x && p.y < self.p2.y
    }

    #[inline]
    pub fn contains(self, other: Rectf) -> bool {
        other.p1.x >= self.p1.x
            && other.p1.y >= self.p1.y
            && other.p2.x <= self.p2.x
            && other.p2.y <= self.p2.y
    }

    #[inline]
    pub fn intersection(self, other: Rectf) -> Rectf {
        let left = self.p1.x.max(other.p1.x);
        let top = self.p1.y.max(other.p1.y);
        let right = self.p2.x.min(other.p2.x).max(left);
        let bottom = self.p2.y.min(other.p2.y).max(top);
        Rectf::new(left, top, right, bottom)
    }

    /// Truncates position and extent toward zero, the way backend rects are built
    /// from request geometry.
    #[inline]
    pub fn to_rect(self) -> Rect {
        Rect::from_xywh(
            self.p1.x as i32,
            self.p1.y as i32,
            self.width() as i32,
            self.height() as i32,
        )
    }
}

impl From<Rect> for Rectf {
    #[inline]
    fn from(r: Rect) -> Self {
        Rectf::new(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
    }
}

impl fmt::Display for Rectf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectf({}, {}, {}, {})", self.p1.x, self.p1.y, self.p2.x, self.p2.y)
    }
}
