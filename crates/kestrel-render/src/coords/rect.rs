use super::{Point, Size};

/// Axis-aligned integer rectangle in pixels, stored as edges.
///
/// Invariant: `left <= right` and `top <= bottom`. A rectangle with a zero
/// extent on either axis is empty but still has a position.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    #[inline]
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        debug_assert!(
            left <= right && top <= bottom,
            "Rect::new: inverted edges ({left}, {top}, {right}, {bottom})"
        );
        Self { left, top, right, bottom }
    }

    /// Builds a rect from position and extent. Negative extents collapse to zero.
    #[inline]
    pub fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            left: x,
            top: y,
            right: x.saturating_add(w.max(0)),
            bottom: y.saturating_add(h.max(0)),
        }
    }

    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::from_xywh(origin.x, origin.y, size.width, size.height)
    }

    #[inline]
    pub fn origin(self) -> Point {
        Point::new(self.left, self.top)
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn size(self) -> Size {
        Size::new(self.width(), self.height())
    }

    #[inline]
    pub fn area(self) -> i64 {
        self.size().area()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Half-open containment: [left, right) x [top, bottom).
    #[inline]
    pub fn contains_point(self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// True when every edge of `other` lies within this rect's edges.
    #[inline]
    pub fn contains(self, other: Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Overlap of both rects. Disjoint inputs produce an empty rect anchored at
    /// the overlap's top-left.
    #[inline]
    pub fn intersection(self, other: Rect) -> Rect {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right).max(left);
        let bottom = self.bottom.min(other.bottom).max(top);
        Rect { left, top, right, bottom }
    }
}
