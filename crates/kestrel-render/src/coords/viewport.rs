use super::{Rect, Size};

/// Mapping between the engine's logical canvas and the backend's physical pixels.
///
/// `rect` is where the logical canvas lands on the render target; `logical_size`
/// is the canvas extent gameplay code draws against.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub rect: Rect,
    pub logical_size: Size,
}

impl Viewport {
    #[inline]
    pub fn new(rect: Rect, logical_size: Size) -> Self {
        Self { rect, logical_size }
    }

    /// One-to-one mapping of a `width x height` canvas at the target origin.
    #[inline]
    pub fn identity(width: i32, height: i32) -> Self {
        Self::new(Rect::from_xywh(0, 0, width, height), Size::new(width, height))
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        !self.rect.is_empty() && !self.logical_size.is_empty()
    }

    /// Converts a logical position to the physical pixel holding it.
    #[inline]
    pub fn to_physical(self, x: f32, y: f32) -> (i32, i32) {
        let sx = self.rect.width() as f32 / self.logical_size.width as f32;
        let sy = self.rect.height() as f32 / self.logical_size.height as f32;
        (self.rect.left + (x * sx) as i32, self.rect.top + (y * sy) as i32)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::identity(640, 480)
    }
}
