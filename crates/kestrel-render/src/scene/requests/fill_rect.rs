use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawQueue, DrawRequest};

/// Filled, optionally rounded rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct FillRectRequest {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
    /// Corner radius in pixels; clamped to half the smaller side when drawn.
    pub radius: f32,
}

impl DrawQueue {
    /// Records a filled rectangle.
    #[inline]
    pub fn push_filled_rect(&mut self, pos: Vec2, size: Vec2, color: Color, radius: f32) {
        self.push(DrawRequest::FilledRect(FillRectRequest { pos, size, color, radius }));
    }
}
