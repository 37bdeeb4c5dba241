use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawQueue, DrawRequest};

/// One-pixel line payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRequest {
    pub pos: Vec2,
    pub dest_pos: Vec2,
    pub color: Color,
}

impl DrawQueue {
    #[inline]
    pub fn push_line(&mut self, pos: Vec2, dest_pos: Vec2, color: Color) {
        self.push(DrawRequest::Line(LineRequest { pos, dest_pos, color }));
    }
}
