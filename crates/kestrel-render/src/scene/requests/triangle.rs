use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawQueue, DrawRequest};

/// Filled triangle payload. Vertex order does not matter.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleRequest {
    pub pos1: Vec2,
    pub pos2: Vec2,
    pub pos3: Vec2,
    pub color: Color,
}

impl DrawQueue {
    #[inline]
    pub fn push_triangle(&mut self, pos1: Vec2, pos2: Vec2, pos3: Vec2, color: Color) {
        self.push(DrawRequest::Triangle(TriangleRequest { pos1, pos2, pos3, color }));
    }
}
