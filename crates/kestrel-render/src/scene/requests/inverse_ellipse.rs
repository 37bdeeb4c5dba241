use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawQueue, DrawRequest};

/// Full-screen fill with an elliptical hole.
#[derive(Debug, Clone, PartialEq)]
pub struct InverseEllipseRequest {
    /// Center of the hole.
    pub pos: Vec2,
    /// Width and height of the hole.
    pub size: Vec2,
    pub color: Color,
}

impl DrawQueue {
    #[inline]
    pub fn push_inverse_ellipse(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.push(DrawRequest::InverseEllipse(InverseEllipseRequest { pos, size, color }));
    }
}
