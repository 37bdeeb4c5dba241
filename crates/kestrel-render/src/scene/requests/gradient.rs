use crate::coords::Rectf;
use crate::paint::{Blend, Color, GradientDirection};
use crate::scene::{DrawQueue, DrawRequest};

/// Two-color gradient payload.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientRequest {
    /// Color at the top (vertical) or left (horizontal) edge.
    pub top: Color,
    /// Color at the bottom (vertical) or right (horizontal) edge.
    pub bottom: Color,
    pub direction: GradientDirection,
    /// Screen region for plain directions; world region offset by the scroll
    /// position for sector directions.
    pub region: Rectf,
    pub blend: Blend,
}

impl DrawQueue {
    /// Records a gradient draw request.
    #[inline]
    pub fn push_gradient(
        &mut self,
        top: Color,
        bottom: Color,
        direction: GradientDirection,
        region: Rectf,
        blend: Blend,
    ) {
        self.push(DrawRequest::Gradient(GradientRequest { top, bottom, direction, region, blend }));
    }
}
