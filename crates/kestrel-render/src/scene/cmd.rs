use crate::coords::Rect;
use crate::paint::Color;

use super::requests::{
    FillRectRequest, GetPixelRequest, GradientRequest, InverseEllipseRequest, LineRequest,
    TextureRequest, TriangleRequest,
};

/// One unit of work for the painter.
///
/// Extending the request set:
/// - add a request module under `scene::requests::*`
/// - add a new variant here
/// - implement push helpers inside that request module
/// - add the matching arm in `Painter::submit`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawRequest {
    Texture(TextureRequest),
    Gradient(GradientRequest),
    FilledRect(FillRectRequest),
    InverseEllipse(InverseEllipseRequest),
    Line(LineRequest),
    Triangle(TriangleRequest),
    GetPixel(GetPixelRequest),
    SetClipRect(Rect),
    ClearClipRect,
    Clear(Color),
}
