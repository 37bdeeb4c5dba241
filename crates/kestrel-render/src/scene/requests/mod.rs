pub(crate) mod fill_rect;
pub(crate) mod get_pixel;
pub(crate) mod gradient;
pub(crate) mod inverse_ellipse;
pub(crate) mod line;
pub(crate) mod texture;
pub(crate) mod triangle;

pub use fill_rect::FillRectRequest;
pub use get_pixel::{GetPixelRequest, PixelTicket};
pub use gradient::GradientRequest;
pub use inverse_ellipse::InverseEllipseRequest;
pub use line::LineRequest;
pub use texture::{TextureQuad, TextureRequest};
pub use triangle::TriangleRequest;
