//! Draw requests and the per-frame submission queue.
//!
//! Responsibilities:
//! - store renderer-agnostic draw requests in submission order
//! - keep request-specific types and push helpers isolated per file under
//!   `scene::requests`

mod cmd;
mod queue;

pub mod requests;

pub use cmd::DrawRequest;
pub use queue::{DrawQueue, Readback};
pub use requests::{
    FillRectRequest, GetPixelRequest, GradientRequest, InverseEllipseRequest, LineRequest,
    PixelTicket, TextureQuad, TextureRequest, TriangleRequest,
};
