//! Rasterization of draw requests.
//!
//! The [`Painter`] consumes `scene` requests and issues primitive calls on a
//! [`Backend`]. Geometry-heavy work (wraparound splitting, shape tessellation,
//! gradient banding) lives in pure helper modules so it can be tested without
//! a render target.
//!
//! Convention:
//! - backend geometry is in integer target pixels (top-left origin, +Y down)
//! - request geometry is truncated toward zero when converted

mod backend;
mod painter;
mod texture;

pub mod gradient;
pub mod shapes;
pub mod software;
pub mod wrap;

#[cfg(test)]
pub(crate) mod recording;

pub use backend::{Backend, Flip, TextureMods};
pub use painter::{Painter, PainterConfig};
pub use software::{BackendError, SoftwareBackend};
pub use texture::{Sampler, Texture, TextureId};
