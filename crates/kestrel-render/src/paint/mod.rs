//! Paint model shared between request producers and the painter.
//!
//! Scope:
//! - color representation (normalized straight alpha, 8-bit pixels)
//! - blend descriptions and their backend modes
//! - gradient directions
//!
//! Geometry types remain in `coords`.

pub mod blend;
pub mod color;
pub mod gradient;

mod error;

pub use blend::{match_blend, resolve_blend, Blend, BlendFactor, BlendMode};
pub use color::{Color, Rgba8};
pub use error::ParseNameError;
pub use gradient::GradientDirection;
