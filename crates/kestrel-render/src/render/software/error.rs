use std::fmt;

use crate::coords::{Rect, Size};
use crate::render::TextureId;

/// Failures reported by [`SoftwareBackend`](super::SoftwareBackend).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    UnknownTexture(TextureId),
    /// A read touched pixels outside the target.
    OutOfBounds { rect: Rect, size: Size },
    /// Texture data does not match the declared size.
    BadTextureData { expected: usize, actual: usize },
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::UnknownTexture(id) => write!(f, "unknown texture {}", id.0),
            BackendError::OutOfBounds { rect, size } => write!(
                f,
                "rect ({}, {}, {}, {}) outside {}x{} target",
                rect.left, rect.top, rect.right, rect.bottom, size.width, size.height
            ),
            BackendError::BadTextureData { expected, actual } => {
                write!(f, "texture data has {actual} pixels, expected {expected}")
            }
        }
    }
}

impl std::error::Error for BackendError {}
