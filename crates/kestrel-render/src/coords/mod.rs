//! Coordinate and geometry types shared by the painter and its backends.
//!
//! Canonical space:
//! - Pixels, origin top-left
//! - +X right, +Y down
//!
//! Integer types (`Point`, `Size`, `Rect`) address backend pixels; float types
//! (`Vec2`, `Rectf`) carry geometry as gameplay code produces it.

mod point;
mod rect;
mod rectf;
mod vec2;
mod viewport;

pub use point::{Point, Size};
pub use rect::Rect;
pub use rectf::Rectf;
pub use vec2::Vec2;
pub use viewport::Viewport;

/// Floored modulo: the result always has the sign of `m` (non-negative for `m > 0`).
#[inline]
pub fn positive_mod(x: i32, m: i32) -> i32 {
    debug_assert!(m > 0, "positive_mod: modulus must be positive, got {m}");
    x.rem_euclid(m)
}
