//! Scan-line tessellation of filled shapes into backend primitives.
//!
//! Each function is pure: it turns shape geometry into rects or spans that the
//! painter submits in a single batch.

pub mod inverse_ellipse;
pub mod rounded_rect;
pub mod triangle;

pub use inverse_ellipse::inverse_ellipse_bands;
pub use rounded_rect::rounded_rect_strips;
pub use triangle::{triangle_spans, Span};
