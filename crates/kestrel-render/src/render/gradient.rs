//! Banded two-color gradients.
//!
//! A gradient is drawn as `n` solid bands, with `n` picked from the largest
//! channel difference between the two colors so that adjacent bands never
//! differ by more than one 8-bit step.

use crate::coords::{Rect, Rectf};
use crate::paint::{Color, GradientDirection};

/// A single solid band of a gradient.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientBand {
    pub rect: Rect,
    pub color: Color,
}

/// Number of bands for a gradient between `top` and `bottom`; at least 1 and
/// at most 255.
pub fn step_count(top: Color, bottom: Color) -> usize {
    let delta = top.max_channel_delta(bottom);
    if !delta.is_finite() {
        return 1;
    }
    ((delta.clamp(0.0, 1.0) * 255.0).round() as usize).max(1)
}

/// Splits `region` into gradient bands.
///
/// Vertical directions stack bands top to bottom, horizontal ones left to
/// right. Band `i` of `n` takes the color at fraction `(i + 1) / n`.
///
/// Sector directions describe a region positioned in world space (its origin
/// is the negated scroll offset). Their bands are laid out from the target
/// origin along the stepping axis, and the color fraction is advanced by
/// `-region.p1.x / region.width()` so the visible window samples the part of
/// the gradient that scrolled into view.
pub fn gradient_bands(
    top: Color,
    bottom: Color,
    direction: GradientDirection,
    region: Rectf,
) -> Vec<GradientBand> {
    let n = step_count(top, bottom);
    let nf = n as f32;

    let begin = if direction.is_sector() && region.width() != 0.0 {
        -region.p1.x / region.width()
    } else {
        0.0
    };

    let mut bands = Vec::with_capacity(n);
    for i in 0..n {
        let (from, to) = (i as f32 / nf, (i + 1) as f32 / nf);

        let rect = if direction.is_vertical() {
            let origin = if direction.is_sector() { 0.0 } else { region.p1.y };
            let y = (origin + region.height() * from) as i32;
            let h = (origin + region.height() * to - y as f32) as i32;
            Rect::from_xywh(region.p1.x as i32, y, region.width() as i32, h)
        } else {
            let origin = if direction.is_sector() { 0.0 } else { region.p1.x };
            let x = (origin + region.width() * from) as i32;
            let w = (origin + region.width() * to - x as f32) as i32;
            Rect::from_xywh(x, region.p1.y as i32, w, region.height() as i32)
        };

        bands.push(GradientBand { rect, color: top.lerp(bottom, to + begin) });
    }

    bands
}
