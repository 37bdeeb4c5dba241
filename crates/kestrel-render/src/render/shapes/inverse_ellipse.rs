use crate::coords::{Rect, Size, Vec2};

/// Bands covering the whole `screen` except an ellipse centered on `center`.
///
/// The ellipse is sliced into at most `max_slices` rows. Each slice yields a
/// band left of the ellipse and a band right of it; one band above and one
/// below the ellipse's bounding box complete the mask. Bands with no area are
/// kept (with a zero extent) so the layout is always `2 * slices + 2` rects.
pub fn inverse_ellipse_bands(center: Vec2, size: Vec2, screen: Size, max_slices: usize) -> Vec<Rect> {
    let x = center.x as i32;
    let w = size.x;
    let h = size.y as i32;
    let top = (center.y - size.y / 2.0) as i32;

    let slices = h.clamp(0, max_slices.min(i32::MAX as usize) as i32);
    let mut bands = Vec::with_capacity(2 * slices as usize + 2);

    // Row boundaries in i64; tall ellipses overflow `i * h` in i32.
    let row = |i: i32| -> i32 { saturate(top as i64 + i as i64 * h as i64 / slices as i64) };

    for i in 0..slices {
        let p = ((i as f32 + 0.5) / slices as f32) * 2.0 - 1.0;
        let xoff = ((1.0 - p * p).sqrt() * w / 2.0) as i32;

        let y = row(i);
        let band_h = row(i + 1).saturating_sub(y);
        let inner_left = x.saturating_sub(xoff);
        let inner_right = x.saturating_add(xoff);

        bands.push(Rect::from_xywh(0, y, inner_left, band_h));
        bands.push(Rect::from_xywh(inner_right, y, screen.width.saturating_sub(inner_right), band_h));
    }

    bands.push(Rect::from_xywh(0, 0, screen.width, top));
    let bottom = top.saturating_add(h);
    bands.push(Rect::from_xywh(0, bottom, screen.width, screen.height.saturating_sub(bottom)));

    bands
}

#[inline]
fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covered(bands: &[Rect], x: i32, y: i32) -> bool {
        bands.iter().any(|b| b.contains_point(x, y))
    }

    #[test]
    fn band_layout_size() {
        let bands = inverse_ellipse_bands(Vec2::new(50.0, 50.0), Vec2::new(40.0, 20.0), Size::new(100, 100), 256);
        assert_eq!(bands.len(), 2 * 20 + 2);
    }

    #[test]
    fn slices_capped() {
        let bands = inverse_ellipse_bands(Vec2::new(400.0, 400.0), Vec2::new(600.0, 600.0), Size::new(800, 800), 256);
        assert_eq!(bands.len(), 2 * 256 + 2);
    }

    #[test]
    fn hole_is_uncovered_and_corners_are_covered() {
        let screen = Size::new(100, 80);
        let bands = inverse_ellipse_bands(Vec2::new(50.0, 40.0), Vec2::new(40.0, 30.0), screen, 256);

        assert!(!covered(&bands, 50, 40));
        assert!(!covered(&bands, 35, 40));
        assert!(covered(&bands, 0, 0));
        assert!(covered(&bands, 99, 79));
        assert!(covered(&bands, 5, 40));
        assert!(covered(&bands, 95, 40));
        // Above and below the bounding box.
        assert!(covered(&bands, 50, 10));
        assert!(covered(&bands, 50, 70));
    }

    #[test]
    fn zero_height_is_top_and_bottom_only() {
        let bands = inverse_ellipse_bands(Vec2::new(10.0, 10.0), Vec2::new(8.0, 0.0), Size::new(20, 20), 256);
        assert_eq!(bands, vec![Rect::from_xywh(0, 0, 20, 10), Rect::from_xywh(0, 10, 20, 10)]);
    }

    #[test]
    fn very_tall_ellipse_does_not_overflow() {
        let screen = Size::new(200, 200);
        let bands = inverse_ellipse_bands(Vec2::new(100.0, 1.0e7), Vec2::new(50.0, 2.0e7), screen, 256);
        assert_eq!(bands.len(), 2 * 256 + 2);

        // Slices tile the bounding box top to bottom without gaps.
        let lefts: Vec<Rect> = bands[..512].iter().step_by(2).copied().collect();
        for w in lefts.windows(2) {
            assert_eq!(w[0].bottom, w[1].top);
        }
        assert_eq!(bands[0].top, 0);
        assert_eq!(bands[510].bottom, 20_000_000);
        // Screen-sized content sits inside the first slice, beside the ellipse.
        assert!(covered(&bands, 0, 100));
        assert!(!covered(&bands, 100, 100));
    }
}
