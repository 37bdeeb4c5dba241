use crate::coords::Rect;

/// Tessellates a rounded rectangle into horizontal bands.
///
/// The corner radius is clamped to half the width and half the height. With a
/// zero radius the result is `rect` itself. Otherwise each corner pair becomes
/// `radius` one-pixel strips whose inset follows a quarter circle, plus one
/// full-width center band when the rect is taller than `2 * radius + 1`.
pub fn rounded_rect_strips(rect: Rect, radius: i32) -> Vec<Rect> {
    if rect.is_empty() {
        return Vec::new();
    }

    let w = rect.width();
    let h = rect.height();
    let radius = radius.min(w / 2).min(h / 2).max(0);
    if radius == 0 {
        return vec![rect];
    }

    let mut strips = Vec::with_capacity(2 * radius as usize + 1);
    let rf = radius as f32;

    for i in 0..radius {
        let p = (i as f32 + 0.5) / rf;
        let xoff = radius - ((1.0 - p * p).sqrt() * rf) as i32;

        let top = Rect::from_xywh(rect.left + xoff, rect.top + radius - i, w - 2 * xoff, 1);
        strips.push(top);

        let bottom = Rect::from_xywh(rect.left + xoff, rect.top + h - radius + i, w - 2 * xoff, 1);
        // Short rects fold the bottom strip onto the top one.
        if bottom.top != top.top {
            strips.push(bottom);
        }
    }

    if h > 2 * radius + 1 {
        strips.push(Rect::from_xywh(rect.left, rect.top + radius + 1, w, h - 2 * radius - 1));
    }

    strips
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covered(strips: &[Rect], x: i32, y: i32) -> usize {
        strips.iter().filter(|s| s.contains_point(x, y)).count()
    }

    #[test]
    fn zero_radius_is_single_fill() {
        let rect = Rect::from_xywh(3, 4, 20, 10);
        assert_eq!(rounded_rect_strips(rect, 0), vec![rect]);
    }

    #[test]
    fn empty_rect_yields_nothing() {
        assert!(rounded_rect_strips(Rect::from_xywh(0, 0, 0, 10), 4).is_empty());
    }

    #[test]
    fn radius_clamped_to_half_extent() {
        // 6 px tall: radius 50 behaves like radius 3.
        let rect = Rect::from_xywh(0, 0, 40, 6);
        assert_eq!(rounded_rect_strips(rect, 50), rounded_rect_strips(rect, 3));
    }

    #[test]
    fn radius_three_in_ten_box() {
        let strips = rounded_rect_strips(Rect::from_xywh(0, 0, 10, 10), 3);

        // Insets per row: rows 1 and 9 are inset by 2, rows 2,3,7,8 by 1,
        // rows 4..=6 are the full-width center band. Row 0 stays untouched.
        let expected_inset = [None, Some(2), Some(1), Some(1), Some(0), Some(0), Some(0), Some(1), Some(1), Some(2)];
        for (y, inset) in expected_inset.iter().enumerate() {
            for x in 0..10 {
                let inside = inset.is_some_and(|i| x >= i && x < 10 - i);
                assert_eq!(covered(&strips, x, y as i32), inside as usize, "pixel ({x}, {y})");
            }
        }

        let area: i64 = strips.iter().map(|s| s.area()).sum();
        assert_eq!(area, 74);
    }

    #[test]
    fn square_of_twice_radius_skips_folded_strip() {
        // h == 2r: the innermost bottom strip lands on the innermost top strip.
        let strips = rounded_rect_strips(Rect::from_xywh(0, 0, 8, 8), 4);
        for y in 0..8 {
            for x in 0..8 {
                assert!(covered(&strips, x, y) <= 1, "pixel ({x}, {y}) drawn twice");
            }
        }
    }
}
