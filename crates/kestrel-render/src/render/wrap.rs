//! Texture-space wraparound.
//!
//! A source rect that runs past a texture's edges is treated as sampling an
//! infinitely tiled copy of that texture. The rect is split against the
//! texture bounds into the part that is inside and up to four remainder bands;
//! each band is wrapped back into texture space and processed again until
//! every piece lies inside the texture.
//!
//! The split is driven by an explicit worklist instead of recursion, capped by
//! a step limit so pathological inputs cannot stall a frame.

use anyhow::Result;

use crate::coords::{positive_mod, Rect};

use super::{Backend, Flip, TextureId};

/// One in-bounds copy produced by the wraparound split.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct WrapBlit {
    pub src: Rect,
    pub dst: Rect,
}

/// `src` split against texture bounds: the overlap plus the four bands outside.
///
/// Any of the bands may be empty. Together the five rects tile `src`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Decomposition {
    pub inside: Rect,
    pub top: Rect,
    pub left: Rect,
    pub right: Rect,
    pub bottom: Rect,
}

impl Decomposition {
    /// The remainder bands in top, left, right, bottom order.
    #[inline]
    pub fn remainders(&self) -> [Rect; 4] {
        [self.top, self.left, self.right, self.bottom]
    }
}

/// Splits `src` against `bounds`.
///
/// The top and bottom bands span the full width of `src`; the left and right
/// bands cover only the rows shared with `bounds`.
pub fn decompose(src: Rect, bounds: Rect) -> Decomposition {
    let split_top = bounds.top.clamp(src.top, src.bottom);
    let split_bottom = bounds.bottom.clamp(split_top, src.bottom);
    let split_left = bounds.left.clamp(src.left, src.right);
    let split_right = bounds.right.clamp(split_left, src.right);

    Decomposition {
        inside: Rect::new(split_left, split_top, split_right, split_bottom),
        top: Rect::new(src.left, src.top, src.right, split_top),
        left: Rect::new(src.left, split_top, split_left, split_bottom),
        right: Rect::new(split_right, split_top, src.right, split_bottom),
        bottom: Rect::new(src.left, split_bottom, src.right, src.bottom),
    }
}

/// Maps `part` (a sub-rect of `src`) to the matching sub-rect of `dst`.
///
/// Each edge is placed at the same fractional position within `dst` as it has
/// within `src`, so neighbouring parts share their mapped edges exactly.
pub fn relative_map(part: Rect, src: Rect, dst: Rect) -> Rect {
    debug_assert!(src.contains(part), "relative_map: {part:?} not inside {src:?}");
    debug_assert!(!src.is_empty(), "relative_map: empty source {src:?}");

    let map = |v: i32, s0: i32, s_len: i32, d0: i32, d_len: i32| -> i32 {
        d0 + ((v - s0) as i64 * d_len as i64 / s_len as i64) as i32
    };

    let result = Rect::new(
        map(part.left, src.left, src.width(), dst.left, dst.width()),
        map(part.top, src.top, src.height(), dst.top, dst.height()),
        map(part.right, src.left, src.width(), dst.left, dst.width()),
        map(part.bottom, src.top, src.height(), dst.top, dst.height()),
    );

    debug_assert!(dst.contains(result), "relative_map: {result:?} escaped {dst:?}");
    result
}

/// Resolves a possibly out-of-bounds `src` into in-bounds copies.
///
/// `bounds` must contain the top-left corner of `src`. Empty `src` or `dst`
/// yield nothing. At most `max_steps` worklist entries are processed; hitting
/// the cap logs a warning and returns what was resolved so far.
pub fn wrap_blits(bounds: Rect, src: Rect, dst: Rect, max_steps: usize) -> Vec<WrapBlit> {
    let mut blits = Vec::new();
    if bounds.is_empty() {
        return blits;
    }

    let mut pending = vec![(src, dst)];
    let mut steps = 0usize;

    while let Some((src, dst)) = pending.pop() {
        if steps == max_steps {
            log::warn!(
                "wraparound split of {src:?} exceeded {max_steps} steps; remaining pieces dropped"
            );
            break;
        }
        steps += 1;

        debug_assert!(
            bounds.contains_point(src.left, src.top),
            "wrap_blits: source anchor ({}, {}) outside {bounds:?}",
            src.left,
            src.top
        );

        if src.is_empty() || dst.is_empty() {
            continue;
        }

        if bounds.contains(src) {
            blits.push(WrapBlit { src, dst });
            continue;
        }

        let parts = decompose(src, bounds);

        // The overlap needs no further splitting.
        let inside_dst = relative_map(parts.inside, src, dst);
        if !parts.inside.is_empty() && !inside_dst.is_empty() {
            blits.push(WrapBlit { src: parts.inside, dst: inside_dst });
        }

        // Reversed so pieces pop in top, left, right, bottom order.
        for rest in parts.remainders().into_iter().rev() {
            if rest.is_empty() {
                continue;
            }
            let wrapped = Rect::from_xywh(
                bounds.left + positive_mod(rest.left - bounds.left, bounds.width()),
                bounds.top + positive_mod(rest.top - bounds.top, bounds.height()),
                rest.width(),
                rest.height(),
            );
            pending.push((wrapped, relative_map(rest, src, dst)));
        }
    }

    blits
}

/// Copies `src` into `dst` treating the texture as infinitely tiled.
///
/// Rotation and flipping are not supported here; callers copy directly in
/// those cases.
pub fn render_wrapped<B: Backend + ?Sized>(
    backend: &mut B,
    texture: TextureId,
    bounds: Rect,
    src: Rect,
    dst: Rect,
    max_steps: usize,
) -> Result<()> {
    for blit in wrap_blits(bounds, src, dst, max_steps) {
        backend.copy(texture, blit.src, blit.dst, 0.0, Flip::NONE)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(l: i32, t: i32, rr: i32, b: i32) -> Rect { Rect::new(l, t, rr, b) }

    // ── decompose ─────────────────────────────────────────────────────────

    #[test]
    fn decompose_bottom_right_overhang() {
        let d = decompose(r(6, 6, 12, 12), r(0, 0, 8, 8));
        assert_eq!(d.inside, r(6, 6, 8, 8));
        assert!(d.top.is_empty());
        assert!(d.left.is_empty());
        assert_eq!(d.right, r(8, 6, 12, 8));
        assert_eq!(d.bottom, r(6, 8, 12, 12));
    }

    #[test]
    fn decompose_parts_cover_source_area() {
        let src = r(-3, -2, 14, 9);
        let d = decompose(src, r(0, 0, 8, 8));
        let total: i64 = d.remainders().iter().map(|p| p.area()).sum::<i64>() + d.inside.area();
        assert_eq!(total, src.area());
    }

    // ── relative_map ──────────────────────────────────────────────────────

    #[test]
    fn relative_map_identity_scale() {
        let src = r(4, 4, 12, 12);
        let dst = r(100, 50, 108, 58);
        assert_eq!(relative_map(r(8, 4, 12, 6), src, dst), r(104, 50, 108, 52));
    }

    #[test]
    fn relative_map_double_scale() {
        let src = r(0, 0, 10, 10);
        let dst = r(0, 0, 20, 20);
        assert_eq!(relative_map(r(5, 0, 10, 10), src, dst), r(10, 0, 20, 20));
    }

    // ── wrap_blits ────────────────────────────────────────────────────────

    #[test]
    fn contained_source_is_one_blit() {
        let blits = wrap_blits(r(0, 0, 8, 8), r(1, 1, 5, 5), r(0, 0, 4, 4), 64);
        assert_eq!(blits, vec![WrapBlit { src: r(1, 1, 5, 5), dst: r(0, 0, 4, 4) }]);
    }

    #[test]
    fn empty_inputs_are_noops() {
        assert!(wrap_blits(r(0, 0, 8, 8), r(2, 2, 2, 6), r(0, 0, 4, 4), 64).is_empty());
        assert!(wrap_blits(r(0, 0, 8, 8), r(2, 2, 6, 6), r(0, 0, 0, 4), 64).is_empty());
    }

    #[test]
    fn horizontal_overhang_wraps_to_left_edge() {
        let blits = wrap_blits(r(0, 0, 8, 8), r(6, 0, 10, 8), r(0, 0, 4, 8), 64);
        assert_eq!(
            blits,
            vec![
                WrapBlit { src: r(6, 0, 8, 8), dst: r(0, 0, 2, 8) },
                WrapBlit { src: r(0, 0, 2, 8), dst: r(2, 0, 4, 8) },
            ]
        );
    }

    #[test]
    fn step_cap_stops_early() {
        // Spans several texture widths; one step cannot resolve it.
        let blits = wrap_blits(r(0, 0, 4, 4), r(0, 0, 40, 4), r(0, 0, 40, 4), 1);
        assert_eq!(blits.len(), 1);
    }
}
