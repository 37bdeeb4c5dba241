//! Per-pixel blend equations on 8-bit channels.

use crate::paint::{BlendMode, Rgba8};

#[inline]
fn mul255(a: u32, b: u32) -> u32 {
    (a * b + 127) / 255
}

/// Composites `src` onto `dst`.
///
/// - `None`: `src`
/// - `Blend`: `src·a + dst·(1−a)`, alpha `a + dstA·(1−a)`
/// - `Add`: `src·a + dst`, alpha kept
/// - `Mod`: `src·dst`, alpha kept
pub(crate) fn blend_pixel(dst: Rgba8, src: Rgba8, mode: BlendMode) -> Rgba8 {
    let a = src.a as u32;
    let inv = 255 - a;
    match mode {
        BlendMode::None => src,
        BlendMode::Blend => {
            let ch = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv + 127) / 255) as u8;
            Rgba8::new(
                ch(src.r, dst.r),
                ch(src.g, dst.g),
                ch(src.b, dst.b),
                (a + mul255(dst.a as u32, inv)).min(255) as u8,
            )
        }
        BlendMode::Add => {
            let ch = |s: u8, d: u8| (mul255(s as u32, a) + d as u32).min(255) as u8;
            Rgba8::new(ch(src.r, dst.r), ch(src.g, dst.g), ch(src.b, dst.b), dst.a)
        }
        BlendMode::Mod => {
            let ch = |s: u8, d: u8| mul255(s as u32, d as u32) as u8;
            Rgba8::new(ch(src.r, dst.r), ch(src.g, dst.g), ch(src.b, dst.b), dst.a)
        }
    }
}

/// Applies a texture's color and alpha modulation to a texel.
#[inline]
pub(crate) fn modulate(texel: Rgba8, color: [u8; 3], alpha: u8) -> Rgba8 {
    Rgba8::new(
        mul255(texel.r as u32, color[0] as u32) as u8,
        mul255(texel.g as u32, color[1] as u32) as u8,
        mul255(texel.b as u32, color[2] as u32) as u8,
        mul255(texel.a as u32, alpha as u32) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREY: Rgba8 = Rgba8::new(100, 100, 100, 255);

    #[test]
    fn opaque_blend_replaces() {
        let src = Rgba8::new(0, 0, 255, 255);
        assert_eq!(blend_pixel(GREY, src, BlendMode::Blend), src);
    }

    #[test]
    fn transparent_blend_keeps_destination() {
        assert_eq!(blend_pixel(GREY, Rgba8::new(255, 0, 0, 0), BlendMode::Blend), GREY);
    }

    #[test]
    fn half_alpha_blend_mixes() {
        let out = blend_pixel(Rgba8::new(0, 0, 0, 255), Rgba8::new(255, 255, 255, 128), BlendMode::Blend);
        assert_eq!(out, Rgba8::new(128, 128, 128, 255));
    }

    #[test]
    fn add_saturates_and_keeps_alpha() {
        let out = blend_pixel(Rgba8::new(200, 10, 0, 90), Rgba8::new(100, 100, 0, 255), BlendMode::Add);
        assert_eq!(out, Rgba8::new(255, 110, 0, 90));
    }

    #[test]
    fn mod_with_white_is_identity() {
        assert_eq!(blend_pixel(GREY, Rgba8::new(255, 255, 255, 255), BlendMode::Mod), GREY);
    }

    #[test]
    fn none_ignores_alpha() {
        let src = Rgba8::new(1, 2, 3, 0);
        assert_eq!(blend_pixel(GREY, src, BlendMode::None), src);
    }

    #[test]
    fn full_modulation_is_identity() {
        let texel = Rgba8::new(12, 200, 77, 190);
        assert_eq!(modulate(texel, [255; 3], 255), texel);
    }
}
