use bytemuck::{Pod, Zeroable};

/// Normalized straight-alpha RGBA color, channels nominally in `[0, 1]`.
///
/// This is the representation gameplay and editor code hands to the painter.
/// Backends work in 8-bit channels; see [`Color::to_rgba8`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn from_rgba8(c: Rgba8) -> Self {
        Self::new(
            c.r as f32 / 255.0,
            c.g as f32 / 255.0,
            c.b as f32 / 255.0,
            c.a as f32 / 255.0,
        )
    }

    /// Opaque color from the three channels of a packed RGB888 pixel.
    #[inline]
    pub fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(Rgba8::new(r, g, b, 255))
    }

    /// Converts to 8-bit channels, truncating `channel * 255` after clamping.
    #[inline]
    pub fn to_rgba8(self) -> Rgba8 {
        Rgba8::new(channel8(self.r), channel8(self.g), channel8(self.b), channel8(self.a))
    }

    /// Linear interpolation; `t = 0` yields `self`, `t = 1` yields `other`.
    /// `t` is not clamped so callers may extrapolate; channels are clamped on
    /// conversion to 8 bit instead.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let s = 1.0 - t;
        Color::new(
            s * self.r + t * other.r,
            s * self.g + t * other.g,
            s * self.b + t * other.b,
            s * self.a + t * other.a,
        )
    }

    /// Largest absolute per-channel difference, alpha included.
    #[inline]
    pub fn max_channel_delta(self, other: Color) -> f32 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
            .max((self.a - other.a).abs())
    }
}

#[inline]
fn channel8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0) as u8
}

/// 8-bit RGBA pixel as stored by byte-oriented backends.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_rgba8_truncates_and_clamps() {
        assert_eq!(Color::new(1.0, 0.5, -0.2, 1.7).to_rgba8(), Rgba8::new(255, 127, 0, 255));
    }

    #[test]
    fn rgb888_is_opaque() {
        let c = Color::from_rgb888(0, 0, 255);
        assert_eq!(c, Color::rgb(0.0, 0.0, 1.0));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Color::rgb(1.0, 0.0, 0.0);
        let b = Color::rgb(0.0, 0.0, 1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn max_channel_delta_includes_alpha() {
        let a = Color::new(0.2, 0.2, 0.2, 1.0);
        let b = Color::new(0.3, 0.1, 0.2, 0.0);
        assert_eq!(a.max_channel_delta(b), 1.0);
    }
}
