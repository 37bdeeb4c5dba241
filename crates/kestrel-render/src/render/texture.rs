use crate::coords::{positive_mod, Point, Size, Vec2};

/// Backend-issued texture handle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub u32);

/// Per-texture animation state.
///
/// `animate` is a scroll velocity in texture pixels per second; the sampled
/// region is shifted by `animate * t` and wraps around the texture edges.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Sampler {
    pub animate: Vec2,
}

impl Sampler {
    #[inline]
    pub const fn new(animate: Vec2) -> Self {
        Self { animate }
    }

    #[inline]
    pub fn is_animated(self) -> bool {
        !self.animate.is_zero()
    }

    /// Texture-space offset at game time `t`, wrapped into `[0, w) x [0, h)`.
    ///
    /// The shift is truncated toward zero before wrapping. Returns the origin
    /// for empty texture sizes.
    pub fn offset_at(self, t: f32, size: Size) -> Point {
        if size.is_empty() {
            return Point::new(0, 0);
        }
        let shift = self.animate * t;
        Point::new(
            positive_mod(shift.x as i32, size.width),
            positive_mod(shift.y as i32, size.height),
        )
    }
}

/// Texture resource as seen by draw requests: a backend handle plus its sampler.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Texture {
    pub id: TextureId,
    pub sampler: Sampler,
}

impl Texture {
    #[inline]
    pub const fn new(id: TextureId) -> Self {
        Self { id, sampler: Sampler { animate: Vec2::zero() } }
    }

    #[inline]
    pub fn with_sampler(self, sampler: Sampler) -> Self {
        Self { sampler, ..self }
    }
}
