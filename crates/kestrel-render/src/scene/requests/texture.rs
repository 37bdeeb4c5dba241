use crate::coords::Rectf;
use crate::paint::{Blend, Color};
use crate::render::{Flip, Texture};
use crate::scene::{DrawQueue, DrawRequest};

/// One source-to-destination copy of a texture request.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextureQuad {
    /// Region in texture pixels. May run past the texture edges when the
    /// texture's sampler is animated.
    pub src: Rectf,
    /// Region in target pixels.
    pub dst: Rectf,
    /// Clockwise rotation in degrees about the center of `dst`.
    pub angle: f32,
}

impl TextureQuad {
    #[inline]
    pub const fn new(src: Rectf, dst: Rectf, angle: f32) -> Self {
        Self { src, dst, angle }
    }
}

/// Texture draw payload: any number of quads sharing texture, tint and blend.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureRequest {
    pub texture: Texture,
    pub quads: Vec<TextureQuad>,
    pub flip: Flip,
    /// Tint multiplied into the texels.
    pub color: Color,
    /// Opacity multiplied into the tint alpha.
    pub alpha: f32,
    pub blend: Blend,
}

impl TextureRequest {
    #[inline]
    pub fn new(texture: Texture) -> Self {
        Self {
            texture,
            quads: Vec::new(),
            flip: Flip::NONE,
            color: Color::white(),
            alpha: 1.0,
            blend: Blend::default(),
        }
    }

    #[inline]
    pub fn quad(mut self, src: Rectf, dst: Rectf, angle: f32) -> Self {
        self.quads.push(TextureQuad::new(src, dst, angle));
        self
    }

    #[inline]
    pub fn flip(mut self, flip: Flip) -> Self {
        self.flip = flip;
        self
    }

    #[inline]
    pub fn tint(mut self, color: Color, alpha: f32) -> Self {
        self.color = color;
        self.alpha = alpha;
        self
    }

    #[inline]
    pub fn blend(mut self, blend: Blend) -> Self {
        self.blend = blend;
        self
    }
}

impl DrawQueue {
    /// Records a texture draw request.
    #[inline]
    pub fn push_texture(&mut self, request: TextureRequest) {
        self.push(DrawRequest::Texture(request));
    }

    /// Records a single untinted, unrotated copy of `src` into `dst`.
    #[inline]
    pub fn push_sprite(&mut self, texture: Texture, src: Rectf, dst: Rectf) {
        self.push_texture(TextureRequest::new(texture).quad(src, dst, 0.0));
    }
}
