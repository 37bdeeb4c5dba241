use anyhow::Result;

use crate::coords::{Point, Rect, Size};
use crate::paint::{BlendMode, Rgba8};

use super::TextureId;

/// Mirroring applied while copying a texture.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Flip {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Flip {
    pub const NONE: Flip = Flip { horizontal: false, vertical: false };
    pub const HORIZONTAL: Flip = Flip { horizontal: true, vertical: false };
    pub const VERTICAL: Flip = Flip { horizontal: false, vertical: true };

    #[inline]
    pub fn is_none(self) -> bool {
        !self.horizontal && !self.vertical
    }
}

/// Per-texture modulation applied by subsequent copies of that texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureMods {
    /// Multiplies the texel RGB (255 = unchanged).
    pub color: [u8; 3],
    /// Multiplies the texel alpha (255 = unchanged).
    pub alpha: u8,
    pub blend: BlendMode,
}

impl Default for TextureMods {
    fn default() -> Self {
        Self { color: [255; 3], alpha: 255, blend: BlendMode::Blend }
    }
}

/// Pixel operations the painter issues against a render target.
///
/// The model is a stateful 2D renderer: draw color, draw blend mode and clip
/// rect persist until changed. Context creation and teardown belong to the
/// implementor.
///
/// Fallible operations return `anyhow::Result`; the painter logs failures and
/// carries on with the frame.
pub trait Backend {
    /// Size of the render target in pixels.
    fn output_size(&self) -> Size;

    /// Size of a texture, or `None` for an unknown handle.
    fn texture_size(&self, texture: TextureId) -> Option<Size>;

    fn set_draw_color(&mut self, color: Rgba8);

    fn set_draw_blend_mode(&mut self, mode: BlendMode);

    /// Fills every rect with the draw color. Empty rects are ignored.
    fn fill_rects(&mut self, rects: &[Rect]) -> Result<()>;

    fn fill_rect(&mut self, rect: Rect) -> Result<()> {
        self.fill_rects(std::slice::from_ref(&rect))
    }

    /// Draws a one-pixel line with both endpoints included.
    fn draw_line(&mut self, from: Point, to: Point) -> Result<()>;

    fn set_texture_mods(&mut self, texture: TextureId, mods: TextureMods) -> Result<()>;

    /// Copies `src` (texture pixels) into `dst` (target pixels), rotated by
    /// `angle` degrees clockwise about the center of `dst`.
    fn copy(
        &mut self,
        texture: TextureId,
        src: Rect,
        dst: Rect,
        angle: f32,
        flip: Flip,
    ) -> Result<()>;

    /// Restricts subsequent drawing to `clip`; `None` removes the restriction.
    fn set_clip_rect(&mut self, clip: Option<Rect>) -> Result<()>;

    /// Fills the whole target with the draw color, ignoring clip and blend mode.
    fn clear(&mut self) -> Result<()>;

    /// Reads `rect` as packed 32-bit XRGB8888 little-endian pixels
    /// (bytes B, G, R, X per pixel), row-major.
    fn read_pixels(&mut self, rect: Rect) -> Result<Vec<u8>>;
}
