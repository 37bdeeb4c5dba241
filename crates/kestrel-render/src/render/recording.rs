//! Call-recording backend for unit tests.

use anyhow::{bail, Result};

use crate::coords::{Point, Rect, Size};
use crate::paint::{BlendMode, Rgba8};

use super::{Backend, Flip, TextureId, TextureMods};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    DrawColor(Rgba8),
    BlendMode(BlendMode),
    FillRects(Vec<Rect>),
    Line(Point, Point),
    TextureMods(TextureId, TextureMods),
    Copy { texture: TextureId, src: Rect, dst: Rect, angle: f32, flip: Flip },
    Clip(Option<Rect>),
    Clear,
    ReadPixels(Rect),
}

#[derive(Debug)]
pub(crate) struct RecordingBackend {
    pub calls: Vec<Call>,
    pub size: Size,
    pub textures: Vec<(TextureId, Size)>,
    /// Bytes returned for every pixel read (B, G, R, X).
    pub pixel: [u8; 4],
    pub fail_clip: bool,
    pub fail_read: bool,
}

impl RecordingBackend {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            calls: Vec::new(),
            size: Size::new(width, height),
            textures: Vec::new(),
            pixel: [0; 4],
            fail_clip: false,
            fail_read: false,
        }
    }

    pub fn with_texture(mut self, id: TextureId, size: Size) -> Self {
        self.textures.push((id, size));
        self
    }

    pub fn copies(&self) -> Vec<(Rect, Rect)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Copy { src, dst, .. } => Some((*src, *dst)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl Backend for RecordingBackend {
    fn output_size(&self) -> Size {
        self.size
    }

    fn texture_size(&self, texture: TextureId) -> Option<Size> {
        self.textures.iter().find(|(id, _)| *id == texture).map(|(_, s)| *s)
    }

    fn set_draw_color(&mut self, color: Rgba8) {
        self.calls.push(Call::DrawColor(color));
    }

    fn set_draw_blend_mode(&mut self, mode: BlendMode) {
        self.calls.push(Call::BlendMode(mode));
    }

    fn fill_rects(&mut self, rects: &[Rect]) -> Result<()> {
        self.calls.push(Call::FillRects(rects.to_vec()));
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point) -> Result<()> {
        self.calls.push(Call::Line(from, to));
        Ok(())
    }

    fn set_texture_mods(&mut self, texture: TextureId, mods: TextureMods) -> Result<()> {
        self.calls.push(Call::TextureMods(texture, mods));
        Ok(())
    }

    fn copy(&mut self, texture: TextureId, src: Rect, dst: Rect, angle: f32, flip: Flip) -> Result<()> {
        self.calls.push(Call::Copy { texture, src, dst, angle, flip });
        Ok(())
    }

    fn set_clip_rect(&mut self, clip: Option<Rect>) -> Result<()> {
        self.calls.push(Call::Clip(clip));
        if self.fail_clip {
            bail!("clip rect rejected");
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.calls.push(Call::Clear);
        Ok(())
    }

    fn read_pixels(&mut self, rect: Rect) -> Result<Vec<u8>> {
        self.calls.push(Call::ReadPixels(rect));
        if self.fail_read {
            bail!("read-back unsupported");
        }
        Ok(self.pixel.repeat(rect.area().max(0) as usize))
    }
}
