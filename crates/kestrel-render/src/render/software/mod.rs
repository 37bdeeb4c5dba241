//! CPU reference backend.
//!
//! Renders into an in-memory RGBA8 framebuffer. It favours straightforward
//! per-pixel loops over speed; its job is to give the painter an exact,
//! inspectable target for tests and headless rendering.

mod blend;
mod error;

use anyhow::Result;

use crate::coords::{Point, Rect, Size};
use crate::paint::{BlendMode, Rgba8};

use super::{Backend, Flip, TextureId, TextureMods};

use self::blend::{blend_pixel, modulate};

pub use error::BackendError;

struct TextureSlot {
    size: Size,
    pixels: Vec<Rgba8>,
    mods: TextureMods,
}

/// In-memory render target implementing [`Backend`].
pub struct SoftwareBackend {
    size: Size,
    pixels: Vec<Rgba8>,
    draw_color: Rgba8,
    draw_blend: BlendMode,
    clip: Option<Rect>,
    textures: Vec<TextureSlot>,
}

impl SoftwareBackend {
    /// Creates a `width x height` target filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        let size = Size::new(width.min(i32::MAX as u32) as i32, height.min(i32::MAX as u32) as i32);
        Self {
            size,
            pixels: vec![Rgba8::default(); size.area() as usize],
            draw_color: Rgba8::new(0, 0, 0, 255),
            draw_blend: BlendMode::None,
            clip: None,
            textures: Vec::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Framebuffer pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Framebuffer as tightly packed RGBA bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Uploads a texture from row-major pixels.
    pub fn create_texture(&mut self, size: Size, pixels: Vec<Rgba8>) -> Result<TextureId, BackendError> {
        let expected = size.area() as usize;
        if pixels.len() != expected {
            return Err(BackendError::BadTextureData { expected, actual: pixels.len() });
        }
        let id = TextureId(self.textures.len() as u32);
        self.textures.push(TextureSlot { size, pixels, mods: TextureMods::default() });
        log::debug!("software backend: texture {} uploaded ({}x{})", id.0, size.width, size.height);
        Ok(id)
    }

    /// Uploads a texture from tightly packed RGBA bytes.
    pub fn create_texture_from_bytes(&mut self, size: Size, bytes: &[u8]) -> Result<TextureId, BackendError> {
        let pixels: &[Rgba8] = bytemuck::try_cast_slice(bytes).map_err(|_| {
            BackendError::BadTextureData { expected: size.area() as usize, actual: bytes.len() / 4 }
        })?;
        self.create_texture(size, pixels.to_vec())
    }

    #[inline]
    fn bounds(&self) -> Rect {
        Rect::from_origin_size(Point::new(0, 0), self.size)
    }

    /// Area drawing may touch: the target bounds, narrowed by the clip rect.
    #[inline]
    fn drawable(&self) -> Rect {
        match self.clip {
            Some(clip) => self.bounds().intersection(clip),
            None => self.bounds(),
        }
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.bounds()
            .contains_point(x, y)
            .then(|| y as usize * self.size.width as usize + x as usize)
    }

    #[inline]
    fn put(&mut self, x: i32, y: i32, src: Rgba8, mode: BlendMode) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = blend_pixel(self.pixels[i], src, mode);
        }
    }

    fn slot(&self, texture: TextureId) -> Result<&TextureSlot, BackendError> {
        self.textures.get(texture.0 as usize).ok_or(BackendError::UnknownTexture(texture))
    }
}

impl Backend for SoftwareBackend {
    fn output_size(&self) -> Size {
        self.size
    }

    fn texture_size(&self, texture: TextureId) -> Option<Size> {
        self.slot(texture).ok().map(|s| s.size)
    }

    fn set_draw_color(&mut self, color: Rgba8) {
        self.draw_color = color;
    }

    fn set_draw_blend_mode(&mut self, mode: BlendMode) {
        self.draw_blend = mode;
    }

    fn fill_rects(&mut self, rects: &[Rect]) -> Result<()> {
        let area = self.drawable();
        let (color, mode) = (self.draw_color, self.draw_blend);
        for rect in rects {
            let r = rect.intersection(area);
            for y in r.top..r.bottom {
                for x in r.left..r.right {
                    self.put(x, y, color, mode);
                }
            }
        }
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point) -> Result<()> {
        let area = self.drawable();
        let (color, mode) = (self.draw_color, self.draw_blend);

        // Bresenham, both endpoints inclusive.
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let (mut x, mut y) = (from.x, from.y);
        let mut err = dx + dy;

        loop {
            if area.contains_point(x, y) {
                self.put(x, y, color, mode);
            }
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
        Ok(())
    }

    fn set_texture_mods(&mut self, texture: TextureId, mods: TextureMods) -> Result<()> {
        let slot = self
            .textures
            .get_mut(texture.0 as usize)
            .ok_or(BackendError::UnknownTexture(texture))?;
        slot.mods = mods;
        Ok(())
    }

    fn copy(&mut self, texture: TextureId, src: Rect, dst: Rect, angle: f32, flip: Flip) -> Result<()> {
        let area = self.drawable();
        let slot = self.slot(texture)?;

        // Out-of-texture sources are clamped, stretching what remains over `dst`.
        let src = src.intersection(Rect::from_origin_size(Point::new(0, 0), slot.size));
        if src.is_empty() || dst.is_empty() {
            return Ok(());
        }

        let (sin, cos) = if angle == 0.0 { (0.0, 1.0) } else { angle.to_radians().sin_cos() };
        let cx = dst.left as f32 + dst.width() as f32 / 2.0;
        let cy = dst.top as f32 + dst.height() as f32 / 2.0;

        // Bounding box of the rotated destination.
        let hw = dst.width() as f32 / 2.0;
        let hh = dst.height() as f32 / 2.0;
        let ex = hw * cos.abs() + hh * sin.abs();
        let ey = hw * sin.abs() + hh * cos.abs();
        let reach = Rect::new(
            (cx - ex).floor() as i32,
            (cy - ey).floor() as i32,
            (cx + ex).ceil() as i32,
            (cy + ey).ceil() as i32,
        )
        .intersection(area);

        let mut writes = Vec::with_capacity(reach.area().max(0) as usize);
        for y in reach.top..reach.bottom {
            for x in reach.left..reach.right {
                // Undo the clockwise rotation around the destination center.
                let px = x as f32 + 0.5 - cx;
                let py = y as f32 + 0.5 - cy;
                let ux = px * cos + py * sin + hw;
                let uy = -px * sin + py * cos + hh;
                if ux < 0.0 || uy < 0.0 {
                    continue;
                }
                let (mut lx, mut ly) = (ux as i32, uy as i32);
                if lx >= dst.width() || ly >= dst.height() {
                    continue;
                }
                if flip.horizontal {
                    lx = dst.width() - 1 - lx;
                }
                if flip.vertical {
                    ly = dst.height() - 1 - ly;
                }

                let tx = src.left + (lx as i64 * src.width() as i64 / dst.width() as i64) as i32;
                let ty = src.top + (ly as i64 * src.height() as i64 / dst.height() as i64) as i32;
                let texel = slot.pixels[ty as usize * slot.size.width as usize + tx as usize];
                writes.push((x, y, modulate(texel, slot.mods.color, slot.mods.alpha)));
            }
        }

        let mode = slot.mods.blend;
        for (x, y, px) in writes {
            self.put(x, y, px, mode);
        }
        Ok(())
    }

    fn set_clip_rect(&mut self, clip: Option<Rect>) -> Result<()> {
        self.clip = clip;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.pixels.fill(self.draw_color);
        Ok(())
    }

    fn read_pixels(&mut self, rect: Rect) -> Result<Vec<u8>> {
        if !self.bounds().contains(rect) {
            return Err(BackendError::OutOfBounds { rect, size: self.size }.into());
        }

        let mut out = Vec::with_capacity(rect.area() as usize * 4);
        for y in rect.top..rect.bottom {
            for x in rect.left..rect.right {
                let p = self.pixels[y as usize * self.size.width as usize + x as usize];
                let xrgb = (p.r as u32) << 16 | (p.g as u32) << 8 | p.b as u32;
                out.extend_from_slice(&xrgb.to_le_bytes());
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    const RED: Rgba8 = Rgba8::new(255, 0, 0, 255);
    const BLUE: Rgba8 = Rgba8::new(0, 0, 255, 255);

    fn checker(size: i32) -> Vec<Rgba8> {
        (0..size * size)
            .map(|i| Rgba8::new((i % size) as u8, (i / size) as u8, 0, 255))
            .collect()
    }

    // ── fills ─────────────────────────────────────────────────────────────

    #[test]
    fn new_target_is_transparent() {
        let b = SoftwareBackend::new(3, 2);
        let clear = Color::transparent().to_rgba8();
        assert_eq!(b.pixels().len(), 6);
        assert!(b.pixels().iter().all(|p| *p == clear));
    }

    #[test]
    fn fill_respects_clip_and_clear_ignores_it() {
        let mut b = SoftwareBackend::new(8, 8);
        b.set_clip_rect(Some(Rect::from_xywh(2, 2, 2, 2))).unwrap();
        b.set_draw_color(RED);
        b.fill_rect(Rect::from_xywh(0, 0, 8, 8)).unwrap();
        assert_eq!(b.pixel(2, 2), Some(RED));
        assert_eq!(b.pixel(1, 1), Some(Rgba8::default()));

        b.set_draw_color(BLUE);
        b.clear().unwrap();
        assert!(b.pixels().iter().all(|p| *p == BLUE));
    }

    #[test]
    fn line_includes_both_endpoints() {
        let mut b = SoftwareBackend::new(8, 8);
        b.set_draw_color(RED);
        b.draw_line(Point::new(1, 1), Point::new(5, 3)).unwrap();
        assert_eq!(b.pixel(1, 1), Some(RED));
        assert_eq!(b.pixel(5, 3), Some(RED));
        assert_eq!(b.pixels().iter().filter(|p| **p == RED).count(), 5);
    }

    // ── textures ──────────────────────────────────────────────────────────

    #[test]
    fn texture_size_mismatch_is_rejected() {
        let mut b = SoftwareBackend::new(4, 4);
        let err = b.create_texture(Size::new(2, 2), vec![RED; 3]).unwrap_err();
        assert_eq!(err, BackendError::BadTextureData { expected: 4, actual: 3 });
    }

    #[test]
    fn copy_one_to_one() {
        let mut b = SoftwareBackend::new(8, 8);
        let tex = b.create_texture(Size::new(4, 4), checker(4)).unwrap();
        b.copy(tex, Rect::from_xywh(1, 1, 2, 2), Rect::from_xywh(5, 5, 2, 2), 0.0, Flip::NONE).unwrap();
        assert_eq!(b.pixel(5, 5), Some(Rgba8::new(1, 1, 0, 255)));
        assert_eq!(b.pixel(6, 6), Some(Rgba8::new(2, 2, 0, 255)));
    }

    #[test]
    fn copy_flipped_horizontally() {
        let mut b = SoftwareBackend::new(4, 4);
        let tex = b.create_texture(Size::new(4, 4), checker(4)).unwrap();
        b.copy(tex, Rect::from_xywh(0, 0, 4, 4), Rect::from_xywh(0, 0, 4, 4), 0.0, Flip::HORIZONTAL).unwrap();
        assert_eq!(b.pixel(0, 0), Some(Rgba8::new(3, 0, 0, 255)));
        assert_eq!(b.pixel(3, 2), Some(Rgba8::new(0, 2, 0, 255)));
    }

    #[test]
    fn copy_flipped_vertically() {
        let mut b = SoftwareBackend::new(4, 4);
        let tex = b.create_texture(Size::new(4, 4), checker(4)).unwrap();
        b.copy(tex, Rect::from_xywh(0, 0, 4, 4), Rect::from_xywh(0, 0, 4, 4), 0.0, Flip::VERTICAL).unwrap();
        assert_eq!(b.pixel(0, 0), Some(Rgba8::new(0, 3, 0, 255)));
        assert_eq!(b.pixel(2, 3), Some(Rgba8::new(2, 0, 0, 255)));
    }

    #[test]
    fn copy_rotated_half_turn_matches_double_flip() {
        let mut rotated = SoftwareBackend::new(4, 4);
        let tex = rotated.create_texture(Size::new(4, 4), checker(4)).unwrap();
        rotated.copy(tex, Rect::from_xywh(0, 0, 4, 4), Rect::from_xywh(0, 0, 4, 4), 180.0, Flip::NONE).unwrap();

        let mut flipped = SoftwareBackend::new(4, 4);
        let tex = flipped.create_texture(Size::new(4, 4), checker(4)).unwrap();
        let both = Flip { horizontal: true, vertical: true };
        flipped.copy(tex, Rect::from_xywh(0, 0, 4, 4), Rect::from_xywh(0, 0, 4, 4), 0.0, both).unwrap();

        assert_eq!(rotated.pixels(), flipped.pixels());
    }

    #[test]
    fn unknown_texture_errors() {
        let mut b = SoftwareBackend::new(4, 4);
        let err = b.copy(TextureId(3), Rect::from_xywh(0, 0, 1, 1), Rect::from_xywh(0, 0, 1, 1), 0.0, Flip::NONE);
        assert!(err.is_err());
    }

    // ── read-back ─────────────────────────────────────────────────────────

    #[test]
    fn read_pixels_is_xrgb_little_endian() {
        let mut b = SoftwareBackend::new(2, 1);
        b.set_draw_color(Rgba8::new(10, 20, 30, 255));
        b.clear().unwrap();
        assert_eq!(b.read_pixels(Rect::from_xywh(1, 0, 1, 1)).unwrap(), vec![30, 20, 10, 0]);
    }

    #[test]
    fn read_outside_target_fails() {
        let mut b = SoftwareBackend::new(2, 2);
        assert!(b.read_pixels(Rect::from_xywh(1, 1, 2, 2)).is_err());
    }

    #[test]
    fn bytes_view_matches_pixels() {
        let mut b = SoftwareBackend::new(1, 1);
        b.set_draw_color(Rgba8::new(1, 2, 3, 4));
        b.clear().unwrap();
        assert_eq!(b.as_bytes(), &[1, 2, 3, 4]);
    }
}
