use anyhow::Result;

use crate::coords::{positive_mod, Point, Rect, Size, Viewport};
use crate::paint::{resolve_blend, BlendMode, Color};
use crate::scene::{
    DrawQueue, DrawRequest, FillRectRequest, GetPixelRequest, GradientRequest,
    InverseEllipseRequest, LineRequest, Readback, TextureRequest, TriangleRequest,
};

use super::gradient::gradient_bands;
use super::shapes::{inverse_ellipse_bands, rounded_rect_strips, triangle_spans};
use super::wrap::render_wrapped;
use super::{Backend, Flip, Texture, TextureMods};

/// Painter tuning.
///
/// Keep this structure small; the defaults suit a typical 2D game target.
#[derive(Debug, Clone)]
pub struct PainterConfig {
    /// Mapping from logical canvas positions to target pixels, used by pixel
    /// read-back.
    pub viewport: Viewport,

    /// Upper bound on horizontal slices of an inverse ellipse.
    pub max_ellipse_slices: usize,

    /// Upper bound on worklist steps when splitting one wrapped texture copy.
    pub max_wrap_steps: usize,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            max_ellipse_slices: 256,
            max_wrap_steps: 4096,
        }
    }
}

/// Turns draw requests into backend calls.
///
/// The painter holds no per-request state. What it does carry:
/// - the current clip rect, set and cleared explicitly; it does not reset
///   between frames
/// - the game time that drives animated texture samplers
///
/// Backend failures are logged and the offending request is skipped; the
/// frame always continues.
pub struct Painter<B: Backend> {
    backend: B,
    config: PainterConfig,
    clip_rect: Option<Rect>,
    game_time: f32,
}

impl<B: Backend> Painter<B> {
    pub fn new(backend: B, config: PainterConfig) -> Self {
        Self { backend, config, clip_rect: None, game_time: 0.0 }
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[inline]
    pub fn into_backend(self) -> B {
        self.backend
    }

    #[inline]
    pub fn config(&self) -> &PainterConfig {
        &self.config
    }

    /// Sets the time (seconds) at which animated samplers are evaluated.
    #[inline]
    pub fn set_game_time(&mut self, t: f32) {
        self.game_time = t;
    }

    #[inline]
    pub fn game_time(&self) -> f32 {
        self.game_time
    }

    #[inline]
    pub fn clip_rect(&self) -> Option<Rect> {
        self.clip_rect
    }

    // ── dispatch ──────────────────────────────────────────────────────────

    /// Consumes every queued request in submission order.
    ///
    /// Pixel reads observe everything submitted before them and are returned
    /// keyed by their tickets.
    pub fn flush(&mut self, queue: &mut DrawQueue) -> Readback {
        let mut readback = Readback::new();
        for request in queue.drain() {
            if let Some(color) = self.submit(&request) {
                if let DrawRequest::GetPixel(r) = &request {
                    readback.insert(r.ticket, color);
                }
            }
        }
        readback
    }

    /// Executes one request. Only pixel reads produce a value.
    pub fn submit(&mut self, request: &DrawRequest) -> Option<Color> {
        match request {
            DrawRequest::Texture(r) => self.draw_texture(r),
            DrawRequest::Gradient(r) => self.draw_gradient(r),
            DrawRequest::FilledRect(r) => self.draw_filled_rect(r),
            DrawRequest::InverseEllipse(r) => self.draw_inverse_ellipse(r),
            DrawRequest::Line(r) => self.draw_line(r),
            DrawRequest::Triangle(r) => self.draw_triangle(r),
            DrawRequest::GetPixel(r) => return Some(self.get_pixel(r)),
            DrawRequest::SetClipRect(rect) => self.set_clip_rect(*rect),
            DrawRequest::ClearClipRect => self.clear_clip_rect(),
            DrawRequest::Clear(color) => self.clear(*color),
        }
        None
    }

    // ── textures ──────────────────────────────────────────────────────────

    pub fn draw_texture(&mut self, request: &TextureRequest) {
        let texture = request.texture;
        let Some(size) = self.backend.texture_size(texture.id) else {
            log::warn!("draw_texture: unknown texture {:?}, skipping", texture.id);
            return;
        };

        let tint = request.color.to_rgba8();
        let alpha = Color::new(0.0, 0.0, 0.0, request.color.a * request.alpha).to_rgba8().a;
        let mods = TextureMods {
            color: [tint.r, tint.g, tint.b],
            alpha,
            blend: resolve_blend(request.blend),
        };
        if let Err(err) = self.backend.set_texture_mods(texture.id, mods) {
            log::warn!("draw_texture: setting texture modulation failed: {err:#}");
        }

        for quad in &request.quads {
            let src = quad.src.to_rect();
            let dst = quad.dst.to_rect();
            if let Err(err) = self.copy_sampled(texture, size, src, dst, quad.angle, request.flip) {
                log::warn!("draw_texture: copy of {src:?} to {dst:?} failed: {err:#}");
            }
        }
    }

    /// Copies `src` shifted by the texture's animated sampler offset.
    ///
    /// Wraparound is not supported together with rotation or flipping; such
    /// copies ignore the animation offset.
    fn copy_sampled(
        &mut self,
        texture: Texture,
        size: Size,
        src: Rect,
        dst: Rect,
        angle: f32,
        flip: Flip,
    ) -> Result<()> {
        if !texture.sampler.is_animated() {
            return self.backend.copy(texture.id, src, dst, angle, flip);
        }

        let offset = texture.sampler.offset_at(self.game_time, size);
        if (offset.x == 0 && offset.y == 0) || !flip.is_none() || angle != 0.0 {
            return self.backend.copy(texture.id, src, dst, angle, flip);
        }

        let bounds = Rect::from_origin_size(Point::new(0, 0), size);
        let shifted = Rect::from_xywh(
            positive_mod(src.left + offset.x, size.width),
            positive_mod(src.top + offset.y, size.height),
            src.width(),
            src.height(),
        );
        render_wrapped(&mut self.backend, texture.id, bounds, shifted, dst, self.config.max_wrap_steps)
    }

    // ── fills ─────────────────────────────────────────────────────────────

    pub fn draw_gradient(&mut self, request: &GradientRequest) {
        let bands = gradient_bands(request.top, request.bottom, request.direction, request.region);

        self.backend.set_draw_blend_mode(resolve_blend(request.blend));
        for band in bands {
            self.backend.set_draw_color(band.color.to_rgba8());
            if let Err(err) = self.backend.fill_rect(band.rect) {
                log::warn!("draw_gradient: fill failed: {err:#}");
                break;
            }
        }
    }

    pub fn draw_filled_rect(&mut self, request: &FillRectRequest) {
        let rect = Rect::from_xywh(
            request.pos.x as i32,
            request.pos.y as i32,
            request.size.x as i32,
            request.size.y as i32,
        );
        let strips = rounded_rect_strips(rect, request.radius as i32);
        if strips.is_empty() {
            return;
        }
        self.fill_batch(&strips, request.color, "draw_filled_rect");
    }

    pub fn draw_inverse_ellipse(&mut self, request: &InverseEllipseRequest) {
        let bands = inverse_ellipse_bands(
            request.pos,
            request.size,
            self.backend.output_size(),
            self.config.max_ellipse_slices,
        );
        self.fill_batch(&bands, request.color, "draw_inverse_ellipse");
    }

    fn fill_batch(&mut self, rects: &[Rect], color: Color, op: &str) {
        self.backend.set_draw_blend_mode(BlendMode::Blend);
        self.backend.set_draw_color(color.to_rgba8());
        if let Err(err) = self.backend.fill_rects(rects) {
            log::warn!("{op}: fill failed: {err:#}");
        }
    }

    // ── lines ─────────────────────────────────────────────────────────────

    pub fn draw_line(&mut self, request: &LineRequest) {
        let from = Point::new(request.pos.x as i32, request.pos.y as i32);
        let to = Point::new(request.dest_pos.x as i32, request.dest_pos.y as i32);

        self.backend.set_draw_blend_mode(BlendMode::Blend);
        self.backend.set_draw_color(request.color.to_rgba8());
        if let Err(err) = self.backend.draw_line(from, to) {
            log::warn!("draw_line: {err:#}");
        }
    }

    pub fn draw_triangle(&mut self, request: &TriangleRequest) {
        let spans = triangle_spans(request.pos1, request.pos2, request.pos3);

        self.backend.set_draw_blend_mode(BlendMode::Blend);
        self.backend.set_draw_color(request.color.to_rgba8());
        for span in spans {
            let result = self
                .backend
                .draw_line(Point::new(span.x1, span.y), Point::new(span.x2, span.y));
            if let Err(err) = result {
                log::warn!("draw_triangle: {err:#}");
                break;
            }
        }
    }

    // ── target state ──────────────────────────────────────────────────────

    /// Clears to `color`.
    ///
    /// With a clip rect set only the clip rect is overwritten (blend mode
    /// none). Without one the whole target is cleared.
    pub fn clear(&mut self, color: Color) {
        self.backend.set_draw_color(color.to_rgba8());

        let result = match self.clip_rect {
            Some(clip) => {
                self.backend.set_draw_blend_mode(BlendMode::None);
                self.backend.fill_rect(clip)
            }
            None => self.backend.clear(),
        };
        if let Err(err) = result {
            log::warn!("clear: {err:#}");
        }
    }

    pub fn set_clip_rect(&mut self, rect: Rect) {
        self.clip_rect = Some(rect);
        if let Err(err) = self.backend.set_clip_rect(Some(rect)) {
            log::warn!("set_clip_rect: backend rejected {rect:?}: {err:#}");
        }
    }

    pub fn clear_clip_rect(&mut self) {
        self.clip_rect = None;
        if let Err(err) = self.backend.set_clip_rect(None) {
            log::warn!("clear_clip_rect: {err:#}");
        }
    }

    // ── read-back ─────────────────────────────────────────────────────────

    /// Reads the target pixel under a logical position.
    ///
    /// Synchronous and potentially slow. On failure a warning is logged and
    /// opaque black is returned.
    pub fn get_pixel(&mut self, request: &GetPixelRequest) -> Color {
        let viewport = self.config.viewport;
        if !viewport.is_valid() {
            log::warn!("get_pixel: invalid viewport {viewport:?}");
            return Color::black();
        }

        let (x, y) = viewport.to_physical(request.pos.x, request.pos.y);
        match self.backend.read_pixels(Rect::from_xywh(x, y, 1, 1)) {
            Ok(px) if px.len() >= 4 => Color::from_rgb888(px[2], px[1], px[0]),
            Ok(px) => {
                log::warn!("get_pixel: backend returned {} bytes for one pixel", px.len());
                Color::black()
            }
            Err(err) => {
                log::warn!("get_pixel: failed to read pixels: {err:#}");
                Color::black()
            }
        }
    }
}
