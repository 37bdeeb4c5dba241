//! Renders a short animated scene headlessly and writes PNG frames.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use kestrel_render::coords::{Rect, Rectf, Size, Vec2, Viewport};
use kestrel_render::logging::{init_logging, LoggingConfig};
use kestrel_render::paint::{Blend, Color, GradientDirection, Rgba8};
use kestrel_render::render::{Painter, PainterConfig, Sampler, SoftwareBackend, Texture};
use kestrel_render::scene::{DrawQueue, TextureRequest};
use kestrel_render::time::FrameClock;

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;
const FRAMES: u32 = 8;
const TILE: i32 = 16;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("kestrel-frames"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let config = PainterConfig {
        viewport: Viewport::identity(WIDTH as i32, HEIGHT as i32),
        ..PainterConfig::default()
    };
    let mut painter = Painter::new(SoftwareBackend::new(WIDTH, HEIGHT), config);

    let tile = painter
        .backend_mut()
        .create_texture(Size::new(TILE, TILE), tile_pixels())
        .context("uploading tile texture")?;
    let strip = Texture::new(tile).with_sampler(Sampler::new(Vec2::new(24.0, 6.0)));

    let mut clock = FrameClock::new();
    let mut queue = DrawQueue::new();

    for frame in 0..FRAMES {
        let ft = clock.advance(Duration::from_millis(125));
        painter.set_game_time(ft.game_time);

        build_scene(&mut queue, strip, ft.game_time);
        let probe = queue.push_get_pixel(Vec2::new(160.0, 120.0));
        let readback = painter.flush(&mut queue);

        if let Some(c) = readback.get(probe) {
            log::debug!("frame {frame}: center pixel ({:.2}, {:.2}, {:.2})", c.r, c.g, c.b);
        }

        let path = out_dir.join(format!("frame-{frame}.png"));
        image::save_buffer(&path, painter.backend().as_bytes(), WIDTH, HEIGHT, image::ColorType::Rgba8)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }

    Ok(())
}

fn build_scene(queue: &mut DrawQueue, strip: Texture, t: f32) {
    let w = WIDTH as f32;
    let h = HEIGHT as f32;

    queue.push_clear(Color::black());

    // Sky: a sector gradient whose region scrolls horizontally with time.
    let night = Color::rgb(0.05, 0.05, 0.2);
    let dusk = Color::rgb(0.8, 0.4, 0.3);
    let scroll = (t * 40.0) % w;
    queue.push_gradient(night, dusk, GradientDirection::VerticalSector, Rectf::new(-scroll, 0.0, 2.0 * w - scroll, h), Blend::NONE);

    // Scrolling ground strip, tiled past the texture edges.
    let tiles = (w as i32 / TILE) as f32;
    queue.push_texture(
        TextureRequest::new(strip).quad(
            Rectf::new(0.0, 0.0, tiles * TILE as f32, TILE as f32 * 2.0),
            Rectf::new(0.0, h - 48.0, w, h - 16.0),
            0.0,
        ),
    );

    let panel = Color::new(0.9, 0.9, 0.95, 0.75);
    queue.push_filled_rect(Vec2::new(16.0, 16.0), Vec2::new(96.0, 40.0), panel, 6.0);
    queue.push_filled_rect(Vec2::new(w - 112.0, 16.0), Vec2::new(96.0, 40.0), panel, 12.0);

    let sway = (t * 2.0).sin() * 20.0;
    queue.push_triangle(
        Vec2::new(160.0 + sway, 70.0),
        Vec2::new(120.0, 150.0),
        Vec2::new(200.0, 150.0),
        Color::rgb(0.2, 0.7, 0.3),
    );
    queue.push_line(Vec2::new(0.0, h - 49.0), Vec2::new(w - 1.0, h - 49.0), Color::white());

    // Everything inside the clip is redrawn as a flat inset.
    queue.push_clip_rect(Rect::from_xywh(240, 100, 64, 48));
    queue.push_clear(Color::rgb(0.1, 0.1, 0.1));
    queue.push_filled_rect(Vec2::new(230.0, 110.0), Vec2::new(90.0, 20.0), Color::rgb(1.0, 0.8, 0.0), 0.0);
    queue.push_clear_clip_rect();

    queue.push_inverse_ellipse(Vec2::new(w / 2.0, h / 2.0), Vec2::new(w * 1.1, h * 1.1), Color::new(0.0, 0.0, 0.0, 0.5));
}

/// Checkerboard with a diagonal accent, so scrolling is visible in both axes.
fn tile_pixels() -> Vec<Rgba8> {
    let mut pixels = Vec::with_capacity((TILE * TILE) as usize);
    for y in 0..TILE {
        for x in 0..TILE {
            let px = if x == y {
                Rgba8::new(250, 220, 90, 255)
            } else if (x / 4 + y / 4) % 2 == 0 {
                Rgba8::new(110, 70, 40, 255)
            } else {
                Rgba8::new(80, 50, 30, 255)
            };
            pixels.push(px);
        }
    }
    pixels
}
