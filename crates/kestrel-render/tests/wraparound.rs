//! Tiling properties of the wraparound splitter, checked pixel by pixel.

use kestrel_render::coords::Rect;
use kestrel_render::render::wrap::{wrap_blits, WrapBlit};

fn coverage(blits: &[WrapBlit], dst: Rect) -> Vec<u32> {
    let mut hits = vec![0u32; dst.area() as usize];
    for blit in blits {
        for y in blit.dst.top..blit.dst.bottom {
            for x in blit.dst.left..blit.dst.right {
                assert!(dst.contains_point(x, y), "blit {blit:?} escapes {dst:?}");
                hits[((y - dst.top) * dst.width() + (x - dst.left)) as usize] += 1;
            }
        }
    }
    hits
}

#[test]
fn one_to_one_copy_tiles_the_texture() {
    let bounds = Rect::from_xywh(0, 0, 5, 4);
    let src = Rect::from_xywh(3, 2, 12, 9);
    let dst = Rect::from_xywh(0, 0, 12, 9);

    let blits = wrap_blits(bounds, src, dst, 4096);
    assert!(coverage(&blits, dst).iter().all(|&n| n == 1));

    for blit in &blits {
        assert!(bounds.contains(blit.src), "{blit:?} samples outside the texture");
        assert_eq!(blit.src.size(), blit.dst.size());
        for y in blit.dst.top..blit.dst.bottom {
            for x in blit.dst.left..blit.dst.right {
                let tx = blit.src.left + (x - blit.dst.left);
                let ty = blit.src.top + (y - blit.dst.top);
                assert_eq!((tx, ty), ((3 + x) % 5, (2 + y) % 4), "pixel ({x}, {y})");
            }
        }
    }
}

#[test]
fn scaled_copy_covers_destination_exactly_once() {
    let bounds = Rect::from_xywh(0, 0, 5, 4);
    let src = Rect::from_xywh(4, 3, 11, 7);
    let dst = Rect::from_xywh(10, 20, 33, 21);

    let blits = wrap_blits(bounds, src, dst, 4096);
    assert!(blits.iter().all(|b| bounds.contains(b.src)));
    assert!(coverage(&blits, dst).iter().all(|&n| n == 1));
}

#[test]
fn step_cap_truncates_output() {
    let bounds = Rect::from_xywh(0, 0, 2, 2);
    let src = Rect::from_xywh(1, 1, 40, 40);
    let dst = Rect::from_xywh(0, 0, 40, 40);

    let full = wrap_blits(bounds, src, dst, 4096);
    let capped = wrap_blits(bounds, src, dst, 3);
    assert!(capped.len() < full.len());
    assert!(coverage(&capped, dst).iter().all(|&n| n <= 1));
}
