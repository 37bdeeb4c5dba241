use crate::coords::Vec2;

/// One horizontal scanline from `x1` to `x2` (inclusive) on row `y`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Span {
    pub y: i32,
    pub x1: i32,
    pub x2: i32,
}

/// Triangle edge with `p1` the endpoint with the smaller y.
#[derive(Debug, Copy, Clone)]
struct Edge {
    p1: Vec2,
    p2: Vec2,
}

impl Edge {
    fn new(a: Vec2, b: Vec2) -> Self {
        if a.y < b.y { Self { p1: a, p2: b } } else { Self { p1: b, p2: a } }
    }

    fn dy(self) -> f32 {
        self.p2.y - self.p1.y
    }

    fn dx(self) -> f32 {
        self.p2.x - self.p1.x
    }
}

/// Scan-converts a filled triangle into horizontal spans.
///
/// Vertices are snapped to whole pixels. The edge with the largest vertical
/// extent is the baseline; spans run from it to each of the two other edges
/// over that edge's rows. Edges with no vertical extent contribute nothing.
pub fn triangle_spans(a: Vec2, b: Vec2, c: Vec2) -> Vec<Span> {
    let snap = |v: Vec2| Vec2::new(v.x as i32 as f32, v.y as i32 as f32);
    let (a, b, c) = (snap(a), snap(b), snap(c));

    let edges = [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)];

    let mut long = 0;
    let mut max_len = 0;
    for (i, e) in edges.iter().enumerate() {
        let len = e.dy() as i32;
        if len > max_len {
            max_len = len;
            long = i;
        }
    }

    let mut spans = Vec::with_capacity(max_len.max(0) as usize);
    spans_between_edges(edges[long], edges[(long + 1) % 3], &mut spans);
    spans_between_edges(edges[long], edges[(long + 2) % 3], &mut spans);
    spans
}

fn spans_between_edges(long: Edge, short: Edge, out: &mut Vec<Span>) {
    let long_dy = long.dy();
    let short_dy = short.dy();
    if long_dy == 0.0 || short_dy == 0.0 {
        return;
    }

    let mut f_long = (short.p1.y - long.p1.y) / long_dy;
    let mut f_short = 0.0f32;
    let step_long = 1.0 / long_dy;
    let step_short = 1.0 / short_dy;

    for y in short.p1.y as i32..short.p2.y as i32 {
        out.push(Span {
            y,
            x1: (long.p1.x + long.dx() * f_long) as i32,
            x2: (short.p1.x + short.dx() * f_short) as i32,
        });
        f_long += step_long;
        f_short += step_short;
    }
}
