//! Scanline fill of a single triangle with affine texture coordinate interpolation.
//!
//! The triangle is split at its middle vertex into a top half and a bottom half. Both halves are
//! walked one scanline at a time, keeping a running start and end of the span which are advanced
//! by the gradient of the edge they follow.
//!
//! ## Sources:
//! - [Textured Triangle](http://www.xbdev.net/maths_of_3d/rasterization/texturedtriangle/index.php)

use std::mem;

use crate::{PixelShader, Vertex};

/// Rasterizes the triangle `(x0, y0, u0, v0)`, `(x1, y1, u1, v1)`, `(x2, y2, u2, v2)`, calling
/// `shader` once for every covered pixel.
///
/// See [`rasterize_triangle`].
#[allow(clippy::too_many_arguments)]
pub fn rasterize<S: PixelShader + ?Sized>(
    shader: &mut S,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    u0: f32,
    v0: f32,
    u1: f32,
    v1: f32,
    u2: f32,
    v2: f32,
) {
    rasterize_triangle(
        shader,
        [
            Vertex::new(x0, y0, u0, v0),
            Vertex::new(x1, y1, u1, v1),
            Vertex::new(x2, y2, u2, v2),
        ],
    )
}

/// Rasterizes a triangle, calling `shader` once for every covered pixel.
///
/// Pixels are visited top to bottom, and left to right inside each scanline. Spans are closed on
/// both ends, so pixels exactly on an edge are covered, but no pixel is visited twice by the same
/// call. Degenerate triangles produce at most a line of pixels.
///
/// Texture coordinates are interpolated linearly in screen space, by accumulating per scanline and
/// per pixel increments in `f32`, so long edges drift a little.
pub fn rasterize_triangle<S: PixelShader + ?Sized>(shader: &mut S, vertices: [Vertex; 3]) {
    let [mut p0, mut p1, mut p2] = vertices;

    // After this, y0 <= y2 <= y1. Slot 2 holds the middle vertex and slot 1 the bottom one.
    if p1.y < p0.y {
        mem::swap(&mut p1, &mut p0);
    }
    if p2.y < p0.y {
        mem::swap(&mut p2, &mut p0);
    }
    if p1.y < p2.y {
        mem::swap(&mut p2, &mut p1);
    }

    // `short` ends at the middle vertex, `long` spans the whole height.
    let short = Gradient::along(p0, p2);
    let long = Gradient::along(p0, p1);

    // A horizontal short edge keeps its raw dx, which says nothing about its slope.
    let short_on_left = if p2.y == p0.y {
        p2.x < p0.x
    } else {
        short.x < long.x
    };

    let (mut left, mut right) = if short_on_left {
        (short, long)
    } else {
        (long, short)
    };

    let mut start = SpanEnd::at(p0);
    let mut end = SpanEnd::at(p0);

    for y in p0.y..p2.y {
        fill_span(shader, y, &start, &end);
        start.advance(&left);
        end.advance(&right);
    }

    // The short edge is done, continue that side along the edge from the middle to the bottom
    // vertex. The long side keeps accumulating from where it is.
    let bottom = Gradient::along(p2, p1);
    if short_on_left {
        left = bottom;
        start = SpanEnd::at(p2);
    } else {
        right = bottom;
        end = SpanEnd::at(p2);
    }

    for y in p2.y..=p1.y {
        if y == p1.y {
            // The last row runs between exact vertices, whichever tied vertex sits in slot 1.
            let (long_end, short_end) = (end_of(p0, p1), end_of(p2, p1));
            if short_on_left {
                (start, end) = (short_end.unwrap_or(start), long_end.unwrap_or(end));
            } else {
                (start, end) = (long_end.unwrap_or(start), short_end.unwrap_or(end));
            }
        }
        fill_span(shader, y, &start, &end);
        start.advance(&left);
        end.advance(&right);
    }
}

/// Exact end of the edge `from -> to`, unless it is horizontal and was never stepped along.
#[inline]
fn end_of(from: Vertex, to: Vertex) -> Option<SpanEnd> {
    (from.y != to.y).then(|| SpanEnd::at(to))
}

/// Change of x, u and v for every unit step in y along an edge.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Gradient {
    x: f32,
    u: f32,
    v: f32,
}

impl Gradient {
    /// A horizontal edge has no gradient. In that case the raw deltas are kept, which is harmless
    /// because no scanline is stepped along it.
    #[inline]
    fn along(from: Vertex, to: Vertex) -> Self {
        // Widened so that far apart coordinates cannot overflow.
        let mut grad = Gradient {
            x: (i64::from(to.x) - i64::from(from.x)) as f32,
            u: to.u - from.u,
            v: to.v - from.v,
        };

        let dy = i64::from(to.y) - i64::from(from.y);
        if dy != 0 {
            let dy = dy as f32;
            grad.x /= dy;
            grad.u /= dy;
            grad.v /= dy;
        }
        grad
    }
}

/// Running position and texture coordinate of one end of the current span.
#[derive(Clone, Copy, Debug, PartialEq)]
struct SpanEnd {
    x: f32,
    u: f32,
    v: f32,
}

impl SpanEnd {
    #[inline]
    fn at(vertex: Vertex) -> Self {
        SpanEnd {
            x: vertex.x as f32,
            u: vertex.u,
            v: vertex.v,
        }
    }

    #[inline]
    fn advance(&mut self, grad: &Gradient) {
        self.x += grad.x;
        self.u += grad.u;
        self.v += grad.v;
    }
}

#[inline(always)]
fn fill_span<S: PixelShader + ?Sized>(shader: &mut S, y: i32, start: &SpanEnd, end: &SpanEnd) {
    let width = end.x - start.x;
    let mut du = end.u - start.u;
    let mut dv = end.v - start.v;

    // Zero width spans still produce one pixel, carrying the start coordinate.
    if width != 0.0 {
        du /= width;
        dv /= width;
    }

    let mut u = start.u;
    let mut v = start.v;
    for x in start.x.floor() as i32..=end.x.floor() as i32 {
        shader.shade(x, y, u, v);
        u += du;
        v += dv;
    }
}
