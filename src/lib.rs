pub mod buf;
pub mod config;
pub mod prim2d;
pub mod render;
pub mod shaders;
pub mod texture;

use serde::Deserialize;

pub use prim2d::scanline::{rasterize, rasterize_triangle};
pub use shaders::textured::{default_shader, TexturedShader};

/// RGBA color, one byte per channel.
pub type Pixel = [u8; 4];

/// A triangle corner in screen space with its normalized texture coordinate.
///
/// `u` and `v` are expected to lie in `[0, 1]` but nothing enforces it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
    pub u: f32,
    pub v: f32,
}

impl Vertex {
    pub fn new(x: i32, y: i32, u: f32, v: f32) -> Self {
        Vertex { x, y, u, v }
    }
}

/// Called once per covered pixel with the interpolated texture coordinate.
///
/// Implementations must cope with any number of calls in any order, including degenerate single
/// pixel spans. Every `FnMut(i32, i32, f32, f32)` is a shader.
pub trait PixelShader {
    fn shade(&mut self, x: i32, y: i32, u: f32, v: f32);
}

impl<F> PixelShader for F
where
    F: FnMut(i32, i32, f32, f32),
{
    #[inline(always)]
    fn shade(&mut self, x: i32, y: i32, u: f32, v: f32) {
        self(x, y, u, v)
    }
}

/// Something pixels can be written to.
///
/// Nothing upstream checks `(x, y)` against the surface, so implementations decide what an out of
/// range write means.
pub trait Surface {
    fn set(&mut self, x: i32, y: i32, color: Pixel);
}

/// Something texels can be read from.
pub trait Texture {
    /// Largest valid `(x, y)` index, inclusive. Negative for an empty texture.
    fn bounds(&self) -> (i32, i32);

    fn at(&self, x: i32, y: i32) -> Pixel;
}
