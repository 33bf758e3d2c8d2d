use crate::{PixelShader, Surface, Texture};

/// Copies the texel under `(u, v)` into the target.
///
/// `u` and `v` are scaled by the texture bounds and truncated toward zero, then clamped to the
/// texture, so coordinates outside of `[0, 1]` stick to the border texel. Nothing is checked
/// against the target, out of range writes are up to the [`Surface`] implementation.
pub struct TexturedShader<'a, S: ?Sized, T: ?Sized> {
    target: &'a mut S,
    texture: &'a T,
    max_x: i32,
    max_y: i32,
}

impl<'a, S, T> TexturedShader<'a, S, T>
where
    S: Surface + ?Sized,
    T: Texture + ?Sized,
{
    pub fn new(target: &'a mut S, texture: &'a T) -> Self {
        let (max_x, max_y) = texture.bounds();
        TexturedShader {
            target,
            texture,
            max_x,
            max_y,
        }
    }

    /// Texel that `(u, v)` maps to.
    #[inline]
    pub fn texel_coords(&self, u: f32, v: f32) -> (i32, i32) {
        // `min` first so that the lower bound wins for an empty texture.
        let tx = ((u * self.max_x as f32) as i32).min(self.max_x).max(0);
        let ty = ((v * self.max_y as f32) as i32).min(self.max_y).max(0);
        (tx, ty)
    }
}

impl<'a, S, T> PixelShader for TexturedShader<'a, S, T>
where
    S: Surface + ?Sized,
    T: Texture + ?Sized,
{
    #[inline]
    fn shade(&mut self, x: i32, y: i32, u: f32, v: f32) {
        let (tx, ty) = self.texel_coords(u, v);
        self.target.set(x, y, self.texture.at(tx, ty));
    }
}

/// Shader that maps texture coordinates onto `texture` and writes the result into `target`.
pub fn default_shader<'a, S, T>(target: &'a mut S, texture: &'a T) -> TexturedShader<'a, S, T>
where
    S: Surface + ?Sized,
    T: Texture + ?Sized,
{
    TexturedShader::new(target, texture)
}
