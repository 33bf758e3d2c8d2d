use std::time::Instant;

use image::{Rgba, RgbaImage};

use crate::{
    config::Scene, rasterize_triangle, shaders::textured::TexturedShader, PixelShader, Texture,
};

/// Draws every triangle of the scene, in order, on a freshly cleared image.
///
/// Each triangle is an independent rasterizer call, so later triangles overwrite earlier ones.
pub fn render_scene<T: Texture + ?Sized>(scene: &Scene, texture: &T) -> RgbaImage {
    let output = &scene.output;
    let mut target = RgbaImage::from_pixel(output.width, output.height, Rgba(output.clear_color));

    let start = Instant::now();
    let mut total = 0usize;
    for (i, triangle) in scene.triangles.iter().enumerate() {
        let tri_start = Instant::now();
        let mut covered = 0usize;
        let mut textured = TexturedShader::new(&mut target, texture);
        let mut shader = |x: i32, y: i32, u: f32, v: f32| {
            covered += 1;
            textured.shade(x, y, u, v);
        };
        rasterize_triangle(&mut shader, triangle.vertices);

        log::debug!(
            "triangle {i}: {covered} pixels in {:?}",
            tri_start.elapsed()
        );
        total += covered;
    }

    log::info!(
        "rendered {} triangles ({total} pixels) into {}x{} in {:?}",
        scene.triangles.len(),
        output.width,
        output.height,
        start.elapsed()
    );
    target
}
