use criterion::{black_box, criterion_group, criterion_main, Criterion};

use texraster::{
    buf::PixelBuf, rasterize_triangle, shaders::textured::TexturedShader, texture::OwnedTexture,
    Vertex,
};

fn triangle_rasterization(c: &mut Criterion) {
    const WIDTH: usize = 720;
    const HEIGHT: usize = 720;

    let mut group = c.benchmark_group("Triangle rasterization");

    let texture = OwnedTexture::checkerboard(256, 16, [[0xff; 4], [0xff, 0x00, 0xff, 0xff]]);
    let mut pixel_storage = vec![[0u8; 4]; WIDTH * HEIGHT];
    let mut pixels = PixelBuf::new(&mut pixel_storage, WIDTH, HEIGHT);
    pixels.fill([0x61, 0xb7, 0xe8, 0xff]);

    let large = [
        Vertex::new(10, 10, 0.0, 0.0),
        Vertex::new(700, 200, 1.0, 0.0),
        Vertex::new(150, 710, 0.0, 1.0),
    ];
    let small: Vec<[Vertex; 3]> = (0..1024)
        .map(|i| {
            let x = (i % 32) * 22;
            let y = (i / 32) * 22;
            [
                Vertex::new(x, y, 0.0, 0.0),
                Vertex::new(x + 20, y + 4, 1.0, 0.0),
                Vertex::new(x + 6, y + 20, 0.0, 1.0),
            ]
        })
        .collect();

    group.bench_function("large textured", |b| {
        b.iter(|| {
            let mut shader = TexturedShader::new(&mut pixels, &texture);
            rasterize_triangle(&mut shader, black_box(large));
        })
    });

    group.bench_function("large counting", |b| {
        b.iter(|| {
            let mut covered = 0usize;
            let mut shader = |_: i32, _: i32, u: f32, v: f32| {
                covered += 1;
                black_box((u, v));
            };
            rasterize_triangle(&mut shader, black_box(large));
            black_box(covered)
        })
    });

    group.bench_function("1024 small textured", |b| {
        b.iter(|| {
            for &tri in &small {
                let mut shader = TexturedShader::new(&mut pixels, &texture);
                rasterize_triangle(&mut shader, black_box(tri));
            }
        })
    });

    let mut f = std::fs::File::create("bench.png").unwrap();
    let bytes: Vec<u8> = pixels.as_slice().rows().flatten().flatten().copied().collect();
    image::ImageBuffer::<image::Rgba<u8>, _>::from_raw(WIDTH as u32, HEIGHT as u32, bytes)
        .unwrap()
        .write_to(&mut f, image::ImageFormat::Png)
        .unwrap();

    group.finish();
}

criterion_group!(benches, triangle_rasterization);
criterion_main!(benches);
