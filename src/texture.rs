use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;

use crate::{buf::MatrixSlice, Pixel, Texture};

/// Row major RGBA texture that owns its texels.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedTexture {
    width: usize,
    height: usize,
    texels: Vec<Pixel>,
}

impl OwnedTexture {
    pub fn from_texels(width: usize, height: usize, texels: Vec<Pixel>) -> Self {
        assert_eq!(width * height, texels.len());
        OwnedTexture {
            width,
            height,
            texels,
        }
    }

    pub fn from_image(image: &RgbaImage) -> Self {
        let texels = image.pixels().map(|pixel| pixel.0).collect();
        OwnedTexture::from_texels(image.width() as usize, image.height() as usize, texels)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .with_context(|| format!("failed to load texture {path:?}"))?
            .to_rgba8();
        log::debug!(
            "loaded {}x{} texture from {path:?}",
            image.width(),
            image.height()
        );
        Ok(OwnedTexture::from_image(&image))
    }

    /// `size` x `size` texture of `cell` x `cell` squares alternating between both colors,
    /// starting with `colors[0]` in the top left corner.
    pub fn checkerboard(size: usize, cell: usize, colors: [Pixel; 2]) -> Self {
        let cell = cell.max(1);
        let texels = (0..size * size)
            .map(|i| {
                let (x, y) = (i % size, i / size);
                colors[(x / cell + y / cell) % 2]
            })
            .collect();
        OwnedTexture::from_texels(size, size, texels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn borrow(&self) -> MatrixSlice<'_, Pixel> {
        MatrixSlice::new(&self.texels, self.width, self.height)
    }

    pub fn as_slice(&self) -> &[Pixel] {
        &self.texels
    }
}

impl Texture for OwnedTexture {
    fn bounds(&self) -> (i32, i32) {
        self.borrow().bounds()
    }

    #[inline]
    fn at(&self, x: i32, y: i32) -> Pixel {
        self.borrow().at(x, y)
    }
}

/// Reads outside of the image give transparent black.
impl Texture for RgbaImage {
    fn bounds(&self) -> (i32, i32) {
        (self.width() as i32 - 1, self.height() as i32 - 1)
    }

    #[inline]
    fn at(&self, x: i32, y: i32) -> Pixel {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(x), Ok(y)) if x < self.width() && y < self.height() => self.get_pixel(x, y).0,
            _ => Pixel::default(),
        }
    }
}
