use image::{Rgba, RgbaImage};

use crate::{Pixel, Surface, Texture};

pub type PixelBuf<'a> = MatrixSliceMut<'a, Pixel>;

/// Row major view over a 2D grid.
#[derive(Clone, Copy)]
pub struct MatrixSlice<'a, E> {
    pub width: usize,
    pub height: usize,
    data: &'a [E],
}

impl<'a, E> MatrixSlice<'a, E> {
    pub fn new(buf: &'a [E], width: usize, height: usize) -> Self {
        assert_eq!(buf.len(), width * height);
        MatrixSlice {
            width,
            height,
            data: buf,
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&'a E> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    pub fn rows(&self) -> impl Iterator<Item = &'a [E]> + 'a {
        self.data.chunks(self.width.max(1)).take(self.height)
    }
}

/// Mutable row major view over a 2D grid.
pub struct MatrixSliceMut<'a, E> {
    pub width: usize,
    pub height: usize,
    data: &'a mut [E],
}

impl<'a, E> MatrixSliceMut<'a, E> {
    pub fn new(buf: &'a mut [E], width: usize, height: usize) -> Self {
        assert_eq!(buf.len(), width * height);
        MatrixSliceMut {
            width,
            height,
            data: buf,
        }
    }

    pub fn as_slice(&self) -> MatrixSlice<'_, E> {
        MatrixSlice {
            width: self.width,
            height: self.height,
            data: &*self.data,
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&E> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut E> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.width + x)
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [E]> {
        self.data.chunks_mut(self.width.max(1)).take(self.height)
    }

    pub fn fill(&mut self, value: E)
    where
        E: Copy,
    {
        for row in self.rows_mut() {
            row.fill(value);
        }
    }
}

/// Writes outside of the view are dropped.
impl<'a> Surface for MatrixSliceMut<'a, Pixel> {
    #[inline]
    fn set(&mut self, x: i32, y: i32, color: Pixel) {
        let (Ok(x), Ok(y)) = (usize::try_from(x), usize::try_from(y)) else {
            return;
        };
        if let Some(pixel) = self.get_mut(x, y) {
            *pixel = color;
        }
    }
}

/// Reads outside of the view give transparent black.
impl<'a> Texture for MatrixSlice<'a, Pixel> {
    fn bounds(&self) -> (i32, i32) {
        (self.width as i32 - 1, self.height as i32 - 1)
    }

    #[inline]
    fn at(&self, x: i32, y: i32) -> Pixel {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(x), Ok(y)) => self.get(x, y).copied().unwrap_or_default(),
            _ => Pixel::default(),
        }
    }
}

/// Writes outside of the image are dropped.
impl Surface for RgbaImage {
    #[inline]
    fn set(&mut self, x: i32, y: i32, color: Pixel) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x < self.width() && y < self.height() {
            self.put_pixel(x, y, Rgba(color));
        }
    }
}
