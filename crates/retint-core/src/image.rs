//! Image representation for the adjustment pipeline.

use crate::error::RetintError;

/// An 8-bit RGBA image, stored row-major.
///
/// The buffer keeps its dimensions for its whole lifetime; rendering always
/// produces a fresh buffer (or fills a caller-provided one of equal size).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl PixelBuffer {
    /// Wrap a pixel vector. The vector must hold exactly `width * height` pixels.
    pub fn new(width: u32, height: u32, pixels: Vec<[u8; 4]>) -> Result<Self, RetintError> {
        let expected = pixel_count(width, height);
        if pixels.len() != expected {
            return Err(RetintError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from interleaved RGBA bytes (`width * height * 4` of them).
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, RetintError> {
        let expected = pixel_count(width, height) * 4;
        if bytes.len() != expected {
            return Err(RetintError::BufferSize {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A buffer where every pixel has the same value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self {
            width,
            height,
            pixels: vec![rgba; pixel_count(width, height)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn same_dimensions(&self, other: &PixelBuffer) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        &mut self.pixels
    }

    /// Interleaved RGBA bytes, borrowed without copying.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn into_pixels(self) -> Vec<[u8; 4]> {
        self.pixels
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}
