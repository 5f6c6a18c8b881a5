use crate::error::CoverError;
use image::{imageops, GrayImage, RgbImage};

/// Decoded RGB raster with positive dimensions.
///
/// Built once per item and only handed out by shared reference; there is no
/// way to mutate the pixels after construction.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    pixels: RgbImage,
}

impl PixelGrid {
    pub fn from_rgb(pixels: RgbImage) -> Result<Self, CoverError> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(CoverError::EmptyImage { width, height });
        }
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Red, green and blue values at (x, y)
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels.get_pixel(x, y).0
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.pixels
    }

    /// Single-channel luminance view, the input for edge detection
    pub fn to_luma(&self) -> GrayImage {
        imageops::grayscale(&self.pixels)
    }
}
