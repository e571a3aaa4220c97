//! Land mask lookup
//!
//! Reads a generated mask back and answers whether a pixel is land. White is
//! land; black is water or a barrier.

use image::{ImageFormat, ImageReader, RgbImage};
use std::path::Path;

use crate::constants::LAND_THRESHOLD;
use crate::error::{GenerationError, GenerationResult};

pub struct LandMask {
    image: RgbImage,
}

impl LandMask {
    /// Decode a mask PNG from disk
    pub fn open(path: &Path) -> GenerationResult<Self> {
        if !ImageFormat::Png.reading_enabled() {
            return Err(GenerationError::MissingDrawingCapability {
                capability: "PNG decoding",
            });
        }
        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()?
            .to_rgb8();
        Ok(Self::from_image(image))
    }

    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Fail unless the mask is exactly `expected` (width, height)
    pub fn check_dimensions(&self, expected: (u32, u32)) -> GenerationResult<()> {
        let found = self.dimensions();
        if found == expected {
            Ok(())
        } else {
            Err(GenerationError::MaskSize { expected, found })
        }
    }

    /// Anything outside the image is water
    pub fn is_land(&self, x: f32, y: f32) -> bool {
        let (width, height) = self.image.dimensions();
        if x < 0.0 || y < 0.0 || x >= width as f32 || y >= height as f32 {
            return false;
        }
        let pixel = self.image.get_pixel(x.floor() as u32, y.floor() as u32);
        pixel[0] > LAND_THRESHOLD
    }

    /// Share of pixels that are land, 0.0 to 1.0
    pub fn land_fraction(&self) -> f32 {
        let total = self.image.width() as usize * self.image.height() as usize;
        if total == 0 {
            return 0.0;
        }
        let land = self
            .image
            .pixels()
            .filter(|p| p[0] > LAND_THRESHOLD)
            .count();
        land as f32 / total as f32
    }
}
