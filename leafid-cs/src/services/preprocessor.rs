//! Image preprocessing for the leaf classifier
//!
//! Produces an NHWC `f32` tensor of shape `(1, 224, 224, 3)` with values
//! scaled into `[0, 1]`. Grayscale and alpha images are coerced to RGB
//! first, so the channel count is always 3.

use image::{imageops::FilterType, DynamicImage};
use ndarray::Array4;

use crate::error::ClassifyError;

/// Square edge length expected by the classifier
pub const MODEL_INPUT_SIZE: u32 = 224;

/// Channels per pixel after RGB coercion
pub const CHANNELS: usize = 3;

/// Resizes and normalizes decoded images
#[derive(Debug, Clone, Copy)]
pub struct ImagePreprocessor {
    size: u32,
    filter: FilterType,
}

impl ImagePreprocessor {
    pub fn new(size: u32, filter: FilterType) -> Self {
        Self { size, filter }
    }

    /// Decode raw upload bytes (format sniffed from content)
    pub fn decode(&self, bytes: &[u8]) -> Result<DynamicImage, ClassifyError> {
        image::load_from_memory(bytes).map_err(|e| ClassifyError::InvalidImage(e.to_string()))
    }

    /// Resize to `size × size`, scale to `[0, 1]`, add the batch axis
    pub fn preprocess(&self, image: &DynamicImage) -> Array4<f32> {
        let rgb = image.to_rgb8();
        let resized = image::imageops::resize(&rgb, self.size, self.size, self.filter);

        let edge = self.size as usize;
        Array4::from_shape_fn((1, edge, edge, CHANNELS), |(_, y, x, c)| {
            resized.get_pixel(x as u32, y as u32)[c] as f32 / 255.0
        })
    }

    /// Decode then preprocess
    pub fn preprocess_bytes(&self, bytes: &[u8]) -> Result<Array4<f32>, ClassifyError> {
        let image = self.decode(bytes)?;
        Ok(self.preprocess(&image))
    }

    pub fn tensor_shape(&self) -> [usize; 4] {
        let edge = self.size as usize;
        [1, edge, edge, CHANNELS]
    }
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        // Bicubic resampling
        Self::new(MODEL_INPUT_SIZE, FilterType::CatmullRom)
    }
}
