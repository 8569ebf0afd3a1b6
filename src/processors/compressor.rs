// wio/src/processors/compressor.rs
use crate::core::{OutputFormat, Result, WioError};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::RgbImage;
use oxipng::{optimize_from_memory, Options};
use std::path::Path;

pub struct Compressor {
    format: OutputFormat,
    quality: u8,
    optimize_png: bool,
}

impl Compressor {
    pub fn new(format: OutputFormat, quality: u8) -> Self {
        Self {
            format,
            quality: quality.clamp(1, 100),
            optimize_png: true,
        }
    }

    pub fn with_png_optimization(mut self, optimize: bool) -> Self {
        self.optimize_png = optimize;
        self
    }

    /// Encodes and writes the image, returning the number of bytes written.
    pub fn save(&self, image: &RgbImage, path: &Path) -> Result<u64> {
        log::debug!(
            "Saving image to {} with format {:?}, quality: {}",
            path.display(),
            self.format,
            self.quality
        );

        let data = self.compress_to_bytes(image)?;
        std::fs::write(path, &data)?;

        let size = data.len() as u64;
        log::info!("Saved image: {} ({} bytes)", path.display(), size);
        Ok(size)
    }

    pub fn compress_to_bytes(&self, image: &RgbImage) -> Result<Vec<u8>> {
        match self.format {
            OutputFormat::Jpeg => self.encode_jpeg(image),
            OutputFormat::Png => self.encode_png(image),
            OutputFormat::WebP => self.encode_webp(image),
        }
    }

    fn encode_jpeg(&self, image: &RgbImage) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        image.write_with_encoder(JpegEncoder::new_with_quality(&mut buffer, self.quality))?;
        Ok(buffer)
    }

    // PNG is lossless, so quality does not apply; size is won back with oxipng.
    fn encode_png(&self, image: &RgbImage) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        image.write_with_encoder(PngEncoder::new(&mut buffer))?;

        if !self.optimize_png {
            return Ok(buffer);
        }

        optimize_from_memory(&buffer, &Options::default())
            .map_err(|e| WioError::Encode(format!("PNG optimization failed: {}", e)))
    }

    fn encode_webp(&self, image: &RgbImage) -> Result<Vec<u8>> {
        let encoder = webp::Encoder::from_rgb(image.as_raw(), image.width(), image.height());
        let encoded = encoder
            .encode_simple(false, f32::from(self.quality))
            .map_err(|e| WioError::Encode(format!("WebP encoding failed: {:?}", e)))?;

        Ok(encoded.to_vec())
    }
}
