// wio/src/core/processor.rs
use super::{OptimizeConfig, ProcessedImage, Result};
use crate::processors::{Compressor, Loader, Resizer, Watermark};
use std::path::Path;

/// Runs one image through decode, fit, watermark and encode.
pub struct ImageProcessor {
    config: OptimizeConfig,
    loader: Loader,
    resizer: Resizer,
    compressor: Compressor,
    watermark: Option<Watermark>,
}

impl ImageProcessor {
    pub fn new(config: OptimizeConfig) -> Self {
        let resizer = Resizer::new(config.max_width, config.max_height);
        let compressor = Compressor::new(config.format, config.quality)
            .with_png_optimization(config.optimize_png);

        Self {
            config,
            loader: Loader::new(),
            resizer,
            compressor,
            watermark: None,
        }
    }

    pub fn with_watermark(mut self, watermark: Option<Watermark>) -> Self {
        self.watermark = watermark;
        self
    }

    pub fn process(
        &self,
        input_path: &Path,
        output_path: &Path,
        sequence: u64,
    ) -> Result<ProcessedImage> {
        let image = self.loader.load_rgb(input_path)?;
        let size_before = std::fs::metadata(input_path)?.len();
        let original_dimensions = image.dimensions();

        let (image, resized) = self.resizer.fit(image);

        let image = match &self.watermark {
            Some(watermark) => watermark.apply(image, self.config.logo_position),
            None => image,
        };

        let size_after = self.compressor.save(&image, output_path)?;

        Ok(ProcessedImage {
            source: input_path.to_path_buf(),
            output: output_path.to_path_buf(),
            sequence,
            original_dimensions,
            dimensions: image.dimensions(),
            resized,
            size_before,
            size_after,
        })
    }
}
