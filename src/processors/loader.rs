// wio/src/processors/loader.rs
use crate::core::{Result, WioError};
use image::{DynamicImage, ImageReader, RgbImage};
use std::path::Path;

#[derive(Clone)]
pub struct Loader {
    max_dimensions: (u32, u32),
}

impl Loader {
    pub fn new() -> Self {
        Self {
            max_dimensions: (100_000, 100_000),
        }
    }

    /// Decodes the file, sniffing the format from its content.
    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        self.validate_path(path)?;

        let decode_error = |source| WioError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(decode_error)?;

        let (max_w, max_h) = self.max_dimensions;
        let (width, height) = (image.width(), image.height());
        if width > max_w || height > max_h {
            return Err(WioError::MemoryLimitExceeded(format!(
                "Image dimensions {}x{} exceed maximum {}x{}",
                width, height, max_w, max_h
            )));
        }

        log::debug!(
            "Loaded image: {}x{} pixels, color: {:?}",
            image.width(),
            image.height(),
            image.color()
        );

        Ok(image)
    }

    /// Decodes and drops any alpha channel, giving an opaque RGB canvas.
    pub fn load_rgb(&self, path: &Path) -> Result<RgbImage> {
        Ok(self.load(path)?.into_rgb8())
    }

    fn validate_path(&self, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(WioError::InvalidParameter(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        if path.metadata()?.len() == 0 {
            return Err(WioError::InvalidParameter(format!(
                "File is empty: {}",
                path.display()
            )));
        }

        Ok(())
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
