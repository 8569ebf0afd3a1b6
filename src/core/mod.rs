// wio/src/core/mod.rs
pub mod config;
pub mod processor;

use std::path::PathBuf;
use thiserror::Error;

pub use config::OptimizeConfig;
pub use processor::ImageProcessor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
}

impl OutputFormat {
    /// Parses a configured format name (`jpg`, `jpeg`, `png`, `webp`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(OutputFormat::Jpeg),
            "png" => Some(OutputFormat::Png),
            "webp" => Some(OutputFormat::WebP),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl LogoPosition {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "top-left" => Some(LogoPosition::TopLeft),
            "top-right" => Some(LogoPosition::TopRight),
            "bottom-left" => Some(LogoPosition::BottomLeft),
            "bottom-right" => Some(LogoPosition::BottomRight),
            _ => None,
        }
    }

    pub fn is_left(self) -> bool {
        matches!(self, LogoPosition::TopLeft | LogoPosition::BottomLeft)
    }

    pub fn is_top(self) -> bool {
        matches!(self, LogoPosition::TopLeft | LogoPosition::TopRight)
    }
}

/// Outcome of one image going through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedImage {
    pub source: PathBuf,
    pub output: PathBuf,
    pub sequence: u64,
    pub original_dimensions: (u32, u32),
    pub dimensions: (u32, u32),
    pub resized: bool,
    pub size_before: u64,
    pub size_after: u64,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub images: Vec<ProcessedImage>,
    pub total_size_before: u64,
    pub total_size_after: u64,
}

impl BatchSummary {
    pub fn record(&mut self, image: ProcessedImage) {
        self.total_size_before += image.size_before;
        self.total_size_after += image.size_after;
        self.images.push(image);
    }

    pub fn processed_count(&self) -> usize {
        self.images.len()
    }

    /// Size reduction in percent, clamped to `0..=100`.
    pub fn savings_percent(&self) -> f64 {
        if self.total_size_before == 0 {
            return 0.0;
        }

        let savings = (self.total_size_before as f64 - self.total_size_after as f64)
            / self.total_size_before as f64
            * 100.0;
        savings.clamp(0.0, 100.0)
    }
}

#[derive(Error, Debug)]
pub enum WioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode image: {0}")]
    Encode(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Memory limit exceeded: {0}")]
    MemoryLimitExceeded(String),
}

pub type Result<T> = std::result::Result<T, WioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_are_case_insensitive() {
        assert_eq!(OutputFormat::from_name("JPG"), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_name("jpeg"), Some(OutputFormat::Jpeg));
        assert_eq!(OutputFormat::from_name("WebP"), Some(OutputFormat::WebP));
        assert_eq!(OutputFormat::from_name("gif"), None);
    }

    #[test]
    fn savings_are_clamped() {
        let mut summary = BatchSummary::default();
        assert_eq!(summary.savings_percent(), 0.0);

        summary.total_size_before = 100;
        summary.total_size_after = 250;
        assert_eq!(summary.savings_percent(), 0.0);

        summary.total_size_after = 25;
        assert!((summary.savings_percent() - 75.0).abs() < f64::EPSILON);
    }
}
