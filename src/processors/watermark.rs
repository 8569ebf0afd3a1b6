// wio/src/processors/watermark.rs
use crate::core::LogoPosition;
use crate::processors::loader::Loader;
use crate::processors::resizer::RESAMPLE_FILTER;
use image::{imageops, DynamicImage, RgbImage, RgbaImage};
use std::path::Path;

/// Logo width relative to the width of the image it is drawn on.
pub const LOGO_WIDTH_RATIO: f64 = 0.15;
/// Distance in pixels between the logo and the nearest image edges.
pub const LOGO_MARGIN: i64 = 10;

/// Size of the logo on a base image `base_width` pixels wide.
pub fn logo_size(base_width: u32, logo_width: u32, logo_height: u32) -> (u32, u32) {
    let width = (base_width as f64 * LOGO_WIDTH_RATIO).floor() as u32;
    if logo_width == 0 {
        return (width, 0);
    }

    let height = (width as f64 * logo_height as f64 / logo_width as f64).round() as u32;
    (width, height)
}

/// Top-left corner of the logo for the given corner position.
pub fn logo_origin(
    base: (u32, u32),
    logo: (u32, u32),
    position: LogoPosition,
) -> (i64, i64) {
    let (base_w, base_h) = (i64::from(base.0), i64::from(base.1));
    let (logo_w, logo_h) = (i64::from(logo.0), i64::from(logo.1));

    let x = if position.is_left() {
        LOGO_MARGIN
    } else {
        base_w - logo_w - LOGO_MARGIN
    };
    let y = if position.is_top() {
        LOGO_MARGIN
    } else {
        base_h - logo_h - LOGO_MARGIN
    };

    (x, y)
}

/// A decoded logo, kept at its native size and rescaled for each target image.
#[derive(Clone)]
pub struct Watermark {
    logo: RgbaImage,
}

impl Watermark {
    pub fn new(logo: RgbaImage) -> Self {
        Self { logo }
    }

    /// Loads a logo with its alpha channel. A missing or undecodable file only
    /// produces a warning.
    pub fn load(path: &Path) -> Option<Self> {
        if !path.is_file() {
            log::warn!("Logo not found: {}, continuing without watermark", path.display());
            return None;
        }

        match Loader::new().load(path) {
            Ok(image) => {
                log::debug!(
                    "Loaded logo {} ({}x{})",
                    path.display(),
                    image.width(),
                    image.height()
                );
                Some(Self::new(image.into_rgba8()))
            }
            Err(e) => {
                log::warn!("Could not load logo: {}, continuing without watermark", e);
                None
            }
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.logo.dimensions()
    }

    /// Draws the logo over `base` at `position` and returns an opaque image.
    pub fn apply(&self, base: RgbImage, position: LogoPosition) -> RgbImage {
        let (logo_w, logo_h) = self.dimensions();
        let (width, height) = logo_size(base.width(), logo_w, logo_h);

        if width == 0 || height == 0 {
            log::warn!(
                "Image {}x{} is too small for a watermark, skipping logo",
                base.width(),
                base.height()
            );
            return base;
        }

        let scaled = imageops::resize(&self.logo, width, height, RESAMPLE_FILTER);
        let (x, y) = logo_origin(base.dimensions(), (width, height), position);

        log::debug!("Placing {}x{} logo at ({}, {}) {:?}", width, height, x, y, position);

        let mut canvas = DynamicImage::ImageRgb8(base).into_rgba8();
        imageops::overlay(&mut canvas, &scaled, x, y);

        DynamicImage::ImageRgba8(canvas).into_rgb8()
    }
}
