// wio/src/processors/resizer.rs
use image::{imageops, imageops::FilterType, RgbImage};

/// Resampling filter for every scale operation; output is meant for the web.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// Target dimensions for fitting `(width, height)` into `max_width` x `max_height`.
///
/// A bound of `0` leaves that axis unconstrained. Images are never upscaled:
/// when both bounds are `0` or the image already fits, the input is returned.
/// Otherwise both axes are multiplied by the same factor and floored, keeping
/// at least one pixel per axis.
pub fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let fits_width = max_width == 0 || width <= max_width;
    let fits_height = max_height == 0 || height <= max_height;

    if fits_width && fits_height {
        return (width, height);
    }

    // scale factors as exact fractions, so a binding bound is hit exactly
    let by_width = (max_width > 0).then_some((u64::from(max_width), u64::from(width)));
    let by_height = (max_height > 0).then_some((u64::from(max_height), u64::from(height)));

    let (num, den) = match (by_width, by_height) {
        (Some((a, b)), Some((c, d))) => {
            if a * d <= c * b {
                (a, b)
            } else {
                (c, d)
            }
        }
        (Some(ratio), None) | (None, Some(ratio)) => ratio,
        (None, None) => return (width, height),
    };

    let new_width = (u64::from(width) * num / den) as u32;
    let new_height = (u64::from(height) * num / den) as u32;

    (new_width.max(1), new_height.max(1))
}

pub struct Resizer {
    max_width: u32,
    max_height: u32,
}

impl Resizer {
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self { max_width, max_height }
    }

    /// Fits the image into the bounding box. The flag tells whether it was resampled.
    pub fn fit(&self, image: RgbImage) -> (RgbImage, bool) {
        let (width, height) = fit_dimensions(
            image.width(),
            image.height(),
            self.max_width,
            self.max_height,
        );

        if width == image.width() && height == image.height() {
            log::debug!("Image dimensions unchanged, skipping resize");
            return (image, false);
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );

        (imageops::resize(&image, width, height, RESAMPLE_FILTER), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconstrained_is_identity() {
        assert_eq!(fit_dimensions(4000, 3000, 0, 0), (4000, 3000));
    }

    #[test]
    fn never_upscales() {
        assert_eq!(fit_dimensions(640, 480, 1920, 1080), (640, 480));
        assert_eq!(fit_dimensions(640, 480, 640, 480), (640, 480));
        assert_eq!(fit_dimensions(640, 480, 1000, 0), (640, 480));
    }

    #[test]
    fn binding_axis_wins() {
        // width ratio 0.48, height ratio 0.36
        assert_eq!(fit_dimensions(4000, 3000, 1920, 1080), (1440, 1080));
        assert_eq!(fit_dimensions(3000, 4000, 1920, 1080), (810, 1080));
    }

    #[test]
    fn single_bound_constrains_one_axis() {
        assert_eq!(fit_dimensions(4000, 3000, 1000, 0), (1000, 750));
        assert_eq!(fit_dimensions(4000, 3000, 0, 600), (800, 600));
    }

    #[test]
    fn dimensions_are_floored() {
        assert_eq!(fit_dimensions(1001, 999, 500, 0), (500, 499));
    }

    #[test]
    fn extreme_ratio_keeps_one_pixel() {
        assert_eq!(fit_dimensions(10_000, 2, 100, 0), (100, 1));
    }

    #[test]
    fn fitted_sizes_respect_bounds_and_aspect() {
        let sizes = [(4000, 3000), (1234, 5678), (800, 801), (5000, 10), (17, 3000)];
        let bounds = [(1920, 1080), (500, 0), (0, 400), (100, 100)];

        for &(w, h) in &sizes {
            for &(max_w, max_h) in &bounds {
                let (nw, nh) = fit_dimensions(w, h, max_w, max_h);
                if max_w > 0 {
                    assert!(nw <= max_w, "{}x{} in {}x{} -> {}x{}", w, h, max_w, max_h, nw, nh);
                }
                if max_h > 0 {
                    assert!(nh <= max_h, "{}x{} in {}x{} -> {}x{}", w, h, max_w, max_h, nw, nh);
                }
                assert!(nw <= w && nh <= h);

                if nw >= 10 && nh >= 10 {
                    let expected = w as f64 / h as f64;
                    let actual = nw as f64 / nh as f64;
                    let tolerance = 1.0 / (nw.min(nh) as f64 - 1.0);
                    assert!((actual / expected - 1.0).abs() <= tolerance);
                }
            }
        }
    }

    #[test]
    fn resizer_reports_whether_it_scaled() {
        let resizer = Resizer::new(50, 0);

        let (small, resized) = resizer.fit(RgbImage::new(40, 20));
        assert!(!resized);
        assert_eq!(small.dimensions(), (40, 20));

        let (large, resized) = resizer.fit(RgbImage::new(200, 100));
        assert!(resized);
        assert_eq!(large.dimensions(), (50, 25));
    }
}
