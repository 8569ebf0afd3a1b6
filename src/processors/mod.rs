// wio/src/processors/mod.rs
mod batch;
mod compressor;
mod loader;
mod resizer;
mod watermark;

pub use batch::{BatchProcessor, PlannedImage};
pub use compressor::Compressor;
pub use loader::Loader;
pub use resizer::{fit_dimensions, Resizer, RESAMPLE_FILTER};
pub use watermark::{logo_origin, logo_size, Watermark, LOGO_MARGIN, LOGO_WIDTH_RATIO};
