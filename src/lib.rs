mod core;
mod processors;
mod report;
mod utils;

pub use crate::core::config::{DEFAULT_CONFIG_FILE, SETTINGS_SECTION};
pub use crate::core::{
    BatchSummary, ImageProcessor, LogoPosition, OptimizeConfig, OutputFormat, ProcessedImage,
    Result, WioError,
};
pub use processors::{
    fit_dimensions, logo_origin, logo_size, BatchProcessor, Compressor, Loader,
    PlannedImage, Resizer, Watermark, LOGO_MARGIN, LOGO_WIDTH_RATIO, RESAMPLE_FILTER,
};
pub use report::{ConsoleReporter, ProgressEvent, Reporter, SilentReporter};
pub use utils::{
    format_file_size, is_supported_format, output_file_name, sequence_label,
    SUPPORTED_EXTENSIONS,
};

pub mod prelude {
    pub use crate::{
        BatchProcessor, ConsoleReporter, ImageProcessor, OptimizeConfig, Reporter, Watermark,
    };
}

// Re-export commonly used types
pub use image::{RgbImage, RgbaImage};
