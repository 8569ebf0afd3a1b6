// wio/src/utils/mod.rs
use std::path::Path;

pub const SUPPORTED_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".webp"];

/// True when the file name ends, case-insensitively, in a supported extension.
pub fn is_supported_format(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            let name = name.to_string_lossy().to_lowercase();
            SUPPORTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
        })
        .unwrap_or(false)
}

/// Zero-padded sequence number. Wider numbers are kept whole.
pub fn sequence_label(number: u64, digits: usize) -> String {
    format!("{:0width$}", number, width = digits)
}

/// `{seq}-{prefix}.{ext}` when renaming, `{seq}-{stem}.{ext}` otherwise.
pub fn output_file_name(
    source: &Path,
    sequence: &str,
    rename: bool,
    prefix: &str,
    extension: &str,
) -> String {
    let stem = if rename {
        prefix.to_string()
    } else {
        source
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    };

    format!("{}-{}.{}", sequence, stem, extension)
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let base = 1024_f64;
    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.log10() / base.log10()).floor() as usize).min(UNITS.len() - 1);
    let size = bytes_f64 / base.powi(exponent as i32);

    format!("{:.2} {}", size, UNITS[exponent])
}
