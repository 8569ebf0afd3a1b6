// wio/src/cli.rs
use clap::Parser;
use std::path::PathBuf;

/// Batch-optimizes a folder of images for the web. Settings are read from
/// `config.ini` in the working directory.
#[derive(Parser, Debug)]
#[command(
    name = "wio",
    about = "WebImageOptimizer: resize, recompress, watermark and renumber images",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Folder containing the images to optimize
    pub input_folder: PathBuf,

    /// Folder the optimized images are written to (created if missing)
    pub output_folder: PathBuf,

    /// Optional logo drawn onto every image
    pub logo: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_or_three_arguments() {
        let cli = Cli::try_parse_from(["wio", "in", "out"]).unwrap();
        assert_eq!(cli.input_folder, PathBuf::from("in"));
        assert_eq!(cli.output_folder, PathBuf::from("out"));
        assert!(cli.logo.is_none());

        let cli = Cli::try_parse_from(["wio", "in", "out", "logo.png"]).unwrap();
        assert_eq!(cli.logo, Some(PathBuf::from("logo.png")));
    }

    #[test]
    fn rejects_other_argument_counts() {
        assert!(Cli::try_parse_from(["wio"]).is_err());
        assert!(Cli::try_parse_from(["wio", "in"]).is_err());
        assert!(Cli::try_parse_from(["wio", "in", "out", "logo.png", "extra"]).is_err());
    }

    #[test]
    fn has_no_flags() {
        assert!(Cli::try_parse_from(["wio", "--help"]).is_err());
        assert!(Cli::try_parse_from(["wio", "in", "out", "--version"]).is_err());
    }
}
