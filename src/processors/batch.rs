// wio/src/processors/batch.rs
use crate::core::{BatchSummary, ImageProcessor, OptimizeConfig, Result, WioError};
use crate::processors::Watermark;
use crate::report::{ProgressEvent, Reporter};
use crate::utils::{is_supported_format, output_file_name, sequence_label};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// An input file with its sequence number and output name, fixed before any
/// image is decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedImage {
    pub source: PathBuf,
    pub sequence: u64,
    pub output_name: String,
}

pub struct BatchProcessor {
    config: OptimizeConfig,
    logo: Option<PathBuf>,
}

impl BatchProcessor {
    pub fn new(config: OptimizeConfig, logo: Option<PathBuf>) -> Self {
        Self { config, logo }
    }

    /// Optimizes every supported image directly inside `input_dir` into
    /// `output_dir`, in file name order.
    ///
    /// The first image that cannot be decoded or written stops the run; files
    /// written before it are kept.
    pub fn run(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        reporter: &mut dyn Reporter,
    ) -> Result<BatchSummary> {
        self.validate_paths(input_dir, output_dir)?;
        std::fs::create_dir_all(output_dir)?;

        let image_paths = self.collect_image_paths(input_dir)?;

        if image_paths.is_empty() {
            log::debug!("No image files found in {}", input_dir.display());
            reporter.report(&ProgressEvent::NoImages {
                input_dir: input_dir.to_path_buf(),
            });
            return Ok(BatchSummary::default());
        }

        log::info!(
            "Processing {} images from {}",
            image_paths.len(),
            input_dir.display()
        );

        let plan = self.plan(image_paths);
        let watermark = self.logo.as_deref().and_then(Watermark::load);
        let processor = ImageProcessor::new(self.config.clone()).with_watermark(watermark);

        reporter.report(&ProgressEvent::Started {
            total: plan.len(),
            input_dir: input_dir.to_path_buf(),
        });

        let mut summary = BatchSummary::default();
        for entry in &plan {
            let output_path = output_dir.join(&entry.output_name);

            match processor.process(&entry.source, &output_path, entry.sequence) {
                Ok(image) => {
                    reporter.report(&ProgressEvent::Saved(&image));
                    summary.record(image);
                }
                Err(e) => {
                    log::error!("Failed to process {}: {}", entry.source.display(), e);
                    reporter.report(&ProgressEvent::Failed {
                        source: entry.source.clone(),
                        error: e.to_string(),
                    });
                    return Err(e);
                }
            }
        }

        reporter.report(&ProgressEvent::Finished(&summary));
        Ok(summary)
    }

    /// Assigns consecutive sequence numbers, starting at `start_number`, in
    /// the order of `paths`.
    pub fn plan(&self, paths: Vec<PathBuf>) -> Vec<PlannedImage> {
        paths
            .into_iter()
            .zip(self.config.start_number..)
            .map(|(source, sequence)| {
                let label = sequence_label(sequence, self.config.numbering_digits);
                let output_name = output_file_name(
                    &source,
                    &label,
                    self.config.rename,
                    &self.config.prefix,
                    &self.config.extension,
                );
                PlannedImage {
                    source,
                    sequence,
                    output_name,
                }
            })
            .collect()
    }

    /// Supported files directly inside `input_dir`, sorted by file name.
    pub fn collect_image_paths(&self, input_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(input_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(std::io::Error::from)?;

            // follows symlinks, like a plain directory listing would
            if entry.path().is_file() && is_supported_format(entry.path()) {
                paths.push(entry.into_path());
            }
        }

        Ok(paths)
    }

    pub fn validate_paths(&self, input_dir: &Path, output_dir: &Path) -> Result<()> {
        if !input_dir.exists() {
            return Err(WioError::InvalidParameter(format!(
                "Input directory does not exist: {}",
                input_dir.display()
            )));
        }

        if !input_dir.is_dir() {
            return Err(WioError::InvalidParameter(format!(
                "Input path is not a directory: {}",
                input_dir.display()
            )));
        }

        if output_dir.exists() && !output_dir.is_dir() {
            return Err(WioError::InvalidParameter(format!(
                "Output path exists but is not a directory: {}",
                output_dir.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|name| PathBuf::from("in").join(name)).collect()
    }

    #[test]
    fn plan_numbers_from_start() {
        let config = OptimizeConfig {
            start_number: 5,
            numbering_digits: 3,
            prefix: "trip".to_string(),
            ..Default::default()
        };
        let plan = BatchProcessor::new(config, None).plan(paths(&["a.jpg", "b.png", "c.webp"]));

        let names: Vec<_> = plan.iter().map(|p| p.output_name.as_str()).collect();
        assert_eq!(names, ["005-trip.webp", "006-trip.webp", "007-trip.webp"]);
        let sequences: Vec<_> = plan.iter().map(|p| p.sequence).collect();
        assert_eq!(sequences, [5, 6, 7]);
    }

    #[test]
    fn plan_keeps_stems_without_rename() {
        let config = OptimizeConfig {
            rename: false,
            numbering_digits: 2,
            extension: "jpeg".to_string(),
            ..Default::default()
        };
        let plan = BatchProcessor::new(config, None).plan(paths(&["IMG_1.PNG", "b.webp"]));

        assert_eq!(plan[0].output_name, "01-IMG_1.jpeg");
        assert_eq!(plan[1].output_name, "02-b.jpeg");
    }

    #[test]
    fn plan_widens_past_digit_count() {
        let config = OptimizeConfig {
            start_number: 99,
            numbering_digits: 2,
            ..Default::default()
        };
        let plan = BatchProcessor::new(config, None).plan(paths(&["a.jpg", "b.jpg"]));

        assert_eq!(plan[0].output_name, "99-imagename.webp");
        assert_eq!(plan[1].output_name, "100-imagename.webp");
    }

    #[test]
    fn collects_sorted_supported_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.PNG", "a.jpg", "notes.txt", "c.webp", "anim.gif", "A.jpeg"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.jpg")).unwrap();
        std::fs::write(dir.path().join("nested.jpg").join("inner.jpg"), b"x").unwrap();

        let processor = BatchProcessor::new(OptimizeConfig::default(), None);
        let found: Vec<_> = processor
            .collect_image_paths(dir.path())
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(found, ["A.jpeg", "a.jpg", "b.PNG", "c.webp"]);
    }

    #[test]
    fn rejects_missing_input_and_file_output() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("out");
        std::fs::write(&file, b"x").unwrap();
        let processor = BatchProcessor::new(OptimizeConfig::default(), None);

        assert!(matches!(
            processor.validate_paths(&dir.path().join("missing"), dir.path()),
            Err(WioError::InvalidParameter(_))
        ));
        assert!(matches!(
            processor.validate_paths(dir.path(), &file),
            Err(WioError::InvalidParameter(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinked_images() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        let input = dir.path().join("in");
        let output = dir.path().join("out");
        std::fs::create_dir(&source).unwrap();
        std::fs::create_dir(&input).unwrap();

        image::RgbImage::new(8, 8).save(source.join("real.png")).unwrap();
        std::os::unix::fs::symlink(source.join("real.png"), input.join("a.png")).unwrap();
        std::os::unix::fs::symlink(source.join("gone.png"), input.join("b.png")).unwrap();

        let processor = BatchProcessor::new(OptimizeConfig::default(), None);
        assert_eq!(
            processor.collect_image_paths(&input).unwrap(),
            [input.join("a.png")]
        );

        let summary = processor
            .run(&input, &output, &mut crate::report::SilentReporter)
            .unwrap();
        assert_eq!(summary.processed_count(), 1);
        assert!(output.join("001-imagename.webp").is_file());
    }
}
