// wio/src/report.rs
use crate::core::{BatchSummary, ProcessedImage};
use crate::utils::format_file_size;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Debug)]
pub enum ProgressEvent<'a> {
    Started { total: usize, input_dir: PathBuf },
    NoImages { input_dir: PathBuf },
    Saved(&'a ProcessedImage),
    Failed { source: PathBuf, error: String },
    Finished(&'a BatchSummary),
}

/// Receives batch progress. The driver only emits events; presentation lives here.
pub trait Reporter {
    fn report(&mut self, event: &ProgressEvent<'_>);
}

/// Discards every event.
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&mut self, _event: &ProgressEvent<'_>) {}
}

/// Human-readable progress on the terminal.
#[derive(Default)]
pub struct ConsoleReporter {
    progress: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn println(&self, message: String) {
        match &self.progress {
            Some(pb) => pb.println(message),
            None => println!("{}", message),
        }
    }

    fn create_progress_bar(total: usize) -> ProgressBar {
        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        pb.set_style(style);
        pb
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: &ProgressEvent<'_>) {
        match event {
            ProgressEvent::Started { total, input_dir } => {
                println!("Optimizing {} images from {}", total, input_dir.display());
                self.progress = Some(Self::create_progress_bar(*total));
            }
            ProgressEvent::NoImages { input_dir } => {
                println!("No images found to optimize in {}", input_dir.display());
            }
            ProgressEvent::Saved(image) => {
                let (width, height) = image.dimensions;
                let size = if image.resized {
                    let (orig_w, orig_h) = image.original_dimensions;
                    format!("scaled {}x{} -> {}x{}", orig_w, orig_h, width, height)
                } else {
                    format!("original size {}x{}", width, height)
                };
                self.println(format!(
                    "Saved {} ({}, {})",
                    image.output.display(),
                    size,
                    format_file_size(image.size_after)
                ));
                if let Some(pb) = &self.progress {
                    pb.inc(1);
                }
            }
            ProgressEvent::Failed { source, error } => {
                self.println(format!("Failed {}: {}", source.display(), error));
                if let Some(pb) = self.progress.take() {
                    pb.abandon();
                }
            }
            ProgressEvent::Finished(summary) => {
                let message = format!(
                    "Optimization complete: {} images, {} -> {} ({:.1}% smaller)",
                    summary.processed_count(),
                    format_file_size(summary.total_size_before),
                    format_file_size(summary.total_size_after),
                    summary.savings_percent()
                );
                match self.progress.take() {
                    Some(pb) => pb.finish_with_message(message),
                    None => println!("{}", message),
                }
            }
        }
    }
}
