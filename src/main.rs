mod cli;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;

use crate::cli::Cli;
use wio::{BatchProcessor, ConsoleReporter, OptimizeConfig, DEFAULT_CONFIG_FILE};

const PROGRAM_NAME: &str = "WebImageOptimizer (WIO)";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Progress goes through the reporter; the log carries warnings unless RUST_LOG says otherwise.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    println!(
        "{} v{} - optimization started",
        PROGRAM_NAME,
        env!("CARGO_PKG_VERSION")
    );

    let config = OptimizeConfig::load(DEFAULT_CONFIG_FILE);
    log::debug!("Using configuration: {:?}", config);

    let processor = BatchProcessor::new(config, cli.logo);
    let mut reporter = ConsoleReporter::new();

    processor
        .run(&cli.input_folder, &cli.output_folder, &mut reporter)
        .with_context(|| {
            format!(
                "Optimizing {} into {} failed",
                cli.input_folder.display(),
                cli.output_folder.display()
            )
        })?;

    Ok(())
}
