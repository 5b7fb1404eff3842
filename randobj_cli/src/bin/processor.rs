//! # randobj processor
//!
//! Classifies every object in a generated file and prints a per-category
//! summary, optionally saving the record lines.

use clap::Parser;
use randobj_cli::{init_logging, ConsoleClassificationReporter};
use randobj_core::{log_info, pipeline};
use std::path::PathBuf;

const USAGE: &str = "processor input_file [output_file]";

#[derive(Parser, Debug)]
#[command(
    name = "processor",
    version,
    about = "Classify the objects in a comma-separated file",
    override_usage = USAGE
)]
struct Args {
    /// File produced by the generator
    input_path: Option<PathBuf>,

    /// Where to save one `Object: <value>, Type: <type>` line per object
    output_path: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let Some(input_path) = args.input_path else {
        println!("Usage: {}", USAGE);
        std::process::exit(1);
    };

    let config = init_logging()?;
    log_info!("Processor starting", "input" => input_path.display());

    let mut reporter = ConsoleClassificationReporter::new();
    if let Err(e) = pipeline::process_file(
        &input_path,
        args.output_path.as_deref(),
        &config.classifier,
        &mut reporter,
    ) {
        reporter.report_failure(&input_path, &e);
    }

    if let Some(e) = reporter.take_error() {
        eprintln!("Error processing file: {}", e);
    }

    Ok(())
}
