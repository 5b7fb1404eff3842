//! # randobj generator
//!
//! Writes a file of random comma-separated objects of at least the requested
//! size.

use clap::Parser;
use randobj_cli::{init_logging, ConsoleGenerationReporter};
use randobj_core::config::compile_time::defaults;
use randobj_core::{generator, log_info, log_warning};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "generator",
    version,
    about = "Generate a file of random comma-separated objects",
    allow_negative_numbers = true
)]
struct Args {
    /// File to create (overwritten if it exists)
    #[arg(default_value = defaults::OUTPUT_PATH)]
    output_path: PathBuf,

    /// Target size in MB; fractional sizes are allowed
    #[arg(default_value_t = defaults::TARGET_SIZE_MB)]
    target_size_mb: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = init_logging()?;

    log_info!("Generator starting",
        "output" => args.output_path.display(),
        "target_mb" => args.target_size_mb
    );

    let mut reporter = ConsoleGenerationReporter::new();
    let report = generator::generate_file(
        &args.output_path,
        args.target_size_mb,
        &config.generator,
        &mut reporter,
    )?;

    if let Some(e) = reporter.take_error() {
        log_warning!("Progress output failed", "error" => e);
    }

    println!(
        "\nGenerated file {} with size {:.6} MB in {:.2} seconds",
        report.path.display(),
        report.file_size_mb(),
        report.duration.as_secs_f64()
    );
    println!("Total objects generated: {}", report.stats.objects_generated);

    Ok(())
}
