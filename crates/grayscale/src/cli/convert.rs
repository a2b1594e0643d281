//! The `grayscale convert` command.

use anyhow::Context;
use clap::Args;
use grayscale_core::{Config, GrayscaleConverter};
use std::path::PathBuf;

/// Arguments for the `convert` command.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Color image to read (.png, .jpg, .jpeg)
    pub input: PathBuf,

    /// Where to write the grayscale image (.png, .jpg, .jpeg)
    pub output: PathBuf,

    /// JPEG quality for JPEG output (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub jpeg_quality: Option<u8>,

    /// Reject an unsupported output extension before creating the output file
    #[arg(long)]
    pub strict_output: bool,
}

/// Execute the convert command.
pub fn execute(args: ConvertArgs, config: Config) -> anyhow::Result<()> {
    let converter = GrayscaleConverter::new(apply_overrides(&args, config).conversion);

    let summary = converter
        .convert(&args.input, &args.output)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    tracing::info!(
        input_codec = %summary.input_codec,
        output_codec = %summary.output_codec,
        "Converted {} ({})",
        summary.input.display(),
        summary.bounds
    );
    println!("Grayscale image saved to {}", summary.output.display());
    Ok(())
}

/// Apply CLI flags on top of the loaded config.
fn apply_overrides(args: &ConvertArgs, mut config: Config) -> Config {
    if let Some(quality) = args.jpeg_quality {
        config.conversion.jpeg_quality = quality;
    }
    if args.strict_output {
        config.conversion.validate_output_before_create = true;
    }
    config
}
