//! Grayscale CLI - convert color PNG and JPEG images to grayscale.
//!
//! # Usage
//!
//! ```bash
//! # Convert an image (formats follow the file extensions)
//! grayscale convert photo.jpg photo_gray.png
//!
//! # View configuration
//! grayscale config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Grayscale - convert color images to single-channel luma.
#[derive(Parser, Debug)]
#[command(name = "grayscale")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "GRAYSCALE_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a color image to grayscale
    Convert(cli::convert::ConvertArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref().map(grayscale_core::Config::expand_path);

    // Logging isn't initialized yet, so config warnings go through eprintln.
    let config = match cli::load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `grayscale config path`."
            );
            grayscale_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Grayscale v{}", grayscale_core::VERSION);

    match cli.command {
        Commands::Convert(args) => cli::convert::execute(args, config),
        Commands::Config(args) => cli::config::execute(args, config_path.as_deref()),
    }
}
