//! Command handlers.

pub mod config;
pub mod convert;

use grayscale_core::{Config, ConfigError};
use std::path::Path;

/// Load config from an explicit path, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
