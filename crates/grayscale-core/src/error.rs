//! Error types for grayscale conversion.
//!
//! Conversion errors are organized by stage so the caller can tell which step
//! failed. Every variant names the path involved and carries the lower-level
//! cause.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for grayscale operations.
#[derive(Error, Debug)]
pub enum GrayscaleError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Conversion errors
    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Conversion errors, one variant per failing stage.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// The input file could not be opened for reading
    #[error("Error opening the image {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input extension matches no supported decoder
    #[error("Unsupported image format for {path}: {extension}")]
    UnsupportedInputFormat { path: PathBuf, extension: String },

    /// The decoder rejected the byte stream
    #[error("Error decoding the image {path}: {source}")]
    DecodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output file could not be created or truncated
    #[error("Error creating the output file {path}: {source}")]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output extension matches no supported encoder
    #[error("Unsupported output image format for {path}: {extension}")]
    UnsupportedOutputFormat { path: PathBuf, extension: String },

    /// The encoder failed while writing the grayscale image.
    ///
    /// The output file may be left truncated.
    #[error("Error encoding grayscale image to {path}: {source}")]
    EncodeFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ConversionError {
    /// Name of the stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::OpenFailed { .. } => "open",
            Self::UnsupportedInputFormat { .. } => "detect-input",
            Self::DecodeFailed { .. } => "decode",
            Self::CreateFailed { .. } => "create",
            Self::UnsupportedOutputFormat { .. } => "detect-output",
            Self::EncodeFailed { .. } => "encode",
        }
    }

    /// The path the failing stage was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::OpenFailed { path, .. }
            | Self::UnsupportedInputFormat { path, .. }
            | Self::DecodeFailed { path, .. }
            | Self::CreateFailed { path, .. }
            | Self::UnsupportedOutputFormat { path, .. }
            | Self::EncodeFailed { path, .. } => path,
        }
    }
}

/// Convenience type alias for grayscale results.
pub type Result<T> = std::result::Result<T, GrayscaleError>;

/// Convenience type alias for conversion-specific results.
pub type ConversionResult<T> = std::result::Result<T, ConversionError>;
