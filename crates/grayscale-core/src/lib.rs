//! Grayscale Core - convert color images to single-channel luma.
//!
//! One routine does the work: pick a decoder from the input extension, decode,
//! map every pixel through BT.601 luma, pick an encoder from the output
//! extension, encode.
//!
//! ```text
//! input.png/jpg → Decode → Luma (0.299R + 0.587G + 0.114B) → Encode → output.png/jpg
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! fn main() -> Result<(), grayscale_core::ConversionError> {
//!     grayscale_core::convert_to_grayscale("input_image.png", "output_image.png")?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod format;
pub mod luma;
pub mod types;

pub use config::{Config, ConversionConfig, LoggingConfig};
pub use converter::{convert_to_grayscale, GrayscaleConverter};
pub use error::{ConfigError, ConversionError, ConversionResult, GrayscaleError, Result};
pub use format::{Codec, EncodeSettings};
pub use luma::{luma_from_rgb16, luma_from_rgb8, to_grayscale};
pub use types::{Bounds, ConversionSummary};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
