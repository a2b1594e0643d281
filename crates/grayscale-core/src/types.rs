//! Core data types shared by the converter and its callers.

use image::GenericImageView;
use std::path::PathBuf;

use crate::format::Codec;

/// Rectangle of valid pixel coordinates.
///
/// Decoded images always start at the origin; `x` and `y` exist so two bounds
/// can be compared as whole rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    /// Bounds of any image view.
    pub fn of<I: GenericImageView>(image: &I) -> Self {
        let (width, height) = image.dimensions();
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Number of pixels covered.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// What a successful conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub input_codec: Codec,
    pub output_codec: Codec,
    /// Shared by the source and the grayscale image
    pub bounds: Bounds,
}
