//! The conversion routine: open, decode, convert, create, encode.

use image::ImageError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use crate::config::{Config, ConversionConfig};
use crate::error::{ConversionError, ConversionResult};
use crate::format::{extension_label, Codec};
use crate::luma::to_grayscale;
use crate::types::{Bounds, ConversionSummary};

/// Convert the image at `input` to grayscale and write it to `output`.
///
/// Codecs are chosen from the extensions of both paths. Uses
/// [`ConversionConfig::default`], which creates the output file before
/// checking its extension.
pub fn convert_to_grayscale(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> ConversionResult<()> {
    GrayscaleConverter::default()
        .convert(input.as_ref(), output.as_ref())
        .map(|_| ())
}

/// Grayscale converter with configurable encoding and output checks.
#[derive(Debug, Clone, Default)]
pub struct GrayscaleConverter {
    config: ConversionConfig,
}

impl GrayscaleConverter {
    /// Create a converter. An out-of-range `jpeg_quality` is clamped to 1..=100.
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.conversion.clone())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Run one conversion.
    ///
    /// Both files are closed on every return path. If encoding fails, the
    /// output file may be left truncated and the error says so.
    pub fn convert(&self, input: &Path, output: &Path) -> ConversionResult<ConversionSummary> {
        let start = Instant::now();
        tracing::debug!("Converting {:?} -> {:?}", input, output);

        let reader = File::open(input).map_err(|source| ConversionError::OpenFailed {
            path: input.to_path_buf(),
            source,
        })?;

        let input_codec =
            Codec::from_path(input).ok_or_else(|| ConversionError::UnsupportedInputFormat {
                path: input.to_path_buf(),
                extension: extension_label(input),
            })?;
        tracing::trace!("  Input codec: {}", input_codec);

        let decode_start = Instant::now();
        let source = input_codec
            .decode(BufReader::new(reader))
            .map_err(|source| ConversionError::DecodeFailed {
                path: input.to_path_buf(),
                source,
            })?;
        tracing::trace!("  Decode: {:?}", decode_start.elapsed());

        let bounds = Bounds::of(&source);
        let convert_start = Instant::now();
        let gray = to_grayscale(&source);
        drop(source);
        tracing::trace!(
            "  Luma ({}, {} px): {:?}",
            bounds,
            bounds.area(),
            convert_start.elapsed()
        );
        debug_assert_eq!(Bounds::of(&gray), bounds);

        let checked_codec = if self.config.validate_output_before_create {
            Some(Self::output_codec(output)?)
        } else {
            None
        };

        let file = File::create(output).map_err(|source| ConversionError::CreateFailed {
            path: output.to_path_buf(),
            source,
        })?;

        let output_codec = match checked_codec {
            Some(codec) => codec,
            None => Self::output_codec(output)?,
        };
        tracing::trace!("  Output codec: {}", output_codec);

        let encode_start = Instant::now();
        let encode_failed = |source: ImageError| ConversionError::EncodeFailed {
            path: output.to_path_buf(),
            source,
        };
        let mut writer = BufWriter::new(file);
        output_codec
            .encode(&mut writer, &gray, &self.config.encode_settings())
            .map_err(encode_failed)?;
        writer
            .flush()
            .map_err(|e| encode_failed(ImageError::IoError(e)))?;
        tracing::trace!("  Encode: {:?}", encode_start.elapsed());

        tracing::debug!(
            "Converted {:?} ({}, {}) in {:?}",
            output,
            output_codec,
            bounds,
            start.elapsed()
        );

        Ok(ConversionSummary {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            input_codec,
            output_codec,
            bounds,
        })
    }

    fn output_codec(output: &Path) -> ConversionResult<Codec> {
        Codec::from_path(output).ok_or_else(|| ConversionError::UnsupportedOutputFormat {
            path: output.to_path_buf(),
            extension: extension_label(output),
        })
    }
}
