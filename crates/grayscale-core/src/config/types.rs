//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};

use crate::format::{EncodeSettings, DEFAULT_JPEG_QUALITY};

/// Conversion settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// JPEG encoder quality (1-100)
    pub jpeg_quality: u8,

    /// Check the output extension before creating the output file.
    ///
    /// When false, the output file is created first and an unsupported
    /// extension leaves an empty file behind.
    pub validate_output_before_create: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            validate_output_before_create: false,
        }
    }
}

impl ConversionConfig {
    /// Encoder settings derived from this config.
    ///
    /// `jpeg_quality` is clamped to 1..=100. Configs loaded from a file are
    /// rejected outside that range instead.
    pub fn encode_settings(&self) -> EncodeSettings {
        EncodeSettings {
            jpeg_quality: self.jpeg_quality.clamp(1, 100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_settings_clamp_jpeg_quality() {
        let low = ConversionConfig {
            jpeg_quality: 0,
            ..ConversionConfig::default()
        };
        assert_eq!(low.encode_settings().jpeg_quality, 1);

        let high = ConversionConfig {
            jpeg_quality: 255,
            ..ConversionConfig::default()
        };
        assert_eq!(high.encode_settings().jpeg_quality, 100);

        assert_eq!(ConversionConfig::default().encode_settings().jpeg_quality, 75);
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
