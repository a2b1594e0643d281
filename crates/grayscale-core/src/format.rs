//! Codec dispatch by file extension.
//!
//! The extension alone decides which codec handles a file. Content is never
//! sniffed: a PNG saved as `photo.jpg` goes to the JPEG decoder and fails there.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, GrayImage, ImageFormat, ImageResult};
use std::fmt;
use std::io::{BufRead, Seek, Write};
use std::path::Path;

/// Default JPEG quality, matching the conventional encoder default.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// A supported decode/encode pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Codec {
    Png,
    Jpeg,
}

/// Encoder knobs that do not affect pixel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeSettings {
    /// JPEG quality, 1..=100. Ignored for PNG.
    pub jpeg_quality: u8,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl Codec {
    /// Look up a codec from a bare extension (case-insensitive, no leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    /// Look up a codec from the final extension of `path`.
    ///
    /// A file named exactly `.png` or `.jpg` has no extension in
    /// [`Path::extension`] terms and is rejected.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// The matching `image` crate format.
    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }

    /// Decode a whole image from `reader` with this codec's decoder.
    pub fn decode<R: BufRead + Seek>(self, reader: R) -> ImageResult<DynamicImage> {
        image::load(reader, self.image_format())
    }

    /// Encode a single-channel image to `writer`.
    pub fn encode<W: Write>(
        self,
        writer: W,
        image: &GrayImage,
        settings: &EncodeSettings,
    ) -> ImageResult<()> {
        match self {
            Self::Png => image.write_with_encoder(PngEncoder::new(writer)),
            Self::Jpeg => image.write_with_encoder(JpegEncoder::new_with_quality(
                writer,
                settings.jpeg_quality,
            )),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extension of `path` for error messages ("none" when absent).
pub(crate) fn extension_label(path: &Path) -> String {
    path.extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "none".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_from_extension_case_insensitive() {
        assert_eq!(Codec::from_extension("png"), Some(Codec::Png));
        assert_eq!(Codec::from_extension("PNG"), Some(Codec::Png));
        assert_eq!(Codec::from_extension("jpg"), Some(Codec::Jpeg));
        assert_eq!(Codec::from_extension("JPeG"), Some(Codec::Jpeg));
        assert_eq!(Codec::from_extension("bmp"), None);
        assert_eq!(Codec::from_extension("gif"), None);
        assert_eq!(Codec::from_extension(""), None);
    }

    #[test]
    fn test_from_path_uses_final_extension() {
        assert_eq!(Codec::from_path(Path::new("a/b/photo.Jpg")), Some(Codec::Jpeg));
        assert_eq!(Codec::from_path(Path::new("archive.png.bmp")), None);
        assert_eq!(Codec::from_path(Path::new("photo.bmp.png")), Some(Codec::Png));
        assert_eq!(Codec::from_path(Path::new("no_extension")), None);
        assert_eq!(Codec::from_path(Path::new(".png")), None);
    }

    #[test]
    fn test_extension_label() {
        assert_eq!(extension_label(Path::new("x.GIF")), "GIF");
        assert_eq!(extension_label(Path::new("x")), "none");
    }

    #[test]
    fn test_png_encode_then_decode() {
        let gray = GrayImage::from_raw(3, 2, vec![0, 40, 80, 120, 160, 200]).unwrap();
        let mut bytes = Vec::new();
        Codec::Png
            .encode(&mut bytes, &gray, &EncodeSettings::default())
            .unwrap();
        assert_eq!(&bytes[1..4], b"PNG");

        let decoded = Codec::Png.decode(Cursor::new(bytes)).unwrap();
        assert_eq!(decoded.color(), image::ColorType::L8);
        assert_eq!(decoded.into_luma8(), gray);
    }

    #[test]
    fn test_jpeg_encode_writes_soi_marker() {
        let gray = GrayImage::from_pixel(16, 16, image::Luma([128]));
        let mut bytes = Vec::new();
        Codec::Jpeg
            .encode(&mut bytes, &gray, &EncodeSettings { jpeg_quality: 90 })
            .unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_png_bytes_rejected_by_jpeg_decoder() {
        let gray = GrayImage::new(4, 4);
        let mut bytes = Vec::new();
        Codec::Png
            .encode(&mut bytes, &gray, &EncodeSettings::default())
            .unwrap();
        assert!(Codec::Jpeg.decode(Cursor::new(bytes)).is_err());
    }
}
