//! BT.601 luma conversion.
//!
//! Uses `Y = 0.299R + 0.587G + 0.114B` in 16-bit fixed point:
//!
//! ```text
//! Y = (19595·R + 38470·G + 7471·B + 2^15) >> 24      R, G, B in 0..=65535
//! ```
//!
//! The weights sum to 65536, so a gray pixel `R = G = B = v` maps back to `v`.
//! Channels are read non-premultiplied and alpha is discarded.

use image::{DynamicImage, GenericImageView, GrayImage, Luma};

const WEIGHT_R: u32 = 19595;
const WEIGHT_G: u32 = 38470;
const WEIGHT_B: u32 = 7471;
const ROUNDING: u32 = 1 << 15;

/// Luma of a 16-bit-per-channel color, as an 8-bit intensity.
#[inline]
pub fn luma_from_rgb16(r: u16, g: u16, b: u16) -> u8 {
    let y = WEIGHT_R * u32::from(r) + WEIGHT_G * u32::from(g) + WEIGHT_B * u32::from(b) + ROUNDING;
    (y >> 24) as u8
}

/// Luma of an 8-bit-per-channel color.
#[inline]
pub fn luma_from_rgb8(r: u8, g: u8, b: u8) -> u8 {
    luma_from_rgb16(widen(r), widen(g), widen(b))
}

#[inline]
fn widen(v: u8) -> u16 {
    u16::from(v) * 257
}

/// Convert a decoded image to an 8-bit grayscale image of the same size.
pub fn to_grayscale(source: &DynamicImage) -> GrayImage {
    let (width, height) = source.dimensions();
    let mut gray = GrayImage::new(width, height);

    match source {
        // 8-bit sources avoid a full-image widening copy
        DynamicImage::ImageRgb8(rgb) => {
            for (x, y, px) in rgb.enumerate_pixels() {
                let [r, g, b] = px.0;
                gray.put_pixel(x, y, Luma([luma_from_rgb8(r, g, b)]));
            }
        }
        DynamicImage::ImageRgba8(rgba) => {
            for (x, y, px) in rgba.enumerate_pixels() {
                let [r, g, b, _] = px.0;
                gray.put_pixel(x, y, Luma([luma_from_rgb8(r, g, b)]));
            }
        }
        other => {
            let rgba = other.to_rgba16();
            for (x, y, px) in rgba.enumerate_pixels() {
                let [r, g, b, _] = px.0;
                gray.put_pixel(x, y, Luma([luma_from_rgb16(r, g, b)]));
            }
        }
    }

    gray
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, Rgba, RgbaImage};

    #[test]
    fn test_primaries_match_bt601_rounding() {
        assert_eq!(luma_from_rgb8(255, 0, 0), 76);
        assert_eq!(luma_from_rgb8(0, 255, 0), 150);
        assert_eq!(luma_from_rgb8(0, 0, 255), 29);
        assert_eq!(luma_from_rgb8(255, 255, 255), 255);
        assert_eq!(luma_from_rgb8(0, 0, 0), 0);
    }

    #[test]
    fn test_gray_input_is_identity() {
        for v in 0..=255u8 {
            assert_eq!(luma_from_rgb8(v, v, v), v, "gray level {v}");
        }
    }

    #[test]
    fn test_16bit_full_scale() {
        assert_eq!(luma_from_rgb16(u16::MAX, u16::MAX, u16::MAX), 255);
        assert_eq!(luma_from_rgb16(u16::MAX, 0, 0), 76);
    }

    #[test]
    fn test_to_grayscale_2x2_scenario() {
        let src = RgbaImage::from_raw(
            2,
            2,
            vec![
                255, 0, 0, 255, //
                0, 255, 0, 255, //
                0, 0, 255, 255, //
                255, 255, 255, 255,
            ],
        )
        .unwrap();
        let gray = to_grayscale(&DynamicImage::ImageRgba8(src));
        assert_eq!(gray.dimensions(), (2, 2));
        assert_eq!(gray.into_raw(), vec![76, 150, 29, 255]);
    }

    #[test]
    fn test_alpha_does_not_affect_luma() {
        let opaque = RgbaImage::from_pixel(3, 3, Rgba([200, 100, 50, 255]));
        let clear = RgbaImage::from_pixel(3, 3, Rgba([200, 100, 50, 0]));
        let half = RgbaImage::from_pixel(3, 3, Rgba([200, 100, 50, 128]));

        let a = to_grayscale(&DynamicImage::ImageRgba8(opaque));
        let b = to_grayscale(&DynamicImage::ImageRgba8(clear));
        let c = to_grayscale(&DynamicImage::ImageRgba8(half));
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_preserves_dimensions() {
        let src = DynamicImage::new_rgb8(17, 5);
        let gray = to_grayscale(&src);
        assert_eq!(gray.dimensions(), (17, 5));
    }

    #[test]
    fn test_16bit_source_matches_8bit_source() {
        let rgb8: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_fn(8, 8, |x, y| Rgb([(x * 30) as u8, (y * 30) as u8, 77]));
        let src8 = DynamicImage::ImageRgb8(rgb8);
        let src16 = DynamicImage::ImageRgb16(src8.to_rgb16());
        assert_eq!(to_grayscale(&src8), to_grayscale(&src16));
    }

    #[test]
    fn test_luma_source_passes_through() {
        let luma = GrayImage::from_fn(4, 4, |x, y| Luma([(x * 16 + y * 64) as u8]));
        let gray = to_grayscale(&DynamicImage::ImageLuma8(luma.clone()));
        assert_eq!(gray, luma);
    }
}
