//! Image loading utilities.

use std::path::Path;

use image::{ColorType, DynamicImage, GenericImageView, ImageReader, RgbImage};

use crate::error::{Error, Result};

/// A decoded logo, normalized to 8-bit RGB.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// Pixels after color normalization.
    pub rgb: RgbImage,
    /// Color type the file was stored in.
    pub original_color: ColorType,
}

impl SourceImage {
    /// Width and height in pixels.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.rgb.dimensions()
    }
}

/// Load an image from disk and normalize it to RGB.
///
/// The format is sniffed from the file contents, so a mislabelled file is
/// decoded by the right codec (or rejected as unsupported).
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<SourceImage> {
    let path = path.as_ref();

    let read_err = |source| Error::ReadSource {
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(read_err)?
        .decode()
        .map_err(|source| Error::load(path, source))?;

    let (width, height) = img.dimensions();
    tracing::debug!(
        "Loaded {} ({width}x{height}, {:?})",
        path.display(),
        img.color()
    );

    Ok(normalize(img))
}

/// Drop alpha and expand grayscale or palette data to three channels.
fn normalize(img: DynamicImage) -> SourceImage {
    let original_color = img.color();
    let rgb = match img {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => other.to_rgb8(),
    };

    SourceImage {
        rgb,
        original_color,
    }
}

#[cfg(test)]
mod tests {
    use image::{LumaA, Rgba, RgbaImage};

    use super::*;

    #[test]
    fn test_normalize_keeps_rgb() {
        let img = DynamicImage::new_rgb8(10, 7);
        let source = normalize(img);

        assert_eq!(source.original_color, ColorType::Rgb8);
        assert_eq!(source.dimensions(), (10, 7));
    }

    #[test]
    fn test_normalize_grayscale_alpha() {
        let img = image::ImageBuffer::from_pixel(4, 4, LumaA([200u8, 0]));
        let source = normalize(DynamicImage::ImageLumaA8(img));

        assert_eq!(source.original_color, ColorType::La8);
        assert_eq!(source.rgb.get_pixel(0, 0).0, [200, 200, 200]);
    }

    #[test]
    fn test_normalize_drops_alpha() {
        let img = RgbaImage::from_pixel(3, 3, Rgba([10, 20, 30, 0]));
        let source = normalize(DynamicImage::ImageRgba8(img));

        assert_eq!(source.rgb.get_pixel(2, 2).0, [10, 20, 30]);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let err = load_image("does/not/exist.png").unwrap_err();

        assert!(matches!(err, Error::ReadSource { .. }), "{err}");
        assert!(err.to_string().contains("does/not/exist.png"));
    }
}
