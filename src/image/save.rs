//! Image saving utilities.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::ico::IcoEncoder;
use image::codecs::png::PngEncoder;
use image::{imageops::FilterType, DynamicImage, RgbImage};

use crate::error::{Error, Result};

use super::OutputFormat;

/// Resize an RGB image to a `size`x`size` square and write it to `path`.
///
/// Resampling always uses Lanczos3. Existing files are overwritten. The
/// parent directory must already exist.
///
/// # Errors
///
/// Returns an error naming `path` if the file cannot be created, encoded
/// or flushed.
pub fn save_favicon<P: AsRef<Path>>(
    rgb: &RgbImage,
    path: P,
    size: u32,
    format: OutputFormat,
) -> Result<()> {
    let path = path.as_ref();

    let resized = resize(rgb, size);

    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let output = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(output);

    match format {
        OutputFormat::Ico => {
            // ICO readers expect 32bpp RGBA frames.
            let frame = DynamicImage::ImageRgba8(resized.to_rgba8());
            frame
                .write_with_encoder(IcoEncoder::new(&mut writer))
                .map_err(|source| Error::save(path, source))?;
        }
        OutputFormat::Png => {
            resized
                .write_with_encoder(PngEncoder::new(&mut writer))
                .map_err(|source| Error::save(path, source))?;
        }
    }

    writer.flush().map_err(write_err)?;

    Ok(())
}

/// Resample to an exact square, ignoring aspect ratio.
fn resize(rgb: &RgbImage, size: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(image::imageops::resize(
        rgb,
        size,
        size,
        FilterType::Lanczos3,
    ))
}
