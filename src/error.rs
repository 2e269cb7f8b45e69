//! Custom error types for favigen.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the favigen library.
#[derive(Error, Debug)]
pub enum Error {
    /// The logo to generate favicons from does not exist.
    #[error("logo file not found at {path}; place your logo there and run again")]
    MissingSource { path: PathBuf },

    /// The image backend was built without the codec this file needs.
    #[error(
        "no codec available for {path} (rebuild with the `image` crate features `png` and `ico` enabled)"
    )]
    UnsupportedFormat {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to open or read the logo.
    #[error("failed to read {path}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load an image file.
    #[error("failed to load image from {path}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to create or flush an output file.
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to save an image file.
    #[error("failed to save image to {path}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to create an output directory.
    #[error("failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Classify an image error raised while decoding `path`.
    pub(crate) fn load(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        let path = path.into();
        match source {
            image::ImageError::Unsupported(_) => Self::UnsupportedFormat { path, source },
            source => Self::ImageLoad { path, source },
        }
    }

    /// Classify an image error raised while encoding to `path`.
    pub(crate) fn save(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        let path = path.into();
        match source {
            image::ImageError::Unsupported(_) => Self::UnsupportedFormat { path, source },
            source => Self::ImageSave { path, source },
        }
    }
}

/// Result type alias for favigen operations.
pub type Result<T> = std::result::Result<T, Error>;
