//! Image loading, resizing, and saving utilities.

mod load;
mod save;

pub use load::{load_image, SourceImage};
pub use save::save_favicon;

use image::ImageFormat;

/// Logo the favicons are generated from, relative to the site root.
pub const SOURCE_PATH: &str = "public/images/ogenki-logo.png";

/// Directory that receives the PNG favicons.
pub const OUTPUT_DIR: &str = "public/images";

/// Every favicon written on a run, in generation order.
pub const FAVICON_TARGETS: [FaviconTarget; 4] = [
    FaviconTarget::new("public/favicon.ico", 32, OutputFormat::Ico),
    FaviconTarget::new("public/images/favicon-16x16.png", 16, OutputFormat::Png),
    FaviconTarget::new("public/images/favicon-32x32.png", 32, OutputFormat::Png),
    FaviconTarget::new("public/images/apple-touch-icon.png", 180, OutputFormat::Png),
];

/// Container format of a generated favicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Windows icon with a single embedded frame.
    Ico,
    /// Plain PNG.
    Png,
}

impl OutputFormat {
    /// The matching `image` crate format.
    #[must_use]
    pub const fn image_format(self) -> ImageFormat {
        match self {
            Self::Ico => ImageFormat::Ico,
            Self::Png => ImageFormat::Png,
        }
    }
}

/// A single square favicon to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaviconTarget {
    /// Output path relative to the site root.
    pub path: &'static str,
    /// Edge length in pixels.
    pub size: u32,
    pub format: OutputFormat,
}

impl FaviconTarget {
    #[must_use]
    pub const fn new(path: &'static str, size: u32, format: OutputFormat) -> Self {
        Self { path, size, format }
    }

    /// File name without the directory part.
    #[must_use]
    pub fn file_name(&self) -> &'static str {
        self.path.rsplit('/').next().unwrap_or(self.path)
    }
}
