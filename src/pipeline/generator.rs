//! Generates the favicon set from the site logo.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::image::{self, OutputFormat, FAVICON_TARGETS, OUTPUT_DIR, SOURCE_PATH};

/// Configuration for the favicon generator.
#[derive(Debug, Clone)]
pub struct Config {
    /// Site root the fixed source and output paths are resolved against.
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

/// A favicon written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Logo the set was generated from.
    pub source: PathBuf,
    /// Logo dimensions before resizing.
    pub source_dimensions: (u32, u32),
    /// Files in the order they were written.
    pub files: Vec<GeneratedFile>,
}

/// Turns the logo under a site root into the standard favicon files.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: Config,
}

impl Generator {
    /// Create a generator for the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Path of the logo under the configured root.
    #[must_use]
    pub fn source_path(&self) -> PathBuf {
        self.config.root.join(SOURCE_PATH)
    }

    /// Resolve a root-relative output path.
    #[must_use]
    pub fn target_path(&self, relative: &str) -> PathBuf {
        self.config.root.join(relative)
    }

    /// Generate every favicon from the logo.
    ///
    /// Nothing is touched when the logo is missing. A failure partway
    /// through leaves earlier files in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSource`] if the logo does not exist, or the
    /// first load, directory or encode error encountered.
    pub fn run(&self) -> Result<Report> {
        let source = self.source_path();
        if !source.exists() {
            return Err(Error::MissingSource { path: source });
        }

        tracing::info!("Reading logo from {}", source.display());
        let logo = image::load_image(&source)?;
        tracing::debug!("Source color type {:?}", logo.original_color);

        create_dir(&self.target_path(OUTPUT_DIR))?;

        let mut files = Vec::with_capacity(FAVICON_TARGETS.len());
        for target in FAVICON_TARGETS {
            let path = self.target_path(target.path);
            if let Some(parent) = path.parent() {
                create_dir(parent)?;
            }

            tracing::info!(
                "Generating {} ({}x{})...",
                target.file_name(),
                target.size,
                target.size
            );
            image::save_favicon(&logo.rgb, &path, target.size, target.format)?;
            tracing::info!("Created {}", path.display());

            files.push(GeneratedFile {
                path,
                width: target.size,
                height: target.size,
                format: target.format,
            });
        }

        Ok(Report {
            source,
            source_dimensions: logo.dimensions(),
            files,
        })
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
