//! # favigen
//!
//! Generates the favicon set for a site from its logo.
//!
//! The logo is read from `public/images/ogenki-logo.png`, normalized to RGB
//! and resampled with Lanczos3 into:
//!
//! | Path | Size | Format |
//! |---|---|---|
//! | `public/favicon.ico` | 32x32 | ICO |
//! | `public/images/favicon-16x16.png` | 16x16 | PNG |
//! | `public/images/favicon-32x32.png` | 32x32 | PNG |
//! | `public/images/apple-touch-icon.png` | 180x180 | PNG |
//!
//! ## Example
//!
//! ```no_run
//! use favigen::{Config, Generator};
//!
//! # fn main() -> favigen::Result<()> {
//! let report = Generator::new(Config::default()).run()?;
//!
//! for file in &report.files {
//!     println!("{}", file.path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod image;
pub mod pipeline;

pub use error::{Error, Result};
pub use pipeline::{Config, GeneratedFile, Generator, Report};
