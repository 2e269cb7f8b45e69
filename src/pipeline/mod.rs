//! Favicon generation pipeline.

mod generator;

pub use generator::{Config, GeneratedFile, Generator, Report};
