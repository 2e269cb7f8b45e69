//! favigen CLI - Generate favicons from the site logo.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use favigen::{Config, Generator};

/// Generate favicon.ico, PNG favicons and the Apple touch icon from
/// public/images/ogenki-logo.png in the current directory.
#[derive(Parser, Debug)]
#[command(name = "favigen")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("favigen={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Err(err) = run() {
        tracing::error!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    let generator = Generator::new(Config::default());

    let report = generator.run().context("Failed to generate favicons")?;

    for file in &report.files {
        println!(
            "✓ Created {} ({}x{})",
            file.path.display(),
            file.width,
            file.height
        );
    }
    println!("\nAll favicon files generated successfully!");

    Ok(())
}
