//! find-root CLI
//!
//! Prints the directory test tooling should treat as the project root.
//!

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use commands::locate::run_locate;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(verbose: u8) {
    // -v wins over RUST_LOG; without either only warnings are shown
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    run_locate(&cli)?;

    Ok(())
}
