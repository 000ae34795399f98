//! # Economía
//!
//! Desktop shell for the business-management pages: purchases, summaries,
//! production, products, sales, expenses and settings.
//!
//! ```bash
//! cargo run
//!
//! # Use a specific config file
//! cargo run -- --config ./economia.toml
//!
//! # More logging (or set RUST_LOG)
//! cargo run -- -vv
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use economia_ui::{Flags, run};

/// Economía - business management desktop application
#[derive(Parser, Debug)]
#[command(name = "economia")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file to read and write instead of the per-user default
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn level_for(verbose: u8) -> tracing::Level {
    match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(args.verbose).to_string()));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(filter)
        .init();

    tracing::info!("Starting Economía v{}", env!("CARGO_PKG_VERSION"));

    let flags = Flags {
        config: args.config,
    };

    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
