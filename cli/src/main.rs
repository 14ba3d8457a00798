#![deny(missing_docs)]

//! # API Docs CLI
//!
//! Command Line Interface for the documentation page generator.
//!
//! Supported Commands:
//! - `generate`: OpenAPI document + page manifest -> rendered pages.

use apidocs_core::AppResult;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod generate;

#[derive(Parser, Debug)]
#[clap(author, version, about = "API documentation page generator")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate every page listed in the manifest.
    Generate(generate::GenerateArgs),
}

/// Installs the stderr subscriber; `RUST_LOG` wins over `-v` flags.
fn init_tracing(verbose: u8) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,apidocs_core=info,apidocs=info".to_string(),
            _ => "info,apidocs_core=debug,apidocs=debug".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Generate(args) => {
            let config = config::GenerateConfig::from_args(args);
            generate::execute(&config)?;
        }
    }

    Ok(())
}
