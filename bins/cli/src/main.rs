//! Moneta CLI
//!
//! Inspect currencies and try out money parsing, conversion and allocation
//! from the terminal.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use moneta_core::CurrencyContext;
use moneta_shared::{AppConfig, AppError, LoggingConfig};

mod commands;

/// Moneta - money values with currencies
#[derive(Debug, Parser)]
#[command(name = "moneta", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List registered currencies
    Currencies {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse "<CODE> <amount>" or a bare amount and print it
    Parse {
        /// Monetary text, e.g. "USD 5.00"
        text: String,
    },

    /// Convert a value into another currency through the default currency
    Convert {
        /// Monetary text, e.g. "EUR 10"
        text: String,
        /// Target currency code
        code: String,
    },

    /// Split a value by ratios without losing minor units
    Allocate {
        /// Monetary text, e.g. "USD 100"
        text: String,
        /// Ratios, e.g. 1 1 1
        #[arg(required = true, num_args = 1..)]
        ratios: Vec<String>,
    },

    /// Show the currency used in a country (ISO 3166 alpha-2)
    Country {
        /// Country code, e.g. "JP"
        code: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            e.downcast_ref::<AppError>()
                .map_or(ExitCode::FAILURE, |err| ExitCode::from(err.exit_code()))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().map_err(AppError::from)?;
    init_tracing(&config.logging);

    CurrencyContext::global()
        .apply_config(&config.money)
        .map_err(AppError::from)?;

    let output = match cli.command {
        Commands::Currencies { json } => commands::currencies(json),
        Commands::Parse { text } => commands::parse(&text),
        Commands::Convert { text, code } => commands::convert(&text, &code),
        Commands::Allocate { text, ratios } => commands::allocate(&text, &ratios),
        Commands::Country { code } => commands::country(&code),
    }?;
    println!("{output}");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    // Logs go to stderr so command output stays pipeable
    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
