//! Command-line dashboard for Indian equity snapshots.
//!
//! Mirrors the single-page flow: pick an exchange, pick a symbol from the
//! listing table, fetch, and render two key-value tables plus the company
//! overview. Symbol tables default to a small embedded set and can be
//! replaced with `Symbol,Name` CSV files.
//!
//! ```bash
//! dalal-cli list --exchange nse
//! dalal-cli quote --exchange nse "INFY - Infosys Ltd"
//! dalal-cli quote --exchange bse --mock RELIANCE
//! ```

mod render;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::debug;

use dalal::{
    CacheConfig, CacheMiddleware, Dalal, DalalConnector, DalalError, Exchange, Middleware,
    SymbolDirectory, resolver,
};
use dalal_mock::MockConnector;
use dalal_yahoo::YahooConnector;

#[derive(Parser)]
#[command(
    name = "dalal-cli",
    version,
    about = "Indian stock dashboard: look up NSE/BSE symbols and fetch snapshot quotes"
)]
struct Cli {
    /// Replace the embedded NSE table with a Symbol,Name CSV file.
    #[arg(long, global = true, value_name = "PATH")]
    nse_symbols: Option<PathBuf>,

    /// Replace the embedded BSE table with a Symbol,Name CSV file.
    #[arg(long, global = true, value_name = "PATH")]
    bse_symbols: Option<PathBuf>,

    /// Use the offline fixture connector instead of Yahoo Finance.
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the supported exchanges.
    Exchanges,
    /// Print the symbol dropdown entries for an exchange.
    List {
        /// Exchange to list (nse or bse).
        #[arg(long, default_value = "nse")]
        exchange: Exchange,
    },
    /// Fetch and display the snapshot for a selected symbol.
    Quote {
        /// Exchange the symbol trades on (nse or bse).
        #[arg(long, default_value = "nse")]
        exchange: Exchange,
        /// Symbol or dropdown label, e.g. "INFY" or "INFY - Infosys Ltd".
        selection: String,
    },
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn load_directory(cli: &Cli) -> Result<SymbolDirectory, DalalError> {
    let mut dir = SymbolDirectory::with_defaults();
    if let Some(path) = &cli.nse_symbols {
        dir.load_csv_path(Exchange::Nse, path)?;
    }
    if let Some(path) = &cli.bse_symbols {
        dir.load_csv_path(Exchange::Bse, path)?;
    }
    Ok(dir)
}

fn build_orchestrator(mock: bool) -> Result<Dalal, DalalError> {
    let connector: Arc<dyn DalalConnector> = if mock {
        Arc::new(MockConnector::new())
    } else {
        Arc::new(YahooConnector::try_default()?)
    };
    // Identical tickers within the cache window skip the provider round-trip.
    let cached = Box::new(CacheMiddleware::new(CacheConfig::default())).apply(connector);
    Dalal::builder().with_connector(cached).build()
}

async fn run(cli: Cli) -> Result<(), DalalError> {
    match &cli.command {
        Command::Exchanges => {
            for exchange in Exchange::ALL {
                println!("{exchange}");
            }
            Ok(())
        }
        Command::List { exchange } => {
            let dir = load_directory(&cli)?;
            for label in dir.labels(*exchange) {
                println!("{label}");
            }
            Ok(())
        }
        Command::Quote {
            exchange,
            selection,
        } => {
            let ticker = resolver::resolve_ticker(*exchange, selection)?;
            debug!(target: "dalal_cli", %ticker, "resolved selection");

            let dalal = build_orchestrator(cli.mock)?;
            let report = dalal.snapshot(&ticker).await?;
            render::report(&report);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(DalalError::NotFound { .. }) => {
            eprintln!("No data found. Please check the symbol or try a different one.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error fetching data: {e}");
            eprintln!("No data found. Please check the symbol or try a different one.");
            ExitCode::FAILURE
        }
    }
}
