//! # rcat CLI entry point
//!
//! Parses command-line arguments, initializes tracing, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rcat_cli::detail::{run_detail, DetailArgs};
use rcat_cli::list::{run_list, ListArgs};
use rcat_cli::settings::Settings;

/// Browse the REST Countries catalog from the terminal.
#[derive(Parser, Debug)]
#[command(name = "rcat", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    /// API base URL [env: RCAT_API_BASE_URL].
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Directory for the persisted catalog [env: RCAT_CACHE_DIR].
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List country cards, optionally filtered by region and name.
    List(ListArgs),

    /// Show the full detail view for one country.
    Detail(DetailArgs),
}

fn init_tracing(verbose: u8, json: bool) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let settings = Settings::resolve(cli.base_url, cli.cache_dir);
    tracing::debug!(?settings, "resolved settings");

    let result = match settings.build_catalog() {
        Ok(catalog) => match &cli.command {
            Commands::List(args) => run_list(&catalog, args).await,
            Commands::Detail(args) => run_detail(&catalog, args).await,
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
