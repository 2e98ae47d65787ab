//! # Detail Subcommand
//!
//! Loads the catalog first so border codes resolve to names, then fetches
//! the exact-match record for one country and prints the detail block.
//! Without a loaded catalog the detail is still shown, with raw border codes.

use anyhow::Result;
use clap::Args;
use rcat_catalog::CountryCatalog;

use crate::render::detail_block;
use crate::settings;

/// Arguments for `rcat detail`.
#[derive(Args, Debug)]
pub struct DetailArgs {
    /// Common name of the country, e.g. "Germany".
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Resolve border names from the cached catalog instead of the network.
    #[arg(long)]
    pub offline: bool,
}

/// Execute the detail subcommand.
pub async fn run_detail(catalog: &CountryCatalog, args: &DetailArgs) -> Result<u8> {
    if !settings::load(catalog, args.offline).await {
        tracing::warn!("catalog not loaded, border codes will not be resolved");
    }

    match catalog.fetch_detail(&args.name).await {
        Some(detail) => {
            print!("{}", detail_block(&detail));
            Ok(0)
        }
        None => {
            eprintln!("No details found for \"{}\".", args.name.trim());
            Ok(1)
        }
    }
}
