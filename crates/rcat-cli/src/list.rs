//! # List Subcommand
//!
//! Loads the catalog, applies the region and search filters through the
//! catalog (so they combine exactly as they do for an interactive caller),
//! optionally sorts, and prints one line per card.

use anyhow::Result;
use clap::{Args, ValueEnum};
use rcat_catalog::CountryCatalog;
use rcat_core::{sort_cards, Card, SortKey};

use crate::render::card_line;
use crate::settings;

/// Arguments for `rcat list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only countries in this region (Africa, Americas, Asia, Europe, Oceania, Antarctic, ALL).
    #[arg(long)]
    pub region: Option<String>,

    /// Only countries whose name contains this text (case-insensitive).
    #[arg(long)]
    pub search: Option<String>,

    /// Sort the output; upstream order otherwise.
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Use the cached catalog instead of the network.
    #[arg(long)]
    pub offline: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortArg {
    Name,
    Population,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortKey::Name,
            SortArg::Population => SortKey::Population,
        }
    }
}

/// Compute the cards `rcat list` prints for an already-loaded catalog.
pub fn select(catalog: &CountryCatalog, args: &ListArgs) -> Vec<Card> {
    let mut cards = catalog.filtered();
    if let Some(region) = &args.region {
        cards = catalog.set_region_filter(region);
    }
    if let Some(search) = &args.search {
        cards = catalog.set_search_filter(search);
    }
    if let Some(sort) = args.sort {
        sort_cards(&mut cards, sort.into());
    }
    cards
}

/// Execute the list subcommand.
pub async fn run_list(catalog: &CountryCatalog, args: &ListArgs) -> Result<u8> {
    if !settings::load(catalog, args.offline).await {
        eprintln!("No country data available.");
        return Ok(2);
    }

    let cards = select(catalog, args);
    for card in &cards {
        println!("{}", card_line(card));
    }
    tracing::info!(shown = cards.len(), total = catalog.cards().len(), "listed countries");
    Ok(0)
}
