//! Checkout Demo
//!
//! Scans a string of single-letter item codes and prints the total.
//!
//! Use `-c` to load a catalog from a YAML file instead of the built-in one.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use tally::{catalog::Catalog, checkout::Checkout, config::CatalogConfig};

/// Built-in catalog: A=50p (3 for 130), B=30p (2 for 45), C=20p, D=15p.
const DEFAULT_CATALOG: &str = "
currency: GBP
prices:
  A: 50
  B: 30
  C: 20
  D: 15
offers:
  A:
    quantity: 3
    price: 130
  B:
    quantity: 2
    price: 45
";

/// Checkout demo arguments
#[derive(Debug, Parser)]
struct Args {
    /// Item codes to scan, one letter per item (for example "AAABBD")
    items: String,

    /// Path to a catalog YAML file
    #[clap(short, long)]
    catalog: Option<PathBuf>,
}

/// Checkout Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = Args::parse();

    let config = match args.catalog.as_deref() {
        Some(path) => CatalogConfig::from_path(path)?,
        None => CatalogConfig::from_yaml(DEFAULT_CATALOG)?,
    };

    let catalog = Catalog::try_from(config)?;
    let mut checkout = Checkout::new(&catalog);

    for code in args.items.chars() {
        checkout.scan(&code.to_string())?;
    }

    println!(
        "{} items ({} distinct): {}",
        checkout.cart().units(),
        checkout.cart().distinct_items(),
        checkout.total()
    );

    Ok(())
}
