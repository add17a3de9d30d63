//! Integration tests for loading a catalog from YAML configuration.

use std::io::Write as _;

use rusty_money::{Money, iso::GBP};
use testresult::TestResult;

use tally::{
    catalog::Catalog,
    checkout::Checkout,
    config::{CatalogConfig, ConfigError},
};

const REFERENCE_YAML: &str = "
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

#[test]
fn yaml_catalog_prices_a_full_basket() -> TestResult {
    let config = CatalogConfig::from_yaml(REFERENCE_YAML)?;
    let catalog = Catalog::try_from(config)?;

    let mut checkout = Checkout::new(&catalog);

    for code in ["A", "A", "A", "B", "B", "D"] {
        checkout.scan(code)?;
    }

    assert_eq!(checkout.total(), Money::from_minor(190, GBP));

    Ok(())
}

#[test]
fn from_path_reads_a_catalog_file() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(REFERENCE_YAML.as_bytes())?;

    let config = CatalogConfig::from_path(file.path())?;
    let catalog = Catalog::try_from(config)?;

    assert_eq!(catalog.unit_price("C"), Some(&Money::from_minor(20, GBP)));

    Ok(())
}

#[test]
fn from_path_missing_file_errors() {
    let result = CatalogConfig::from_path("does/not/exist.yml");

    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn malformed_yaml_errors() {
    let result = CatalogConfig::from_yaml("prices: [not, a, map]");

    assert!(matches!(result, Err(ConfigError::Yaml(_))));
}
