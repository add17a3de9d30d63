//! Configuration
//!
//! YAML catalog configuration: a currency code plus price and offer tables
//! in minor units, convertible into a [`Catalog`].

use std::{fs, path::Path};

use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError, MultiBuy};

/// Catalog configuration parsing errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Table validation error bubbled up from catalog construction
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Catalog configuration as found in YAML.
///
/// Prices are non-negative integers in the currency's minor unit (pence for
/// GBP, cents for USD/EUR).
#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// ISO alpha code of the catalog currency
    pub currency: String,

    /// Map of item code -> unit price in minor units
    pub prices: FxHashMap<String, u32>,

    /// Map of item code -> multi-buy offer
    #[serde(default)]
    pub offers: FxHashMap<String, OfferConfig>,
}

/// A multi-buy offer as found in YAML.
#[derive(Debug, Deserialize)]
pub struct OfferConfig {
    /// Number of units that form one bundle
    pub quantity: u32,

    /// Price of one bundle in minor units
    pub price: u32,
}

impl CatalogConfig {
    /// Load a catalog configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Parse a catalog configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the YAML does not match the expected shape.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_norway::from_str(yaml)?)
    }
}

impl TryFrom<CatalogConfig> for Catalog {
    type Error = ConfigError;

    fn try_from(config: CatalogConfig) -> Result<Self, Self::Error> {
        let currency = parse_currency(&config.currency)?;

        let prices = config
            .prices
            .into_iter()
            .map(|(code, minor)| (code, Money::from_minor(i64::from(minor), currency)))
            .collect();

        let offers = config
            .offers
            .into_iter()
            .map(|(code, offer)| {
                let price = Money::from_minor(i64::from(offer.price), currency);

                (code, MultiBuy::new(offer.quantity, price))
            })
            .collect();

        Ok(Catalog::with_tables(prices, offers, currency)?)
    }
}

/// Resolve an ISO alpha currency code to a currency.
fn parse_currency(code: &str) -> Result<&'static Currency, ConfigError> {
    match code {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(ConfigError::UnknownCurrency(other.to_string())),
    }
}
