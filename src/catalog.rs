//! Catalog
//!
//! The fixed pricing configuration for a checkout: unit prices per item code
//! and optional multi-buy offers, all in a single currency.

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors related to catalog construction.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A price's currency differs from the catalog currency (code, price currency, catalog currency).
    #[error("Price for '{0}' has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(String, &'static str, &'static str),

    /// A multi-buy offer references an item code with no unit price.
    #[error("Offer for '{0}' references an item with no unit price")]
    UnpricedOffer(String),

    /// A multi-buy offer's quantity is too small to form a bundle.
    #[error("Offer for '{code}' has quantity {quantity}; a bundle needs at least 2 units")]
    InvalidOfferQuantity {
        /// Item code the offer applies to
        code: String,

        /// Offending bundle quantity
        quantity: u32,
    },
}

/// A multi-buy offer: every `quantity` units of an item cost `price` total,
/// with leftover units priced individually.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiBuy {
    quantity: u32,
    price: Money<'static, Currency>,
}

impl MultiBuy {
    /// Creates a new multi-buy offer.
    #[must_use]
    pub fn new(quantity: u32, price: Money<'static, Currency>) -> Self {
        Self { quantity, price }
    }

    /// Returns the number of units that form one bundle.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the price of one bundle.
    pub fn price(&self) -> &Money<'static, Currency> {
        &self.price
    }
}

/// Catalog
///
/// Immutable after construction; a [`Checkout`](crate::checkout::Checkout)
/// borrows it for its whole lifetime.
#[derive(Debug)]
pub struct Catalog {
    prices: FxHashMap<String, Money<'static, Currency>>,
    offers: FxHashMap<String, MultiBuy>,
    currency: &'static Currency,
}

impl Catalog {
    /// Create a new catalog from a price table and a multi-buy offer table.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if any price or offer price has a currency
    /// other than `currency`, if an offer references an unpriced item code,
    /// or if an offer's bundle quantity is below 2.
    pub fn with_tables(
        prices: FxHashMap<String, Money<'static, Currency>>,
        offers: FxHashMap<String, MultiBuy>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        prices.iter().try_for_each(|(code, price)| {
            ensure_currency(code, price.currency(), currency)
        })?;

        offers.iter().try_for_each(|(code, offer)| {
            if !prices.contains_key(code) {
                return Err(CatalogError::UnpricedOffer(code.clone()));
            }

            if offer.quantity() < 2 {
                return Err(CatalogError::InvalidOfferQuantity {
                    code: code.clone(),
                    quantity: offer.quantity(),
                });
            }

            ensure_currency(code, offer.price().currency(), currency)
        })?;

        Ok(Catalog {
            prices,
            offers,
            currency,
        })
    }

    /// Get the unit price for an item code, if it is priced.
    #[must_use]
    pub fn unit_price(&self, code: &str) -> Option<&Money<'static, Currency>> {
        self.prices.get(code)
    }

    /// Get the multi-buy offer for an item code, if one exists.
    #[must_use]
    pub fn offer(&self, code: &str) -> Option<&MultiBuy> {
        self.offers.get(code)
    }

    /// Check whether an item code has a unit price.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.prices.contains_key(code)
    }

    /// Iterate over the priced item codes, in no particular order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.prices.keys().map(String::as_str)
    }

    /// Get the currency of the catalog.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

/// Surface a `CurrencyMismatch` unless the two currencies agree.
fn ensure_currency(
    code: &str,
    found: &'static Currency,
    expected: &'static Currency,
) -> Result<(), CatalogError> {
    if found == expected {
        Ok(())
    } else {
        Err(CatalogError::CurrencyMismatch(
            code.to_string(),
            found.iso_alpha_code,
            expected.iso_alpha_code,
        ))
    }
}
