//! Checkout
//!
//! The checkout entity: a borrowed, immutable [`Catalog`] plus a mutable
//! [`Cart`] of scanned items, and the operations to scan, total, and reset.

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    cart::Cart,
    catalog::Catalog,
    pricing::{cart_total, item_price},
};

/// Errors raised by checkout operations.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// The item code is not present in the catalog's price table.
    #[error("Item '{0}' not found in the price list")]
    UnknownItem(String),
}

/// Checkout
///
/// Owns the current cart state; answers "what does this cart cost now".
/// Single-threaded by design: wrap it in external synchronization if a
/// single instance must be shared across threads.
#[derive(Debug)]
pub struct Checkout<'a> {
    catalog: &'a Catalog,
    cart: Cart,
}

impl<'a> Checkout<'a> {
    /// Create a new checkout with an empty cart against the given catalog.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Checkout {
            catalog,
            cart: Cart::new(),
        }
    }

    /// Scan one unit of an item code into the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::UnknownItem`] when the code has no unit
    /// price in the catalog; the cart is left unmodified.
    pub fn scan(&mut self, code: &str) -> Result<(), CheckoutError> {
        if !self.catalog.contains(code) {
            return Err(CheckoutError::UnknownItem(code.to_string()));
        }

        self.cart.add(code);

        Ok(())
    }

    /// Calculate the total price of the current cart. An empty cart totals
    /// zero. Pure read; the cart is unchanged.
    #[must_use]
    pub fn total(&self) -> Money<'static, Currency> {
        cart_total(self.catalog, &self.cart)
    }

    /// Calculate the price of `quantity` units of an item code, independent
    /// of the cart contents.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::UnknownItem`] when the code has no unit
    /// price in the catalog.
    pub fn item_price(
        &self,
        code: &str,
        quantity: u32,
    ) -> Result<Money<'static, Currency>, CheckoutError> {
        item_price(self.catalog, code, quantity)
            .ok_or_else(|| CheckoutError::UnknownItem(code.to_string()))
    }

    /// Reset the cart to empty.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Get the current cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Get the catalog this checkout prices against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }
}
