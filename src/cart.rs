//! Cart
//!
//! The accumulator of scanned item codes. Reads of absent codes yield a
//! count of zero; mutation goes through [`Checkout`](crate::checkout::Checkout)
//! so every stored code is known to be priced.

use rustc_hash::FxHashMap;

/// A multiset of scanned items, stored as counts per item code.
#[derive(Clone, Debug, Default)]
pub struct Cart {
    counts: FxHashMap<String, u32>,
}

impl Cart {
    /// Create a new, empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the scanned count for an item code; absent codes count as zero.
    #[must_use]
    pub fn count(&self, code: &str) -> u32 {
        self.counts.get(code).copied().unwrap_or(0)
    }

    /// Record one more unit of an item code.
    ///
    /// Crate-internal: callers go through `Checkout::scan`, which checks the
    /// code against the catalog first.
    pub(crate) fn add(&mut self, code: &str) {
        if let Some(count) = self.counts.get_mut(code) {
            *count += 1;
        } else {
            self.counts.insert(code.to_string(), 1);
        }
    }

    /// Remove everything from the cart.
    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Get the number of distinct item codes in the cart.
    #[must_use]
    pub fn distinct_items(&self) -> usize {
        self.counts.len()
    }

    /// Get the total number of scanned units across all item codes.
    #[must_use]
    pub fn units(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Iterate over `(code, count)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(code, count)| (code.as_str(), *count))
    }
}
