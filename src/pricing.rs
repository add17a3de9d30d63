//! Pricing
//!
//! Pure pricing functions over a catalog: the per-item multi-buy calculation
//! and the cart total fold.

use rusty_money::{Money, iso::Currency};

use crate::{cart::Cart, catalog::Catalog};

/// Calculates the price of `quantity` units of an item code, or `None` when
/// the code has no unit price in the catalog.
///
/// With a multi-buy offer of `n` units for `b`, every whole bundle of `n`
/// units costs `b` and leftover units cost the unit price each. Without an
/// offer the price is simply `quantity` times the unit price.
#[must_use]
pub fn item_price(
    catalog: &Catalog,
    code: &str,
    quantity: u32,
) -> Option<Money<'static, Currency>> {
    let unit = catalog.unit_price(code)?;

    let minor = match catalog.offer(code) {
        Some(offer) => {
            let bundles = quantity / offer.quantity();
            let remainder = quantity % offer.quantity();

            i64::from(bundles) * offer.price().to_minor_units()
                + i64::from(remainder) * unit.to_minor_units()
        }
        None => i64::from(quantity) * unit.to_minor_units(),
    };

    Some(Money::from_minor(minor, catalog.currency()))
}

/// Calculates the total price of a cart against a catalog.
///
/// An empty cart totals zero. Iteration order over the cart does not matter;
/// the per-item contributions are summed in minor units.
#[must_use]
pub fn cart_total(catalog: &Catalog, cart: &Cart) -> Money<'static, Currency> {
    // Cart codes are validated against the catalog at scan time, so the
    // filter only ever drops codes a caller injected through a foreign cart.
    let minor: i64 = cart
        .iter()
        .filter_map(|(code, count)| item_price(catalog, code, count))
        .map(|price| price.to_minor_units())
        .sum();

    Money::from_minor(minor, catalog.currency())
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use crate::catalog::MultiBuy;

    use super::*;

    fn test_catalog() -> Result<Catalog, crate::catalog::CatalogError> {
        let prices = [
            ("A".to_string(), Money::from_minor(50, GBP)),
            ("B".to_string(), Money::from_minor(30, GBP)),
            ("C".to_string(), Money::from_minor(20, GBP)),
        ]
        .into_iter()
        .collect();

        let offers = [("A".to_string(), MultiBuy::new(3, Money::from_minor(130, GBP)))]
            .into_iter()
            .collect();

        Catalog::with_tables(prices, offers, GBP)
    }

    #[test]
    fn item_price_without_offer_is_linear() -> TestResult {
        let catalog = test_catalog()?;

        for quantity in 0..6 {
            assert_eq!(
                item_price(&catalog, "B", quantity),
                Some(Money::from_minor(i64::from(quantity) * 30, GBP))
            );
        }

        Ok(())
    }

    #[test]
    fn item_price_applies_whole_bundles_with_leftovers() -> TestResult {
        let catalog = test_catalog()?;

        let expected = [0, 50, 100, 130, 180, 230, 260, 310];

        for (quantity, minor) in expected.into_iter().enumerate() {
            let quantity = u32::try_from(quantity)?;

            assert_eq!(
                item_price(&catalog, "A", quantity),
                Some(Money::from_minor(minor, GBP))
            );
        }

        Ok(())
    }

    #[test]
    fn item_price_unknown_code_is_none() -> TestResult {
        let catalog = test_catalog()?;

        assert_eq!(item_price(&catalog, "Z", 3), None);

        Ok(())
    }

    #[test]
    fn cart_total_of_empty_cart_is_zero() -> TestResult {
        let catalog = test_catalog()?;
        let cart = Cart::new();

        assert_eq!(cart_total(&catalog, &cart), Money::from_minor(0, GBP));

        Ok(())
    }

    #[test]
    fn cart_total_sums_per_item_contributions() -> TestResult {
        let catalog = test_catalog()?;

        let mut cart = Cart::new();
        for code in ["A", "A", "A", "A", "B", "C"] {
            cart.add(code);
        }

        // 3-for-130 bundle + one A at 50 + B at 30 + C at 20
        assert_eq!(cart_total(&catalog, &cart), Money::from_minor(230, GBP));

        Ok(())
    }

    #[test]
    fn cart_total_skips_unpriced_codes() -> TestResult {
        let catalog = test_catalog()?;

        let mut cart = Cart::new();
        cart.add("A");
        cart.add("Z");

        assert_eq!(cart_total(&catalog, &cart), Money::from_minor(50, GBP));

        Ok(())
    }
}
