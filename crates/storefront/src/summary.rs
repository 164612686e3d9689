//! Order summary math.
//!
//! Pure functions over cart contents; nothing here touches the store.

use rust_decimal::Decimal;

use crate::cart::Cart;

/// Flat shipping fee applied to any non-empty cart, in pounds.
#[must_use]
pub fn flat_shipping_fee() -> Decimal {
    Decimal::new(450, 2)
}

/// Computed cart totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Sum of unit price times quantity across all lines.
    pub subtotal: Decimal,
    /// The flat fee, or zero for an empty cart.
    pub shipping: Decimal,
    /// Subtotal plus shipping.
    pub total: Decimal,
}

/// Totals for the given cart contents.
///
/// Unit prices are capped at
/// [`max_unit_price`](crate::catalog::max_unit_price) by both the catalog
/// and the persisted-cart checks, so the sums here stay inside `Decimal`
/// range for any cart the manager hands out.
#[must_use]
pub fn summarize(cart: &Cart) -> Summary {
    let subtotal: Decimal = cart
        .items
        .iter()
        .map(|item| item.price * Decimal::from(item.quantity))
        .sum();
    let shipping = if cart.is_empty() {
        Decimal::ZERO
    } else {
        flat_shipping_fee()
    };

    Summary {
        subtotal,
        shipping,
        total: subtotal + shipping,
    }
}
