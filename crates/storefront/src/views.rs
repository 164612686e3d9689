//! Display-ready projections of the catalog and cart.
//!
//! Everything a front end prints comes out of here pre-formatted: prices as
//! two-decimal pound strings, shipping already folded to "Free" when nothing
//! ships, the count badge number. Front ends should not need to touch a
//! `Decimal`.

use rust_decimal::Decimal;

use thrift_haven_core::{CurrencyCode, Price};

use crate::cart::{Cart, CartItem};
use crate::catalog::Product;
use crate::summary::{Summary, summarize};

/// Message shown in place of the line items when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty. Head to the shop to add some pieces.";

/// Shipping label when nothing is being shipped.
const FREE_SHIPPING_LABEL: &str = "Free";

/// The shop trades in pounds only.
const STORE_CURRENCY: CurrencyCode = CurrencyCode::GBP;

/// Format an amount in the store currency.
fn format_price(amount: Decimal) -> String {
    Price::new(amount, STORE_CURRENCY).display()
}

/// Cart line display data.
#[derive(Debug, Clone)]
pub struct CartItemView {
    /// Product id, for quantity and remove controls.
    pub id: String,
    /// Product name.
    pub name: String,
    /// Units on this line.
    pub quantity: u32,
    /// Formatted unit price.
    pub price: String,
    /// Formatted price times quantity.
    pub line_price: String,
    /// Image path, when the product has one.
    pub image: Option<String>,
}

/// Order summary display data.
#[derive(Debug, Clone)]
pub struct SummaryView {
    /// Formatted subtotal.
    pub subtotal: String,
    /// Formatted shipping fee, or "Free" when nothing ships.
    pub shipping: String,
    /// Formatted total.
    pub total: String,
}

/// Cart page display data.
#[derive(Debug, Clone)]
pub struct CartView {
    /// One entry per cart line, in cart order.
    pub items: Vec<CartItemView>,
    /// The totals block.
    pub summary: SummaryView,
    /// Number for the cart count badge.
    pub item_count: u32,
}

impl CartView {
    /// Build the cart page data for the given cart.
    #[must_use]
    pub fn render(cart: &Cart) -> Self {
        Self {
            items: cart.items.iter().map(CartItemView::from).collect(),
            summary: SummaryView::from(summarize(cart)),
            item_count: cart.item_count(),
        }
    }

    /// The cart page for an empty cart.
    #[must_use]
    pub fn empty() -> Self {
        Self::render(&Cart::default())
    }
}

/// Shop listing display data.
#[derive(Debug, Clone)]
pub struct ProductView {
    /// Product id, what `cart add` takes.
    pub id: String,
    /// Product name.
    pub name: String,
    /// Formatted unit price.
    pub price: String,
    /// Image path, when the product has one.
    pub image: Option<String>,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            quantity: item.quantity,
            price: format_price(item.price),
            line_price: format_price(item.price * Decimal::from(item.quantity)),
            image: if item.image.is_empty() {
                None
            } else {
                Some(item.image.clone())
            },
        }
    }
}

impl From<Summary> for SummaryView {
    fn from(summary: Summary) -> Self {
        Self {
            subtotal: format_price(summary.subtotal),
            shipping: if summary.shipping.is_zero() {
                FREE_SHIPPING_LABEL.to_owned()
            } else {
                format_price(summary.shipping)
            },
            total: format_price(summary.total),
        }
    }
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: format_price(product.price),
            image: if product.image.is_empty() {
                None
            } else {
                Some(product.image.clone())
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use thrift_haven_core::ProductId;

    fn line(id: &str, pence: i64, quantity: u32, image: &str) -> CartItem {
        CartItem {
            id: ProductId::new(id),
            name: id.to_owned(),
            price: Decimal::new(pence, 2),
            image: image.to_owned(),
            quantity,
        }
    }

    #[test]
    fn test_empty_cart_view() {
        let view = CartView::empty();
        assert!(view.items.is_empty());
        assert_eq!(view.item_count, 0);
        assert_eq!(view.summary.subtotal, "£0.00");
        assert_eq!(view.summary.shipping, "Free");
        assert_eq!(view.summary.total, "£0.00");
    }

    #[test]
    fn test_rendered_cart_formats_lines_and_totals() {
        let cart = Cart {
            items: vec![
                line("denim-jacket", 2450, 1, "images/denim-jacket.jpg"),
                line("wool-scarf", 975, 2, ""),
            ],
        };
        let view = CartView::render(&cart);

        assert_eq!(view.item_count, 3);

        let jacket = view.items.first().unwrap();
        assert_eq!(jacket.price, "£24.50");
        assert_eq!(jacket.line_price, "£24.50");
        assert_eq!(jacket.image.as_deref(), Some("images/denim-jacket.jpg"));

        let scarf = view.items.get(1).unwrap();
        assert_eq!(scarf.price, "£9.75");
        assert_eq!(scarf.line_price, "£19.50");
        assert!(scarf.image.is_none());

        // 24.50 + 19.50 = 44.00, plus the 4.50 fee
        assert_eq!(view.summary.subtotal, "£44.00");
        assert_eq!(view.summary.shipping, "£4.50");
        assert_eq!(view.summary.total, "£48.50");
    }

    #[test]
    fn test_product_view_formats_price() {
        let product = Product {
            id: ProductId::new("brass-lamp"),
            name: "Brass Desk Lamp".to_owned(),
            price: Decimal::new(1800, 2),
            image: String::new(),
        };
        let view = ProductView::from(&product);

        assert_eq!(view.id, "brass-lamp");
        assert_eq!(view.price, "£18.00");
        assert!(view.image.is_none());
    }
}
