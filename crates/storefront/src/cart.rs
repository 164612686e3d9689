//! Cart state and mutations.
//!
//! The whole cart is persisted as one JSON array under a fixed store key, so
//! every mutation is a read-mutate-write cycle: load the persisted cart,
//! change it, save it back. Each operation returns the saved cart so the
//! caller can refresh whatever it renders from it (the count badge, the cart
//! page). Stored data that fails to parse is treated as absent, never as an
//! error; the cart silently resets to empty.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use thrift_haven_core::ProductId;

use crate::catalog::{Product, max_unit_price};
use crate::error::Result;
use crate::store::CartStore;

/// Store keys used by the cart.
pub mod keys {
    /// Key the serialized cart persists under.
    pub const CART: &str = "thriftHavenCart";
}

/// A single cart line.
///
/// Lines copy the product attributes at add time; later catalog edits do not
/// rewrite carts already holding the item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product this line holds.
    pub id: ProductId,
    /// Product name as it was when added.
    pub name: String,
    /// Unit price, persisted as a plain JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image path, empty when the product has none.
    pub image: String,
    /// Units of this product, always at least one.
    pub quantity: u32,
}

/// Ordered cart contents. Lines keep the position of their first add.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    /// The lines, in first-add order.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines, the number the count badge shows.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
        }
    }
}

// =============================================================================
// Cart Manager
// =============================================================================

/// Cart operations over an injected store.
///
/// The store is the single source of truth; the manager holds no cart state
/// of its own, so any number of managers over the same store observe each
/// other's writes.
pub struct CartManager<S> {
    store: S,
}

impl<S: CartStore> CartManager<S> {
    /// Create a manager persisting through `store`.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted cart.
    ///
    /// A missing key yields an empty cart. So does malformed data: bad JSON,
    /// a wrong shape, zero quantities, prices outside the accepted range, or
    /// duplicate line ids all reset to empty with a warning in the log.
    ///
    /// # Errors
    ///
    /// Only store read failures propagate; unparseable content does not.
    pub fn load(&self) -> Result<Cart> {
        let Some(raw) = self.store.load(keys::CART)? else {
            return Ok(Cart::default());
        };

        match serde_json::from_str::<Vec<CartItem>>(&raw) {
            Ok(items) if is_well_formed(&items) => Ok(Cart { items }),
            Ok(_) => {
                tracing::warn!("discarding stored cart with invalid lines");
                Ok(Cart::default())
            }
            Err(e) => {
                tracing::warn!("discarding unparseable stored cart: {e}");
                Ok(Cart::default())
            }
        }
    }

    /// Persist the whole cart, returning it for follow-up rendering.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the store write fails.
    pub fn save(&self, cart: Cart) -> Result<Cart> {
        let json = serde_json::to_string(&cart.items)?;
        self.store.save(keys::CART, &json)?;
        Ok(cart)
    }

    /// Add one unit of `product` to the cart.
    ///
    /// An existing line for the same product id gains a unit; otherwise a new
    /// line is appended with quantity one. A cart never holds two lines for
    /// one product.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read or written.
    pub fn add_item(&self, product: &Product) -> Result<Cart> {
        let mut cart = self.load()?;
        match cart.items.iter_mut().find(|item| item.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => cart.items.push(CartItem::from(product)),
        }
        self.save(cart)
    }

    /// Adjust the quantity of the line holding `id` by `delta`.
    ///
    /// The quantity never drops below one; removing a line is its own
    /// operation. Adjusting an id the cart does not hold is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read or written.
    pub fn adjust_quantity(&self, id: &ProductId, delta: i32) -> Result<Cart> {
        let mut cart = self.load()?;
        if let Some(line) = cart.items.iter_mut().find(|item| item.id == *id) {
            line.quantity = adjusted(line.quantity, delta);
        }
        self.save(cart)
    }

    /// Remove the line holding `id`, if present.
    ///
    /// Removing an id the cart does not hold is a no-op, so the operation is
    /// idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be read or written.
    pub fn remove_item(&self, id: &ProductId) -> Result<Cart> {
        let mut cart = self.load()?;
        cart.items.retain(|item| item.id != *id);
        self.save(cart)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error when the store cannot be written.
    pub fn clear(&self) -> Result<Cart> {
        self.save(Cart::default())
    }
}

/// New quantity after a signed adjustment, floored at one.
fn adjusted(quantity: u32, delta: i32) -> u32 {
    let next = i64::from(quantity) + i64::from(delta);
    u32::try_from(next.max(1)).unwrap_or(u32::MAX)
}

/// Shape checks applied after parsing stored data. Parsed lines must uphold
/// what the mutations guarantee: positive quantities, prices from zero up to
/// the catalog's unit price cap, one line per product id. The cap matters
/// here because a stored price can be any JSON number; past it, line totals
/// would leave `Decimal` range.
fn is_well_formed(items: &[CartItem]) -> bool {
    let cap = max_unit_price();
    let mut seen = std::collections::HashSet::new();
    items.iter().all(|item| {
        item.quantity >= 1
            && item.price >= Decimal::ZERO
            && item.price <= cap
            && seen.insert(item.id.as_str())
    })
}
