//! Cart commands.
//!
//! Each command reads the persisted cart, applies at most one mutation
//! through the cart manager, and prints the refreshed state. Cart state
//! lives under the configured data directory as one JSON file per store key.

use thrift_haven_core::ProductId;
use thrift_haven_storefront::cart::CartManager;
use thrift_haven_storefront::catalog::Catalog;
use thrift_haven_storefront::config::Config;
use thrift_haven_storefront::error::{Result, StorefrontError};
use thrift_haven_storefront::store::FileStore;
use thrift_haven_storefront::views::{CartView, EMPTY_CART_MESSAGE};

use crate::output;

/// Copy shown once an order has been placed.
const ORDER_CONFIRMATION: &str =
    "Thank you for your order! We’ll email your confirmation shortly.";

/// Show the cart page: every line, then the order summary.
pub fn show() -> Result<()> {
    let manager = cart_manager()?;
    let view = CartView::render(&manager.load()?);

    output::header("Your Cart");
    if view.items.is_empty() {
        output::line(EMPTY_CART_MESSAGE);
        output::hint("Browse with `thrift-haven shop`.");
    } else {
        for item in &view.items {
            output::cart_row(item.quantity, &item.name, &item.line_price, &item.id);
        }
    }
    output::blank();
    output::kv("Subtotal", &view.summary.subtotal);
    output::kv("Estimated shipping", &view.summary.shipping);
    output::kv("Total", &view.summary.total);
    Ok(())
}

/// Add one unit of a catalog product to the cart.
pub fn add(product_id: &str) -> Result<()> {
    let config = Config::from_env()?;
    let catalog = Catalog::from_config(&config)?;
    let manager = CartManager::new(FileStore::new(&config.data_dir));

    let id = ProductId::new(product_id);
    let product = catalog
        .get(&id)
        .ok_or(StorefrontError::UnknownProduct(id))?;
    let cart = manager.add_item(product)?;

    output::success(&format!("Added {} to your cart.", product.name));
    output::kv("In cart", &cart.item_count().to_string());
    Ok(())
}

/// Nudge a cart line's quantity by `delta`.
pub fn adjust(product_id: &str, delta: i32) -> Result<()> {
    let manager = cart_manager()?;
    let id = ProductId::new(product_id);
    let cart = manager.adjust_quantity(&id, delta)?;

    match cart.items.iter().find(|item| item.id == id) {
        Some(line) => {
            output::success(&format!("{} × {}", line.name, line.quantity));
            output::kv("In cart", &cart.item_count().to_string());
        }
        None => output::hint(&format!("{product_id} is not in your cart.")),
    }
    Ok(())
}

/// Remove a cart line entirely.
pub fn remove(product_id: &str) -> Result<()> {
    let manager = cart_manager()?;
    let id = ProductId::new(product_id);

    let cart = manager.load()?;
    let Some(line) = cart.items.iter().find(|item| item.id == id) else {
        output::hint(&format!("{product_id} is not in your cart."));
        return Ok(());
    };
    let name = line.name.clone();

    let cart = manager.remove_item(&id)?;
    output::success(&format!("Removed {name} from your cart."));
    output::kv("In cart", &cart.item_count().to_string());
    Ok(())
}

/// Print the cart count badge number, bare, for scripting.
pub fn count() -> Result<()> {
    let cart = cart_manager()?.load()?;
    output::value(&cart.item_count().to_string());
    Ok(())
}

/// Place the order: confirm, then start the next cart empty.
pub fn buy() -> Result<()> {
    let manager = cart_manager()?;
    let cart = manager.load()?;

    if cart.is_empty() {
        output::line(EMPTY_CART_MESSAGE);
        output::hint("Browse with `thrift-haven shop`.");
        return Ok(());
    }

    let view = CartView::render(&cart);
    let cleared = manager.clear()?;
    tracing::info!(items = view.item_count, total = %view.summary.total, "order placed");

    output::success(ORDER_CONFIRMATION);
    output::kv("Order total", &view.summary.total);
    output::kv("In cart", &cleared.item_count().to_string());
    Ok(())
}

/// Empty the cart.
pub fn clear() -> Result<()> {
    cart_manager()?.clear()?;
    output::success("Cart cleared.");
    Ok(())
}

/// Build the cart manager over the configured data directory.
fn cart_manager() -> Result<CartManager<FileStore>> {
    let config = Config::from_env()?;
    Ok(CartManager::new(FileStore::new(&config.data_dir)))
}
