//! Corrupted persisted state resets to an empty cart instead of failing.
//!
//! Anything with filesystem access can edit, truncate, or replace the
//! persisted cart file. Whatever is found there, the shop keeps working.

#![allow(clippy::unwrap_used)]

use thrift_haven_core::ProductId;
use thrift_haven_integration_tests::TestContext;
use thrift_haven_storefront::catalog::Catalog;
use thrift_haven_storefront::views::CartView;

#[test]
fn test_missing_file_is_empty_cart() {
    let ctx = TestContext::new();
    assert!(ctx.manager().load().unwrap().is_empty());
}

#[test]
fn test_truncated_file_resets_to_empty() {
    let ctx = TestContext::new();
    ctx.write_raw_cart(r#"[{"id":"denim-jacket","na"#);
    assert!(ctx.manager().load().unwrap().is_empty());
}

#[test]
fn test_wrong_shape_resets_to_empty() {
    let ctx = TestContext::new();
    ctx.write_raw_cart(r#"{"items":[]}"#);
    assert!(ctx.manager().load().unwrap().is_empty());
}

#[test]
fn test_tampered_quantity_resets_to_empty() {
    let ctx = TestContext::new();
    ctx.write_raw_cart(r#"[{"id":"x","name":"X","price":1.0,"image":"","quantity":0}]"#);
    assert!(ctx.manager().load().unwrap().is_empty());
}

#[test]
fn test_absurd_price_resets_to_empty() {
    let ctx = TestContext::new();
    // a price this large parses, but the cart refuses to carry it
    ctx.write_raw_cart(r#"[{"id":"x","name":"X","price":5e28,"image":"","quantity":2}]"#);

    let cart = ctx.manager().load().unwrap();
    assert!(cart.is_empty());

    // the cart page still renders
    let view = CartView::render(&cart);
    assert_eq!(view.summary.total, "£0.00");
}

#[test]
fn test_recovery_does_not_rewrite_until_next_save() {
    let ctx = TestContext::new();
    ctx.write_raw_cart("total garbage");

    let _ = ctx.manager().load().unwrap();

    // loading never writes; the bad bytes sit there until a mutation
    assert_eq!(ctx.read_raw_cart(), "total garbage");
}

#[test]
fn test_shopping_continues_after_recovery() {
    let ctx = TestContext::new();
    ctx.write_raw_cart("total garbage");

    let catalog = Catalog::builtin().unwrap();
    let jacket = catalog.get(&ProductId::new("denim-jacket")).unwrap();
    ctx.manager().add_item(jacket).unwrap();

    // the replacement state parses cleanly again
    let cart = ctx.manager().load().unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.item_count(), 1);
}
