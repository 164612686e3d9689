//! Catalog browsing commands.

use thrift_haven_storefront::catalog::Catalog;
use thrift_haven_storefront::config::Config;
use thrift_haven_storefront::error::Result;
use thrift_haven_storefront::views::ProductView;

use crate::output;

/// List every product in the catalog.
pub fn list() -> Result<()> {
    let config = Config::from_env()?;
    let catalog = Catalog::from_config(&config)?;

    output::header("Shop");
    for product in catalog.products() {
        let view = ProductView::from(product);
        output::product_row(&view.id, &view.name, &view.price);
    }
    output::blank();
    output::hint("Add a piece with `thrift-haven cart add <PRODUCT_ID>`.");
    Ok(())
}
