//! Product catalog backing the shop listing.
//!
//! Products carry the attributes the cart copies on add: id, name, price, and
//! an optional image path. A default catalog ships embedded in the crate;
//! deployments can point [`Config::catalog_path`](crate::config::Config) at a
//! TOML file of the same shape instead.

use std::io;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use thrift_haven_core::ProductId;

use crate::config::Config;

/// The catalog bundled with the crate.
const DEFAULT_CATALOG: &str = include_str!("../catalog.toml");

/// Highest unit price the shop deals in, in pounds.
///
/// Catalog entries and stored cart lines above this bound are rejected as
/// invalid; within it, line totals and cart subtotals always fit `Decimal`.
#[must_use]
pub fn max_unit_price() -> Decimal {
    Decimal::from(1_000_000)
}

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The catalog is not valid TOML of the expected shape.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
    /// A product entry fails validation.
    #[error("invalid product {id}: {reason}")]
    InvalidProduct {
        /// Id of the offending entry.
        id: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// A purchasable product.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    /// Stable identifier the cart keys lines by.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in the store currency.
    pub price: Decimal,
    /// Image path, empty when the product has no photo yet.
    #[serde(default)]
    pub image: String,
}

/// The read-only product listing.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load the catalog named by the configuration, falling back to the
    /// built-in listing when no override is set.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the override file cannot be read or
    /// either source fails to parse or validate.
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        match &config.catalog_path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// The catalog bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the embedded listing fails to parse or
    /// validate, which would mean the crate shipped broken data.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::parse(DEFAULT_CATALOG)
    }

    /// Load a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the file cannot be read, parsed, or
    /// validated.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&raw)
    }

    fn parse(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self = toml::from_str(raw)?;
        catalog.validate()?;
        tracing::debug!(products = catalog.products.len(), "catalog loaded");
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for product in &self.products {
            if product.name.trim().is_empty() {
                return Err(CatalogError::InvalidProduct {
                    id: product.id.to_string(),
                    reason: "name must not be blank".to_owned(),
                });
            }
            if product.price < Decimal::ZERO {
                return Err(CatalogError::InvalidProduct {
                    id: product.id.to_string(),
                    reason: "price must not be negative".to_owned(),
                });
            }
            if product.price > max_unit_price() {
                return Err(CatalogError::InvalidProduct {
                    id: product.id.to_string(),
                    reason: format!("price must not exceed {}", max_unit_price()),
                });
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::InvalidProduct {
                    id: product.id.to_string(),
                    reason: "duplicate id".to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == *id)
    }

    /// All products, in listing order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
