//! Unified error handling for the storefront.
//!
//! Provides a unified `StorefrontError` type covering every fallible
//! operation in this crate. Front ends should return `Result<T>` and
//! map the error to their own reporting at the edge.

use thiserror::Error;
use thrift_haven_core::ProductId;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::contact::ContactError;
use crate::store::StoreError;

/// Everything that can go wrong inside the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Cart persistence failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Cart state could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Contact form submission failed.
    #[error("Contact error: {0}")]
    Contact(#[from] ContactError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// No product in the catalog has this id.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_error_display() {
        let err = StorefrontError::UnknownProduct(ProductId::new("velvet-chair"));
        assert_eq!(err.to_string(), "Unknown product: velvet-chair");

        let err = StorefrontError::Contact(ContactError::MissingName);
        assert_eq!(err.to_string(), "Contact error: name is required");
    }
}
