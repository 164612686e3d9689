//! Integration tests for Thrift Haven.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p thrift-haven-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_lifecycle` - Shop-to-order flows over a real data directory
//! - `cart_recovery` - Corrupted persisted state resets instead of failing
//! - `catalog_file` - Catalog loading from TOML files
//!
//! Every test gets its own temporary data directory, so tests run in
//! parallel without touching each other or a real `.thrift-haven`.

use std::path::PathBuf;

use tempfile::TempDir;

use thrift_haven_storefront::cart::{CartManager, keys};
use thrift_haven_storefront::store::FileStore;

/// A storefront wired to a throwaway data directory.
pub struct TestContext {
    data_dir: TempDir,
}

impl TestContext {
    /// Create a context with a fresh, empty data directory.
    ///
    /// # Panics
    ///
    /// Panics when the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data_dir: TempDir::new().expect("create temp data dir"),
        }
    }

    /// A cart manager persisting into this context's data directory.
    ///
    /// Each call builds a fresh manager over the same directory, which is how
    /// separate CLI invocations see each other's state.
    #[must_use]
    pub fn manager(&self) -> CartManager<FileStore> {
        CartManager::new(FileStore::new(self.data_dir.path()))
    }

    /// Path of the file the cart persists to.
    #[must_use]
    pub fn cart_file(&self) -> PathBuf {
        self.data_dir.path().join(format!("{}.json", keys::CART))
    }

    /// Read the raw persisted cart file.
    ///
    /// # Panics
    ///
    /// Panics when the file does not exist or cannot be read.
    #[must_use]
    pub fn read_raw_cart(&self) -> String {
        std::fs::read_to_string(self.cart_file()).expect("read raw cart file")
    }

    /// Overwrite the persisted cart file with raw bytes, bypassing the
    /// manager. This is how tests simulate external tampering.
    ///
    /// # Panics
    ///
    /// Panics when the file cannot be written.
    pub fn write_raw_cart(&self, contents: &str) {
        std::fs::write(self.cart_file(), contents).expect("write raw cart file");
    }

    /// Write a catalog TOML file into the data directory, returning its path.
    ///
    /// # Panics
    ///
    /// Panics when the file cannot be written.
    pub fn write_catalog(&self, contents: &str) -> PathBuf {
        let path = self.data_dir.path().join("catalog.toml");
        std::fs::write(&path, contents).expect("write catalog file");
        path
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
