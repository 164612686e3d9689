//! Thrift Haven Core - Shared types library.
//!
//! This crate provides common types used across all Thrift Haven components:
//! - `storefront` - Cart state, persistence, and display logic
//! - `cli` - Command-line shop front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
