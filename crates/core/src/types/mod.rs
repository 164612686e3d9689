//! Core types for Thrift Haven.
//!
//! Newtype wrappers for the domain concepts the rest of the workspace
//! passes around: product IDs, prices, and email addresses.

pub mod email;
pub mod id;
pub mod price;

pub use email::{Email, EmailError};
pub use id::*;
pub use price::{CurrencyCode, Price};
