//! CLI command implementations.

pub mod cart;
pub mod contact;
pub mod shop;
