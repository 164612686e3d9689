//! Thrift Haven storefront library.
//!
//! Everything the shop front end needs: the product catalog, cart state with
//! its persistence, order summary math, display projections, and the contact
//! form handler. Front ends stay thin; they bind user actions to the
//! [`cart::CartManager`] and print what [`views`] gives back.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod store;
pub mod summary;
pub mod views;
