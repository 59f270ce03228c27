//! Vikoshiya Core - Shared types library.
//!
//! This crate provides common types used across the Vikoshiya components:
//! - `storefront` - Catalog, cart, checkout, favorites, and auth logic
//! - `cli` - Command-line front end for driving the storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Money, email, phone/pincode, order ids, and status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
