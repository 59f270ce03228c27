//! Domain model types.
//!
//! These are the persisted shapes. Field names are kept byte-compatible
//! with the documents the browser build writes (`product-title`,
//! `codFee`, `createdAt`, ...), so an existing storage namespace
//! rehydrates cleanly.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::{CartSnapshot, LineItem};
pub use order::{Address, Customer, Order};
pub use product::Product;
pub use user::UserAccount;
