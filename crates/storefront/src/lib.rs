//! Vikoshiya Storefront library.
//!
//! Client-side storefront logic with no real backend: a product catalog,
//! a cart with derived pricing, a checkout pipeline that appends to an
//! order log, a favorites list gated by a mock auth registry, and a
//! key-value storage layer standing in for browser local storage.
//!
//! # Architecture
//!
//! Every stateful component owns its in-memory state and persists through
//! an injected [`storage::KeyValueStore`], so tests can substitute an
//! in-memory store. Pricing is a pure function over cart contents. The
//! checkout pipeline is the only asynchronous boundary; its simulated
//! processing delay is real `tokio` time and can be driven by paused-time
//! tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod favorites;
pub mod models;
pub mod pricing;
pub mod services;
pub mod storage;
