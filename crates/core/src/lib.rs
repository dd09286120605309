//! Product Table Core - Shared types and pricing logic.
//!
//! This crate provides the types and the pricing core used across the
//! Product Table components:
//! - `server` - Storefront-facing API service
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP clients. Price-list data is fetched by the
//! server crate and handed to this crate's resolver as a
//! [`pricing::PriceListLookup`].
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs and validated catalog shapes
//! - [`pricing`] - Price-list lookup structures and the pricing resolver

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pricing;
pub mod types;

pub use types::*;
