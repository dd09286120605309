//! Product Table server library.
//!
//! Exposes the service as a library so integration tests can drive the
//! BigCommerce client and pricing pipeline directly.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod bigcommerce;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod pricing;
pub mod routes;
pub mod state;
