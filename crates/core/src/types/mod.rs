//! Shared domain types.
//!
//! All types are plain data with serde support. Validation happens at
//! the I/O boundary (the server's BigCommerce conversion layer), so
//! everything in here can assume it holds already-normalized values.

mod catalog;
mod id;

pub use catalog::{Product, ProductVariant, VariantOptionValue};
pub use id::{CategoryId, CustomerGroupId, PriceListId, ProductId, VariantId};
