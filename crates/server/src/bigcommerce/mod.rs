//! BigCommerce Catalog and Pricelists API client.
//!
//! # Architecture
//!
//! - Plain REST over `reqwest` with the store's `X-Auth-Token` header
//! - BigCommerce is source of truth - every request hits the API, no
//!   local sync and no response caching
//! - V3 endpoints wrap payloads in a `{ data, meta }` envelope; V2
//!   endpoints return bare objects. [`types::Documents`] normalizes
//!   the two shapes at the deserialization boundary.
//!
//! # Example
//!
//! ```rust,ignore
//! use product_table_server::bigcommerce::CatalogClient;
//!
//! let catalog = CatalogClient::new(&config.bigcommerce)?;
//!
//! let page = catalog.get_products(&ProductQuery::default()).await?;
//! let assignments = catalog.price_list_assignments(group_id).await?;
//! ```

mod client;
mod conversions;
pub mod types;

pub use client::CatalogClient;
pub use types::{
    Category, Pagination, PriceListAssignment, ProductPage, ProductQuery, RecordPage,
    StoreInformation,
};

use thiserror::Error;

/// Errors that can occur when talking to the BigCommerce API.
#[derive(Debug, Error)]
pub enum BigCommerceError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        message: String,
    },

    /// Response body could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limited by BigCommerce.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BigCommerceError::NotFound("category path /shoes/".to_string());
        assert_eq!(err.to_string(), "Not found: category path /shoes/");

        let err = BigCommerceError::RateLimited(30);
        assert_eq!(err.to_string(), "Rate limited, retry after 30 seconds");

        let err = BigCommerceError::Api {
            status: 503,
            message: "upstream down".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 503 - upstream down");
    }
}
