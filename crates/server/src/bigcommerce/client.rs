//! BigCommerce REST client implementation.
//!
//! One `reqwest` client with the store's `X-Auth-Token` default header.
//! Every response is read as text first so parse failures can log a
//! truncated body for diagnostics.

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use product_table_core::pricing::PriceListRecord;
use product_table_core::{CustomerGroupId, PriceListId, Product, ProductId};

use crate::config::BigCommerceConfig;

use super::BigCommerceError;
use super::conversions::{convert_category, convert_product};
use super::types::{
    Category, Documents, Pagination, PriceListAssignment, ProductPage, ProductQuery, RawCategory,
    RawProduct, RecordPage, StoreInformation,
};

/// V3 single-resource envelope (`data` is an object, not an array).
#[derive(Debug, Deserialize)]
struct Single<T> {
    data: T,
}

/// Client for the BigCommerce Catalog and Pricelists APIs.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    /// `{api_base}/stores/{store_hash}` - endpoint paths append to this.
    base: String,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build or the access
    /// token is not a valid header value.
    pub fn new(config: &BigCommerceConfig) -> Result<Self, BigCommerceError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Auth-Token",
            HeaderValue::from_str(config.access_token.expose_secret())
                .map_err(|e| BigCommerceError::Parse(format!("invalid access token: {e}")))?,
        );
        headers.insert("Accept", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;
        let base = format!(
            "{}/stores/{}",
            config.api_base.trim_end_matches('/'),
            config.store_hash
        );

        Ok(Self {
            inner: Arc::new(CatalogClientInner { client, base }),
        })
    }

    /// Issue a GET and deserialize the response body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BigCommerceError> {
        let url = format!("{}{path}", self.inner.base);
        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let headers = response.headers();
            let retry_after = headers
                .get("X-Rate-Limit-Time-Reset-Ms")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .map(|ms| ms.div_ceil(1000))
                .or_else(|| {
                    headers
                        .get("Retry-After")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                })
                .unwrap_or(30);
            return Err(BigCommerceError::RateLimited(retry_after));
        }

        if status == StatusCode::NOT_FOUND {
            return Err(BigCommerceError::NotFound(path.to_string()));
        }

        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                path = %path,
                body = %body.chars().take(500).collect::<String>(),
                "BigCommerce API returned non-success status"
            );
            return Err(BigCommerceError::Api {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                path = %path,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse BigCommerce response"
            );
            BigCommerceError::Parse(e.to_string())
        })
    }

    // =========================================================================
    // Catalog Methods
    // =========================================================================

    /// Get a page of catalog products with their variants.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_products(&self, query: &ProductQuery) -> Result<ProductPage, BigCommerceError> {
        let mut path = format!(
            "/v3/catalog/products?include=variants&page={}&limit={}",
            query.page.unwrap_or(1),
            query.limit.unwrap_or(50),
        );
        if let Some(category) = query.category {
            path.push_str(&format!("&categories:in={category}"));
        }

        let documents: Documents<RawProduct> = self.get_json(&path).await?;
        let (raw, pagination) = documents.into_parts();

        Ok(ProductPage {
            products: raw.into_iter().map(convert_product).collect(),
            pagination,
        })
    }

    /// Get a single product by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the product does not exist, or another
    /// error if the API request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn get_product(&self, product_id: ProductId) -> Result<Product, BigCommerceError> {
        let path = format!("/v3/catalog/products/{product_id}?include=variants");
        let single: Single<RawProduct> = self.get_json(&path).await?;
        Ok(convert_product(single.data))
    }

    /// Get a page of catalog categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn get_categories(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<(Vec<Category>, Option<Pagination>), BigCommerceError> {
        let path = format!("/v3/catalog/categories?page={page}&limit={limit}");
        let documents: Documents<RawCategory> = self.get_json(&path).await?;
        let (raw, pagination) = documents.into_parts();
        Ok((raw.into_iter().map(convert_category).collect(), pagination))
    }

    // =========================================================================
    // Pricelist Methods
    // =========================================================================

    /// Get the price-list assignments for a customer group.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails. An empty list is a
    /// valid business state (no price list assigned), not an error.
    #[instrument(skip(self), fields(customer_group_id = %customer_group_id))]
    pub async fn price_list_assignments(
        &self,
        customer_group_id: CustomerGroupId,
    ) -> Result<Vec<PriceListAssignment>, BigCommerceError> {
        let path = format!("/v3/pricelists/assignments?customer_group_id:in={customer_group_id}");
        let documents: Documents<PriceListAssignment> = self.get_json(&path).await?;
        Ok(documents.into_parts().0)
    }

    /// Get one page of records for a price list.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(price_list_id = %price_list_id, page = page))]
    pub async fn price_list_records(
        &self,
        price_list_id: PriceListId,
        page: u32,
        limit: u32,
    ) -> Result<RecordPage, BigCommerceError> {
        let path = format!("/v3/pricelists/{price_list_id}/records?page={page}&limit={limit}");
        let documents: Documents<PriceListRecord> = self.get_json(&path).await?;
        let (records, pagination) = documents.into_parts();
        Ok(RecordPage {
            records,
            pagination,
        })
    }

    // =========================================================================
    // Store Methods
    // =========================================================================

    /// Get basic store details (V2 endpoint, bare object response).
    ///
    /// Used by the connection-status diagnostic route.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self))]
    pub async fn store_information(&self) -> Result<StoreInformation, BigCommerceError> {
        self.get_json("/v2/store").await
    }
}
