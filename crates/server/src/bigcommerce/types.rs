//! Wire types for the BigCommerce API.
//!
//! Raw payload shapes live here; [`super::conversions`] turns them into
//! the validated `product-table-core` types the rest of the service
//! works with.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use product_table_core::{CategoryId, CustomerGroupId, PriceListId, ProductId, VariantId};
use product_table_core::pricing::PriceListRecord;

// =============================================================================
// Envelope Normalization
// =============================================================================

/// Pagination metadata from a V3 `meta.pagination` block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pagination {
    /// 1-based page number of this response.
    pub current_page: u32,
    /// Total number of pages available upstream.
    pub total_pages: u32,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub(super) struct Meta {
    pub pagination: Option<Pagination>,
}

/// V3 response envelope.
#[derive(Debug, Deserialize)]
pub(super) struct Envelope<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// A list response that may arrive enveloped or as a bare array.
///
/// Some BigCommerce list endpoints (and older API versions) return the
/// array directly. All response-shape branching happens in
/// [`Documents::into_parts`]; callers only ever see a canonical list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum Documents<T> {
    Enveloped(Envelope<T>),
    Bare(Vec<T>),
}

impl<T> Documents<T> {
    /// Normalize into the item list and pagination metadata (if any).
    pub fn into_parts(self) -> (Vec<T>, Option<Pagination>) {
        match self {
            Self::Enveloped(envelope) => {
                let pagination = envelope.meta.and_then(|m| m.pagination);
                (envelope.data, pagination)
            }
            Self::Bare(items) => (items, None),
        }
    }
}

// =============================================================================
// Pricelists
// =============================================================================

/// Binding between a customer group and a price list.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceListAssignment {
    /// The assigned price list.
    pub price_list_id: PriceListId,
    /// The customer group the list is assigned to.
    pub customer_group_id: Option<CustomerGroupId>,
}

/// One page of price-list records.
#[derive(Debug)]
pub struct RecordPage {
    /// Records on this page.
    pub records: Vec<PriceListRecord>,
    /// Pagination metadata; absent means single page.
    pub pagination: Option<Pagination>,
}

// =============================================================================
// Catalog
// =============================================================================

/// Raw product payload from `/v3/catalog/products`.
#[derive(Debug, Deserialize)]
pub(super) struct RawProduct {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    #[serde(default)]
    pub categories: Vec<CategoryId>,
    #[serde(default)]
    pub custom_url: Option<RawCustomUrl>,
    #[serde(default)]
    pub images: Vec<RawImage>,
    #[serde(default)]
    pub variants: Vec<RawVariant>,
}

/// Raw variant payload nested under a product.
#[derive(Debug, Deserialize)]
pub(super) struct RawVariant {
    pub id: VariantId,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    #[serde(default)]
    pub purchasing_disabled: bool,
    #[serde(default)]
    pub option_values: Vec<RawOptionValue>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawOptionValue {
    pub option_display_name: String,
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawCustomUrl {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawImage {
    #[serde(default)]
    pub is_thumbnail: bool,
    pub url_thumbnail: Option<String>,
}

/// Raw category payload from `/v3/catalog/categories`.
#[derive(Debug, Deserialize)]
pub(super) struct RawCategory {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub custom_url: Option<RawCustomUrl>,
}

/// A storefront category with its URL path.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Storefront URL path (e.g. `/shoes/`).
    pub url: Option<String>,
}

/// One page of catalog products, already converted to core types.
#[derive(Debug)]
pub struct ProductPage {
    /// Products on this page.
    pub products: Vec<product_table_core::Product>,
    /// Pagination metadata; absent means single page.
    pub pagination: Option<Pagination>,
}

/// Query parameters for the product listing endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductQuery {
    /// Restrict to products in this category.
    pub category: Option<CategoryId>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
}

// =============================================================================
// Store
// =============================================================================

/// Store details from `/v2/store`, used by the connection diagnostic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreInformation {
    /// Store display name.
    pub name: String,
    /// Permanent store domain.
    pub domain: String,
    /// Store status reported by BigCommerce (e.g. "live").
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_enveloped_shape() {
        let json = r#"{
            "data": [{"price_list_id": 3, "customer_group_id": 2}],
            "meta": {"pagination": {"current_page": 1, "total_pages": 4}}
        }"#;
        let docs: Documents<PriceListAssignment> = serde_json::from_str(json).unwrap();
        let (items, pagination) = docs.into_parts();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price_list_id, PriceListId::new(3));
        assert_eq!(pagination.unwrap().total_pages, 4);
    }

    #[test]
    fn test_documents_bare_array_shape() {
        let json = r#"[{"price_list_id": 3, "customer_group_id": null}]"#;
        let docs: Documents<PriceListAssignment> = serde_json::from_str(json).unwrap();
        let (items, pagination) = docs.into_parts();

        assert_eq!(items.len(), 1);
        assert!(pagination.is_none());
    }

    #[test]
    fn test_documents_envelope_without_meta() {
        let json = r#"{"data": []}"#;
        let docs: Documents<PriceListAssignment> = serde_json::from_str(json).unwrap();
        let (items, pagination) = docs.into_parts();

        assert!(items.is_empty());
        assert!(pagination.is_none());
    }

    #[test]
    fn test_raw_product_deserializes_catalog_payload() {
        let json = r#"{
            "id": 1,
            "name": "Trail Shoe",
            "sku": "TS-1",
            "price": 89.5,
            "sale_price": 0,
            "categories": [23, 24],
            "custom_url": {"url": "/trail-shoe/"},
            "images": [{"is_thumbnail": true, "url_thumbnail": "https://cdn.example/1.jpg"}],
            "variants": [{
                "id": 101,
                "sku": "TS-1-S",
                "price": null,
                "sale_price": null,
                "purchasing_disabled": false,
                "option_values": [{"option_display_name": "Size", "label": "Small"}]
            }]
        }"#;
        let raw: RawProduct = serde_json::from_str(json).unwrap();

        assert_eq!(raw.id, ProductId::new(1));
        assert_eq!(raw.sale_price, Some(Decimal::ZERO));
        assert_eq!(raw.variants.len(), 1);
        assert_eq!(raw.variants[0].option_values[0].label, "Small");
    }
}
