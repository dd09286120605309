//! Product listing proxy with customer-group-aware pricing.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use product_table_core::pricing::{DiscountType, PriceListLookup, apply_pricing};
use product_table_core::{CategoryId, CustomerGroupId, Product};

use crate::bigcommerce::{Pagination, ProductQuery};
use crate::error::Result;
use crate::pricing::fetch_price_list_lookup;
use crate::state::AppState;

/// Largest page size accepted from clients.
const MAX_PAGE_LIMIT: u32 = 250;

/// Query parameters for the product listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Restrict to products in this category.
    pub category: Option<CategoryId>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size (capped at 250).
    pub limit: Option<u32>,
    /// Customer group whose price list applies. Absent means base prices.
    pub customer_group_id: Option<CustomerGroupId>,
    /// Pricing precedence policy.
    pub discount_type: Option<DiscountType>,
}

/// Product listing response body.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    /// Products with calculated prices populated.
    pub data: Vec<Product>,
    /// Response metadata.
    pub meta: ProductsMeta,
}

/// Metadata block of a product listing response.
#[derive(Debug, Serialize)]
pub struct ProductsMeta {
    /// Upstream pagination, when reported.
    pub pagination: Option<Pagination>,
    /// Whether any price-list override was available for this request.
    pub price_list_applied: bool,
    /// Diagnostic from a degraded price-list fetch, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing_diagnostic: Option<String>,
}

/// List products with effective prices for the requesting group.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Result<Json<ProductsResponse>> {
    let catalog_query = ProductQuery {
        category: query.category,
        page: query.page,
        limit: query.limit.map(|l| l.min(MAX_PAGE_LIMIT)),
    };

    let response = priced_products(
        &state,
        catalog_query,
        query.customer_group_id,
        query.discount_type.unwrap_or_default(),
    )
    .await?;

    Ok(Json(response))
}

/// Shared listing flow: fetch a product page, build the group's
/// price-list lookup once, and resolve pricing per product.
pub(super) async fn priced_products(
    state: &AppState,
    catalog_query: ProductQuery,
    customer_group_id: Option<CustomerGroupId>,
    discount_type: DiscountType,
) -> Result<ProductsResponse> {
    let page = state.catalog().get_products(&catalog_query).await?;

    let (lookup, pricing_diagnostic) = match customer_group_id {
        Some(group) => {
            let fetch = fetch_price_list_lookup(state.catalog(), group).await;
            (fetch.lookup, fetch.diagnostic)
        }
        None => (PriceListLookup::new(), None),
    };

    let price_list_applied = !lookup.is_empty();
    let data = page
        .products
        .into_iter()
        .map(|product| apply_pricing(product, &lookup, discount_type))
        .collect();

    Ok(ProductsResponse {
        data,
        meta: ProductsMeta {
            pagination: page.pagination,
            price_list_applied,
            pricing_diagnostic,
        },
    })
}
