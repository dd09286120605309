//! Widget configuration CRUD and the widget product feed.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use product_table_core::CustomerGroupId;
use product_table_core::pricing::DiscountType;

use crate::bigcommerce::ProductQuery;
use crate::db::WidgetRepository;
use crate::error::{AppError, Result};
use crate::models::{ProductTableWidget, WidgetSettings};
use crate::state::AppState;

use super::products::{ProductsResponse, priced_products};

/// Request body for creating or updating a widget.
#[derive(Debug, Deserialize)]
pub struct WidgetPayload {
    /// Admin-facing name.
    pub name: String,
    /// Table settings.
    #[serde(default)]
    pub settings: WidgetSettings,
}

/// List all widget configurations.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ProductTableWidget>>> {
    let widgets = WidgetRepository::new(state.pool()).list().await?;
    Ok(Json(widgets))
}

/// Get one widget configuration.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductTableWidget>> {
    let widget = WidgetRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("widget {id}")))?;
    Ok(Json(widget))
}

/// Create a widget configuration.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<WidgetPayload>,
) -> Result<(StatusCode, Json<ProductTableWidget>)> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("widget name must not be empty".to_string()));
    }

    let widget = WidgetRepository::new(state.pool())
        .create(payload.name.trim(), &payload.settings)
        .await?;
    Ok((StatusCode::CREATED, Json(widget)))
}

/// Update a widget configuration.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<WidgetPayload>,
) -> Result<Json<ProductTableWidget>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("widget name must not be empty".to_string()));
    }

    let widget = WidgetRepository::new(state.pool())
        .update(id, payload.name.trim(), &payload.settings)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("widget {id}")))?;
    Ok(Json(widget))
}

/// Delete a widget configuration.
pub async fn destroy(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode> {
    let removed = WidgetRepository::new(state.pool()).delete(id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("widget {id}")))
    }
}

/// Query parameters for the widget product feed.
#[derive(Debug, Default, Deserialize)]
pub struct WidgetProductsQuery {
    /// 1-based page number.
    pub page: Option<u32>,
    /// Customer group whose price list applies.
    pub customer_group_id: Option<CustomerGroupId>,
    /// Overrides the widget's configured discount type.
    pub discount_type: Option<DiscountType>,
}

/// The storefront widget's product feed: the configured categories'
/// products, priced for the requesting customer group.
pub async fn products(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<WidgetProductsQuery>,
) -> Result<Json<ProductsResponse>> {
    let widget = WidgetRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("widget {id}")))?;

    let catalog_query = ProductQuery {
        category: widget.settings.category_ids.first().copied(),
        page: query.page,
        limit: None,
    };
    let discount_type = query
        .discount_type
        .unwrap_or(widget.settings.discount_type);

    let response = priced_products(
        &state,
        catalog_query,
        query.customer_group_id,
        discount_type,
    )
    .await?;

    Ok(Json(response))
}
