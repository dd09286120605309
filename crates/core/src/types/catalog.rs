//! Validated catalog shapes.
//!
//! These types are the normalized form of BigCommerce catalog products:
//! the server's conversion layer turns raw API payloads into these
//! structs, mapping absent or zero sale prices to `None`. The
//! `calculated_price` / `calculated_sale_price` fields start out `None`
//! and are populated by [`crate::pricing::apply_pricing`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CategoryId, ProductId, VariantId};

/// A catalog product with its variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// SKU code.
    pub sku: Option<String>,
    /// Base price.
    pub price: Decimal,
    /// Sale price, if one is set (never zero).
    pub sale_price: Option<Decimal>,
    /// Resolved effective price. `None` until pricing has run.
    pub calculated_price: Option<Decimal>,
    /// Resolved effective sale price. `None` until pricing has run,
    /// and `None` afterwards when no sale price applies.
    pub calculated_sale_price: Option<Decimal>,
    /// Categories the product belongs to.
    #[serde(default)]
    pub categories: Vec<CategoryId>,
    /// Storefront URL path.
    pub url: Option<String>,
    /// Thumbnail image URL.
    pub thumbnail_url: Option<String>,
    /// Product variants.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
}

/// A product variant (specific combination of options).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant ID.
    pub id: VariantId,
    /// SKU code.
    pub sku: Option<String>,
    /// Variant price. Falls back to the parent product price when
    /// absent or non-positive.
    pub price: Option<Decimal>,
    /// Variant sale price. Same fallback rule as `price`.
    pub sale_price: Option<Decimal>,
    /// Resolved effective price. `None` until pricing has run.
    pub calculated_price: Option<Decimal>,
    /// Resolved effective sale price.
    pub calculated_sale_price: Option<Decimal>,
    /// Whether purchasing this variant is disabled.
    #[serde(default)]
    pub purchasing_disabled: bool,
    /// Option values that identify this variant (e.g. Size: Large).
    #[serde(default)]
    pub option_values: Vec<VariantOptionValue>,
}

/// A single option value on a variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantOptionValue {
    /// Option name (e.g. "Size", "Color").
    pub option_display_name: String,
    /// Selected value (e.g. "Large", "Blue").
    pub label: String,
}
