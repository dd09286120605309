//! Conversions from raw API payloads to core domain types.
//!
//! This is the validation boundary: sale prices of zero (BigCommerce's
//! encoding of "no sale price") and non-positive variant prices are
//! normalized to `None` here, so the pricing core never sees them.

use product_table_core::pricing::positive_price;
use product_table_core::{Product, ProductVariant, VariantOptionValue};

use super::types::{Category, RawCategory, RawProduct, RawVariant};

pub(super) fn convert_product(raw: RawProduct) -> Product {
    let thumbnail_url = raw
        .images
        .iter()
        .find(|image| image.is_thumbnail)
        .or_else(|| raw.images.first())
        .and_then(|image| image.url_thumbnail.clone());

    Product {
        id: raw.id,
        name: raw.name,
        sku: raw.sku.filter(|s| !s.is_empty()),
        price: raw.price,
        sale_price: positive_price(raw.sale_price),
        calculated_price: None,
        calculated_sale_price: None,
        categories: raw.categories,
        url: raw.custom_url.map(|u| u.url),
        thumbnail_url,
        variants: raw.variants.into_iter().map(convert_variant).collect(),
    }
}

fn convert_variant(raw: RawVariant) -> ProductVariant {
    ProductVariant {
        id: raw.id,
        sku: raw.sku.filter(|s| !s.is_empty()),
        price: positive_price(raw.price),
        sale_price: positive_price(raw.sale_price),
        calculated_price: None,
        calculated_sale_price: None,
        purchasing_disabled: raw.purchasing_disabled,
        option_values: raw
            .option_values
            .into_iter()
            .map(|value| VariantOptionValue {
                option_display_name: value.option_display_name,
                label: value.label,
            })
            .collect(),
    }
}

pub(super) fn convert_category(raw: RawCategory) -> Category {
    Category {
        id: raw.id,
        name: raw.name,
        url: raw.custom_url.map(|u| u.url),
    }
}
