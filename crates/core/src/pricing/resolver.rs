//! The pricing resolver.
//!
//! Overlays a [`PriceListLookup`] onto a product and its variants,
//! populating `calculated_price` / `calculated_sale_price` according
//! to the discount-type precedence matrix:
//!
//! | discount type | product level | variant level |
//! |---|---|---|
//! | `sale` | catalog sale price when strictly below base, else base | same, against the variant's own prices |
//! | `wholesale`/`retail`/`custom` | matching record, else base | variant record, else base-with-fallback |
//! | `default` | matching record, else base | variant record, else product record, else base-with-fallback |
//!
//! "Base-with-fallback" at the variant level means: the variant's own
//! price when present and strictly positive, else the parent product's.
//! The strict comparisons are load-bearing: a zero variant price falls
//! back to the product price, and a sale price equal to the base price
//! is not a discount.

use rust_decimal::Decimal;

use crate::types::{Product, ProductVariant};

use super::{DiscountType, PriceListLookup, PriceOverride, positive_price};

/// Resolve effective prices for a product and all of its variants.
///
/// Total function: never fails, and always leaves every
/// `calculated_price` populated, falling back to base catalog prices
/// when the lookup has nothing to say. The variants list is rebuilt.
#[must_use]
pub fn apply_pricing(
    mut product: Product,
    lookup: &PriceListLookup,
    discount_type: DiscountType,
) -> Product {
    let product_entry = lookup.product(product.id);

    let (price, sale_price) = resolve_product(&product, product_entry, discount_type);

    let variants = std::mem::take(&mut product.variants);
    product.variants = variants
        .into_iter()
        .map(|variant| {
            resolve_variant(
                variant,
                product.price,
                product.sale_price,
                product_entry,
                lookup,
                discount_type,
            )
        })
        .collect();

    product.calculated_price = Some(price);
    product.calculated_sale_price = sale_price;
    product
}

/// Product-level resolution.
fn resolve_product(
    product: &Product,
    entry: Option<&PriceOverride>,
    discount_type: DiscountType,
) -> (Decimal, Option<Decimal>) {
    let base = (product.price, product.sale_price);

    match discount_type {
        DiscountType::Sale => discounted_sale(product.price, product.sale_price).unwrap_or(base),
        DiscountType::Wholesale | DiscountType::Retail | DiscountType::Custom
        | DiscountType::Default => entry.map_or(base, apply_override),
    }
}

/// Variant-level resolution.
fn resolve_variant(
    mut variant: ProductVariant,
    product_price: Decimal,
    product_sale_price: Option<Decimal>,
    product_entry: Option<&PriceOverride>,
    lookup: &PriceListLookup,
    discount_type: DiscountType,
) -> ProductVariant {
    let variant_entry = lookup.variant(variant.id);

    let base = || {
        let price = positive_price(variant.price).unwrap_or(product_price);
        let sale_price = positive_price(variant.sale_price).or(product_sale_price);
        (price, sale_price)
    };

    let (price, sale_price) = match discount_type {
        DiscountType::Sale => variant
            .price
            .and_then(|own| variant.sale_price.and_then(|sale| discounted_sale(own, Some(sale))))
            .unwrap_or_else(base),
        DiscountType::Wholesale | DiscountType::Retail | DiscountType::Custom => {
            variant_entry.map_or_else(base, apply_override)
        }
        DiscountType::Default => variant_entry
            .or(product_entry)
            .map_or_else(base, apply_override),
    };

    variant.calculated_price = Some(price);
    variant.calculated_sale_price = sale_price;
    variant
}

/// A price-list override applied verbatim.
fn apply_override(entry: &PriceOverride) -> (Decimal, Option<Decimal>) {
    (entry.price, entry.sale_price)
}

/// The `sale` rule: the sale price is used for both fields, but only
/// when it is strictly below the base price.
fn discounted_sale(price: Decimal, sale_price: Option<Decimal>) -> Option<(Decimal, Option<Decimal>)> {
    sale_price
        .filter(|sale| *sale < price)
        .map(|sale| (sale, Some(sale)))
}
