//! Customer-group-aware pricing.
//!
//! # Architecture
//!
//! Pricing runs in two stages:
//!
//! 1. The server fetches a customer group's price-list records from
//!    BigCommerce and builds a [`PriceListLookup`] (one fetch per
//!    request, no caching - price lists are authoritative upstream).
//! 2. [`apply_pricing`] overlays the lookup onto each product in the
//!    result set, writing the `calculated_price` /
//!    `calculated_sale_price` fields on the product and every variant.
//!
//! Stage 2 is a total function: whatever the lookup contains, every
//! product comes back with calculated prices, degrading to base
//! catalog prices when no override matches.

mod lookup;
mod resolver;

pub use lookup::{PriceKey, PriceListLookup, PriceListRecord, PriceOverride};
pub use resolver::apply_pricing;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which pricing precedence policy to apply.
///
/// Supplied by the caller per invocation; widget configurations store a
/// default. Unknown values deserialize as [`DiscountType::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Catalog sale prices win outright; price lists are ignored.
    Sale,
    /// Matching price-list record or base price.
    Wholesale,
    /// Matching price-list record or base price.
    Retail,
    /// Matching price-list record or base price.
    Custom,
    /// Variant record, then product record, then base price.
    ///
    /// Must stay the last variant: it is the `#[serde(other)]`
    /// catch-all for unknown tags.
    #[default]
    #[serde(other)]
    Default,
}

/// Keep a price only when it is present and strictly positive.
///
/// This is the single normalization rule for "no price here": both the
/// API conversion boundary and the resolver treat zero (BigCommerce's
/// encoding of an unset price) the same as absent.
#[must_use]
pub fn positive_price(price: Option<Decimal>) -> Option<Decimal> {
    price.filter(|p| *p > Decimal::ZERO)
}
