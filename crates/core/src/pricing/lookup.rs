//! Price-list lookup structures.
//!
//! A [`PriceListLookup`] maps an explicit [`PriceKey`] to the price
//! override for that key. Keys are typed by scope, so variant and
//! product entries can never collide.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{ProductId, VariantId};

use super::positive_price;

/// Scope of a price override: a single variant or a whole product.
///
/// Variant scope wins when a record carries both ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceKey {
    /// Override for one variant.
    Variant(VariantId),
    /// Override for every variant of a product.
    Product(ProductId),
}

/// A single price-list record as returned by the pricelists API.
///
/// Exactly one of `variant_id` / `product_id` is expected to identify
/// the record's scope; records carrying neither are dropped on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceListRecord {
    /// Variant the override applies to, if variant-scoped.
    pub variant_id: Option<VariantId>,
    /// Product the override applies to, if product-scoped.
    pub product_id: Option<ProductId>,
    /// Override price.
    pub price: Decimal,
    /// Override sale price, if any.
    pub sale_price: Option<Decimal>,
}

impl PriceListRecord {
    /// The lookup key for this record. Variant id takes precedence over
    /// product id; `None` when the record carries neither.
    #[must_use]
    pub fn key(&self) -> Option<PriceKey> {
        self.variant_id
            .map(PriceKey::Variant)
            .or_else(|| self.product_id.map(PriceKey::Product))
    }
}

/// The stored value for a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceOverride {
    /// Override price.
    pub price: Decimal,
    /// Override sale price. Zero sale prices are normalized to `None`
    /// on insert (the pricelists API reports "no sale price" as 0).
    pub sale_price: Option<Decimal>,
}

/// Lookup from price key to price override for one customer group.
///
/// Built fresh per request by the server's price-list fetcher and
/// consumed immutably by [`super::apply_pricing`]. Duplicate keys are
/// last-write-wins, matching sequential insertion of upstream pages.
#[derive(Debug, Clone, Default)]
pub struct PriceListLookup {
    entries: HashMap<PriceKey, PriceOverride>,
}

impl PriceListLookup {
    /// Create an empty lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its scope key.
    ///
    /// Returns `false` when the record carries neither a variant nor a
    /// product id and was dropped.
    pub fn insert(&mut self, record: &PriceListRecord) -> bool {
        let Some(key) = record.key() else {
            return false;
        };
        self.entries.insert(
            key,
            PriceOverride {
                price: record.price,
                sale_price: positive_price(record.sale_price),
            },
        );
        true
    }

    /// Override for a specific variant, if any.
    #[must_use]
    pub fn variant(&self, id: VariantId) -> Option<&PriceOverride> {
        self.entries.get(&PriceKey::Variant(id))
    }

    /// Product-level override, if any.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&PriceOverride> {
        self.entries.get(&PriceKey::Product(id))
    }

    /// Whether the lookup holds no overrides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of overrides held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn record(
        variant_id: Option<i64>,
        product_id: Option<i64>,
        cents: i64,
        sale_cents: Option<i64>,
    ) -> PriceListRecord {
        PriceListRecord {
            variant_id: variant_id.map(VariantId::new),
            product_id: product_id.map(ProductId::new),
            price: Decimal::new(cents, 2),
            sale_price: sale_cents.map(|c| Decimal::new(c, 2)),
        }
    }

    #[test]
    fn test_variant_id_wins_over_product_id() {
        let mut lookup = PriceListLookup::new();
        assert!(lookup.insert(&record(Some(101), Some(1), 999, None)));

        assert!(lookup.variant(VariantId::new(101)).is_some());
        // Never inserted under the product-level key.
        assert!(lookup.product(ProductId::new(1)).is_none());
        assert_eq!(lookup.len(), 1);
    }

    #[test]
    fn test_product_scoped_record() {
        let mut lookup = PriceListLookup::new();
        assert!(lookup.insert(&record(None, Some(7), 1500, Some(1200))));

        let entry = lookup.product(ProductId::new(7)).unwrap();
        assert_eq!(entry.price, Decimal::new(1500, 2));
        assert_eq!(entry.sale_price, Some(Decimal::new(1200, 2)));
    }

    #[test]
    fn test_record_without_ids_is_dropped() {
        let mut lookup = PriceListLookup::new();
        assert!(!lookup.insert(&record(None, None, 999, None)));
        assert!(lookup.is_empty());
    }

    #[test]
    fn test_zero_sale_price_normalized_to_none() {
        let mut lookup = PriceListLookup::new();
        lookup.insert(&record(Some(5), None, 999, Some(0)));
        assert_eq!(lookup.variant(VariantId::new(5)).unwrap().sale_price, None);
    }

    #[test]
    fn test_duplicate_key_is_last_write_wins() {
        let mut lookup = PriceListLookup::new();
        lookup.insert(&record(Some(5), None, 999, None));
        lookup.insert(&record(Some(5), None, 888, None));
        assert_eq!(
            lookup.variant(VariantId::new(5)).unwrap().price,
            Decimal::new(888, 2)
        );
        assert_eq!(lookup.len(), 1);
    }

    #[test]
    fn test_record_deserializes_from_api_shape() {
        let json = r#"{"variant_id": 101, "product_id": 1, "price": 9.99, "sale_price": null}"#;
        let record: PriceListRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.key(), Some(PriceKey::Variant(VariantId::new(101))));
        assert_eq!(record.price, Decimal::new(999, 2));
    }
}
