//! Product-table widget configuration models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use product_table_core::CategoryId;
use product_table_core::pricing::DiscountType;

/// A saved product-table widget configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ProductTableWidget {
    /// Widget ID.
    pub id: Uuid,
    /// Admin-facing name.
    pub name: String,
    /// Table settings edited in the admin UI.
    pub settings: WidgetSettings,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// The settings payload stored as jsonb.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetSettings {
    /// Table heading shown above the widget, if any.
    #[serde(default)]
    pub title: Option<String>,
    /// Categories whose products the table lists.
    #[serde(default)]
    pub category_ids: Vec<CategoryId>,
    /// Ordered column definitions (the column manager's output).
    #[serde(default)]
    pub columns: Vec<TableColumn>,
    /// Whether to render one row per variant instead of per product.
    #[serde(default)]
    pub show_variants: bool,
    /// Discount type applied when the storefront does not supply one.
    #[serde(default)]
    pub discount_type: DiscountType,
}

/// One column of the product table, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableColumn {
    /// Column key (e.g. "sku", "price", "add_to_cart").
    pub key: String,
    /// Display label.
    pub label: String,
    /// Whether the column is currently shown.
    #[serde(default = "default_true")]
    pub visible: bool,
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_round_trip() {
        let settings = WidgetSettings {
            title: Some("Bulk order".to_string()),
            category_ids: vec![CategoryId::new(23)],
            columns: vec![TableColumn {
                key: "price".to_string(),
                label: "Price".to_string(),
                visible: true,
            }],
            show_variants: true,
            discount_type: DiscountType::Wholesale,
        };

        let json = serde_json::to_string(&settings).unwrap();
        let back: WidgetSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(back.title.as_deref(), Some("Bulk order"));
        assert_eq!(back.category_ids, vec![CategoryId::new(23)]);
        assert_eq!(back.discount_type, DiscountType::Wholesale);
        assert!(back.show_variants);
    }

    #[test]
    fn test_settings_defaults_from_empty_object() {
        let settings: WidgetSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.title, None);
        assert!(settings.category_ids.is_empty());
        assert!(settings.columns.is_empty());
        assert!(!settings.show_variants);
        assert_eq!(settings.discount_type, DiscountType::Default);
    }

    #[test]
    fn test_column_visible_defaults_to_true() {
        let column: TableColumn = serde_json::from_str(r#"{"key": "sku", "label": "SKU"}"#).unwrap();
        assert!(column.visible);
    }
}
