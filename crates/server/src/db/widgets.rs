//! Widget configuration repository.
//!
//! Plain runtime-checked queries (`sqlx::query_as`), so the workspace
//! builds without a live database. Settings are stored as jsonb and
//! decoded into [`WidgetSettings`]; undecodable settings map to
//! [`RepositoryError::DataCorruption`].

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{ProductTableWidget, WidgetSettings};

use super::RepositoryError;

#[derive(sqlx::FromRow)]
struct WidgetRow {
    id: Uuid,
    name: String,
    settings: serde_json::Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WidgetRow {
    fn into_widget(self) -> Result<ProductTableWidget, RepositoryError> {
        let settings: WidgetSettings = serde_json::from_value(self.settings).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid widget settings in database: {e}"))
        })?;

        Ok(ProductTableWidget {
            id: self.id,
            name: self.name,
            settings,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Repository for widget configuration records.
pub struct WidgetRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WidgetRepository<'a> {
    /// Create a new widget repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all widgets, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<ProductTableWidget>, RepositoryError> {
        let rows = sqlx::query_as::<_, WidgetRow>(
            r"
            SELECT id, name, settings, created_at, updated_at
            FROM product_table_widget
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(WidgetRow::into_widget).collect()
    }

    /// Get a widget by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: Uuid) -> Result<Option<ProductTableWidget>, RepositoryError> {
        let row = sqlx::query_as::<_, WidgetRow>(
            r"
            SELECT id, name, settings, created_at, updated_at
            FROM product_table_widget
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(WidgetRow::into_widget).transpose()
    }

    /// Create a widget and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        name: &str,
        settings: &WidgetSettings,
    ) -> Result<ProductTableWidget, RepositoryError> {
        let settings_json = serde_json::to_value(settings).map_err(|e| {
            RepositoryError::DataCorruption(format!("unserializable widget settings: {e}"))
        })?;

        let row = sqlx::query_as::<_, WidgetRow>(
            r"
            INSERT INTO product_table_widget (id, name, settings)
            VALUES ($1, $2, $3)
            RETURNING id, name, settings, created_at, updated_at
            ",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(settings_json)
        .fetch_one(self.pool)
        .await?;

        row.into_widget()
    }

    /// Update a widget's name and settings.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: Uuid,
        name: &str,
        settings: &WidgetSettings,
    ) -> Result<Option<ProductTableWidget>, RepositoryError> {
        let settings_json = serde_json::to_value(settings).map_err(|e| {
            RepositoryError::DataCorruption(format!("unserializable widget settings: {e}"))
        })?;

        let row = sqlx::query_as::<_, WidgetRow>(
            r"
            UPDATE product_table_widget
            SET name = $2, settings = $3, updated_at = now()
            WHERE id = $1
            RETURNING id, name, settings, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(name)
        .bind(settings_json)
        .fetch_optional(self.pool)
        .await?;

        row.map(WidgetRow::into_widget).transpose()
    }

    /// Delete a widget. Returns whether a record was removed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM product_table_widget WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
