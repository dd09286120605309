//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::bigcommerce::{BigCommerceError, CatalogClient};
use crate::config::AppConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; provides access to the database pool,
/// the BigCommerce client, and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    pool: PgPool,
    catalog: CatalogClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the BigCommerce client cannot be built.
    pub fn new(config: AppConfig, pool: PgPool) -> Result<Self, BigCommerceError> {
        let catalog = CatalogClient::new(&config.bigcommerce)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                catalog,
            }),
        })
    }

    /// Get a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the BigCommerce catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }
}
