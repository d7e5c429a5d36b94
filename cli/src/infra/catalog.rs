//! SQL-backed action catalog.

use sqlx::mysql::MySqlPoolOptions;

use crate::application::ports::ActionCatalogSource;
use crate::domain::{ActionCatalog, CatalogError};
use crate::infra::config::Config;

/// Action catalog read from a MySQL `actions` table.
pub struct SqlCatalog {
    dsn: String,
}

impl SqlCatalog {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            dsn: config.catalog_url.clone(),
        }
    }
}

impl ActionCatalogSource for SqlCatalog {
    /// Connect and read the full id→label mapping.
    ///
    /// The pool is created per fetch: the catalog is read exactly once per
    /// session, so there is nothing to keep open.
    async fn fetch_actions(&self) -> Result<ActionCatalog, CatalogError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect(&self.dsn)
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        let rows: Vec<(u32, String)> = sqlx::query_as("SELECT id, name FROM actions")
            .fetch_all(&pool)
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        pool.close().await;
        Ok(ActionCatalog::from_entries(rows))
    }
}
