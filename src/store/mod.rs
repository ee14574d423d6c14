mod mock;
mod mysql;
mod sqlite;

pub use mock::MockStore;
pub use mysql::MySqlStore;
pub use sqlite::SqliteStore;

use crate::error::{FoodLensError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A fetched query result. Cells are carried as display strings so the
/// post-filter and both front-ends see one uniform shape regardless of the
/// backend's column types. Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ResultSet {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The relational backend boundary: one statement in, rows out. No retries,
/// no timeouts, nothing cached; a slow backend blocks the caller.
#[async_trait::async_trait]
pub trait DataStore: Send + Sync {
    /// Run a statement that returns no rows (DDL, INSERT). Returns the
    /// affected row count.
    async fn execute(&self, sql: &str) -> Result<u64>;

    /// Run a query and fetch all rows with their column names.
    async fn query(&self, sql: &str) -> Result<ResultSet>;
}

/// Open a store for the given URL, dispatching on scheme. `mariadb://` URLs
/// are accepted as an alias for the MySQL driver.
pub async fn connect(url: &str) -> Result<Arc<dyn DataStore>> {
    if url.starts_with("sqlite:") {
        Ok(Arc::new(SqliteStore::connect(url).await?))
    } else if url.starts_with("mysql://") {
        Ok(Arc::new(MySqlStore::connect(url).await?))
    } else if let Some(rest) = url.strip_prefix("mariadb://") {
        Ok(Arc::new(MySqlStore::connect(&format!("mysql://{rest}")).await?))
    } else {
        Err(FoodLensError::Config(format!(
            "unsupported database URL '{url}' (expected sqlite: or mysql://)"
        )))
    }
}
