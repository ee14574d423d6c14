use super::{DataStore, ResultSet};
use crate::error::{FoodLensError, Result};
use sqlx::mysql::{MySqlPoolOptions, MySqlRow};
use sqlx::{Column, MySql, Pool, Row};
use tracing::debug;

pub struct MySqlStore {
    pool: Pool<MySql>,
}

impl MySqlStore {
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await
            .map_err(|e| FoodLensError::Connection(e.to_string()))?;
        debug!("connected to mysql store");
        Ok(Self { pool })
    }
}

fn decode_cell(row: &MySqlRow, idx: usize) -> String {
    if let Ok(v) = row.try_get::<Option<String>, _>(idx) {
        return v.unwrap_or_else(|| "NULL".to_string());
    }
    if let Ok(v) = row.try_get::<Option<i64>, _>(idx) {
        return v.map(|n| n.to_string()).unwrap_or_else(|| "NULL".to_string());
    }
    if let Ok(v) = row.try_get::<Option<u64>, _>(idx) {
        return v.map(|n| n.to_string()).unwrap_or_else(|| "NULL".to_string());
    }
    if let Ok(v) = row.try_get::<Option<f64>, _>(idx) {
        return v.map(|n| n.to_string()).unwrap_or_else(|| "NULL".to_string());
    }
    "NULL".to_string()
}

#[async_trait::async_trait]
impl DataStore for MySqlStore {
    async fn execute(&self, sql: &str) -> Result<u64> {
        let done = sqlx::query(sql)
            .execute(&self.pool)
            .await
            .map_err(|e| FoodLensError::Execution(e.to_string()))?;
        Ok(done.rows_affected())
    }

    async fn query(&self, sql: &str) -> Result<ResultSet> {
        let rows = sqlx::query(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| FoodLensError::Execution(e.to_string()))?;

        if rows.is_empty() {
            return Ok(ResultSet::empty());
        }

        let columns: Vec<String> = rows[0]
            .columns()
            .iter()
            .map(|c| c.name().to_string())
            .collect();

        let result_rows = rows
            .iter()
            .map(|row| (0..columns.len()).map(|i| decode_cell(row, i)).collect())
            .collect();

        Ok(ResultSet::new(columns, result_rows))
    }
}
