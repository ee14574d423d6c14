use crate::catalog::QueryCatalog;
use crate::error::Result;
use crate::store::{DataStore, ResultSet};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Placeholder in catalog SQL for the reference date.
pub const TODAY_PLACEHOLDER: &str = "@today";

/// Replace the `@today` placeholder with a quoted ISO date literal.
pub fn substitute_today(sql: &str, date: NaiveDate) -> String {
    sql.replace(
        TODAY_PLACEHOLDER,
        &format!("'{}'", date.format("%Y-%m-%d")),
    )
}

/// Executes catalog queries against a data store. Lookup happens before any
/// round trip, so an unknown key never reaches the backend. Nothing is
/// cached; re-running a key re-executes the full query.
pub struct QueryRunner {
    store: Arc<dyn DataStore>,
    catalog: Arc<QueryCatalog>,
}

impl QueryRunner {
    pub fn new(store: Arc<dyn DataStore>, catalog: Arc<QueryCatalog>) -> Self {
        Self { store, catalog }
    }

    pub fn catalog(&self) -> &QueryCatalog {
        &self.catalog
    }

    /// Run a query with today as the reference date.
    pub async fn run(&self, key: u8) -> Result<ResultSet> {
        self.run_for_date(key, Utc::now().date_naive()).await
    }

    /// Run a query with a fixed reference date. Used by tests and one-shot
    /// CLI runs to make date-relative queries reproducible.
    pub async fn run_for_date(&self, key: u8, date: NaiveDate) -> Result<ResultSet> {
        let def = self.catalog.lookup(key)?;
        let sql = substitute_today(&def.sql, date);
        debug!(key = def.key, slug = %def.slug, "executing catalog query");
        let rs = self.store.query(&sql).await?;
        info!(key = def.key, rows = rs.len(), "query returned");
        Ok(rs)
    }
}

/// One contact line of the distinguished "top providers" result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderContact {
    pub name: String,
    pub city: String,
    pub contact: String,
}

/// Extract contact lines from a top-providers result. Returns nothing when
/// the expected columns are missing, so callers can feed any result through.
pub fn provider_contacts(rs: &ResultSet) -> Vec<ProviderContact> {
    let (Some(name), Some(city), Some(contact)) = (
        rs.column_index("Provider_Name"),
        rs.column_index("City"),
        rs.column_index("Contact"),
    ) else {
        return Vec::new();
    };

    rs.rows
        .iter()
        .map(|row| ProviderContact {
            name: row[name].clone(),
            city: row[city].clone(),
            contact: row[contact].clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FoodLensError;
    use crate::store::MockStore;

    fn fixed_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_substitute_today_quotes_iso_date() {
        let sql = "SELECT * FROM food_listings_data WHERE Expiry_Date < @today";
        assert_eq!(
            substitute_today(sql, fixed_date()),
            "SELECT * FROM food_listings_data WHERE Expiry_Date < '2024-06-01'"
        );
    }

    #[test]
    fn test_substitute_today_without_placeholder_is_identity() {
        let sql = "SELECT COUNT(*) AS Total_Listings FROM food_listings_data";
        assert_eq!(substitute_today(sql, fixed_date()), sql);
    }

    #[tokio::test]
    async fn test_unknown_key_never_reaches_the_store() {
        let store = Arc::new(MockStore::empty());
        let runner = QueryRunner::new(store.clone(), Arc::new(QueryCatalog::builtin()));

        for key in [0u8, 16, 42] {
            let err = runner.run(key).await.unwrap_err();
            assert!(matches!(err, FoodLensError::QueryNotFound(_)));
        }
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn test_valid_key_executes_exactly_once() {
        let store = Arc::new(MockStore::empty());
        let runner = QueryRunner::new(store.clone(), Arc::new(QueryCatalog::builtin()));

        runner.run(1).await.unwrap();
        assert_eq!(store.calls(), 1);
    }

    #[test]
    fn test_provider_contacts_extraction() {
        let rs = ResultSet::new(
            vec![
                "Provider_ID".to_string(),
                "Provider_Name".to_string(),
                "City".to_string(),
                "Contact".to_string(),
                "Total_Quantity".to_string(),
            ],
            vec![vec![
                "1".to_string(),
                "Annapurna Kitchen".to_string(),
                "Pune".to_string(),
                "+91-98765".to_string(),
                "20".to_string(),
            ]],
        );

        let contacts = provider_contacts(&rs);
        assert_eq!(
            contacts,
            vec![ProviderContact {
                name: "Annapurna Kitchen".to_string(),
                city: "Pune".to_string(),
                contact: "+91-98765".to_string(),
            }]
        );
    }

    #[test]
    fn test_provider_contacts_absent_columns_yield_nothing() {
        let rs = ResultSet::new(
            vec!["City".to_string()],
            vec![vec!["Pune".to_string()]],
        );
        assert!(provider_contacts(&rs).is_empty());
    }
}
