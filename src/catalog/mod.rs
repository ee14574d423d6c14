mod builtin;
mod validator;

pub use validator::{validate_catalog, ValidationIssue};

use crate::error::{FoodLensError, Result};
use std::collections::HashMap;

/// Key of the distinguished "top providers by quantity" query. Both front-ends
/// render per-row contact lines for this query in addition to the table.
pub const TOP_PROVIDERS_KEY: u8 = 15;

/// One entry in the query catalog. Defined in code, never mutated after startup.
#[derive(Debug, Clone)]
pub struct QueryDef {
    pub key: u8,
    pub slug: String,
    pub label: String,
    pub sql: String,
}

/// The shared registry of analytical queries. A single catalog instance serves
/// both the console menu and the dashboard; it is constructed once and passed
/// by reference rather than living in module-level state.
pub struct QueryCatalog {
    queries: Vec<QueryDef>,
    key_index: HashMap<u8, usize>,
    slug_index: HashMap<String, usize>,
}

impl QueryCatalog {
    pub fn new(queries: Vec<QueryDef>) -> Self {
        let key_index = queries.iter().enumerate().map(|(i, q)| (q.key, i)).collect();
        let slug_index = queries
            .iter()
            .enumerate()
            .map(|(i, q)| (q.slug.clone(), i))
            .collect();
        Self {
            queries,
            key_index,
            slug_index,
        }
    }

    /// The fifteen built-in food donation queries.
    pub fn builtin() -> Self {
        Self::new(builtin::queries())
    }

    pub fn lookup(&self, key: u8) -> Result<&QueryDef> {
        self.key_index
            .get(&key)
            .map(|&i| &self.queries[i])
            .ok_or_else(|| {
                FoodLensError::QueryNotFound(format!(
                    "{} (valid keys are 1-{})",
                    key,
                    self.queries.len()
                ))
            })
    }

    pub fn lookup_slug(&self, slug: &str) -> Result<&QueryDef> {
        self.slug_index
            .get(slug)
            .map(|&i| &self.queries[i])
            .ok_or_else(|| FoodLensError::QueryNotFound(slug.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueryDef> {
        self.queries.iter()
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}
