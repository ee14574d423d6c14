use super::{DataStore, ResultSet};
use crate::error::Result;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory store returning a canned result, with a call counter so tests
/// can assert that a lookup failure never reaches the backend.
pub struct MockStore {
    result: ResultSet,
    calls: AtomicUsize,
}

impl MockStore {
    pub fn new(result: ResultSet) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(ResultSet::empty())
    }

    /// Number of statements this store has seen.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl DataStore for MockStore {
    async fn execute(&self, _sql: &str) -> Result<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(0)
    }

    async fn query(&self, _sql: &str) -> Result<ResultSet> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.result.clone())
    }
}
