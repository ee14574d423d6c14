//! Post-fetch filtering of an already-fetched result set.
//!
//! A row survives when, for every filter whose column exists in the result,
//! the lower-cased cell contains the lower-cased substring. Filters naming
//! absent columns impose no constraint. Filtering produces a new ResultSet;
//! it never adds rows, never reorders survivors, never alters cells.

use crate::store::ResultSet;
use serde::{Deserialize, Serialize};

/// A user-supplied (column, substring) pair narrowing a fetched result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub column: String,
    pub substring: String,
}

impl FilterSpec {
    pub fn new(column: impl Into<String>, substring: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            substring: substring.into(),
        }
    }
}

pub fn apply(rs: &ResultSet, filters: &[FilterSpec]) -> ResultSet {
    if filters.is_empty() {
        return rs.clone();
    }

    // Column positions are resolved once against this result's shape; a
    // filter on an unknown column drops out here rather than erroring.
    let applicable: Vec<(usize, String)> = filters
        .iter()
        .filter_map(|f| {
            rs.column_index(&f.column)
                .map(|idx| (idx, f.substring.to_lowercase()))
        })
        .collect();

    if applicable.is_empty() {
        return rs.clone();
    }

    let rows = rs
        .rows
        .iter()
        .filter(|row| {
            applicable
                .iter()
                .all(|(idx, needle)| row[*idx].to_lowercase().contains(needle.as_str()))
        })
        .cloned()
        .collect();

    ResultSet::new(rs.columns.clone(), rows)
}
