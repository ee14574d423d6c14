use super::QueryCatalog;
use crate::runner::substitute_today;
use chrono::NaiveDate;
use sqlparser::dialect::GenericDialect;
use sqlparser::parser::Parser;

#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub key: u8,
    pub slug: String,
    pub message: String,
}

/// Parse every catalog query under a generic SQL dialect. The `@today`
/// placeholder is substituted with a sample date first so the parser sees the
/// SQL exactly as a backend would.
pub fn validate_catalog(catalog: &QueryCatalog) -> Vec<ValidationIssue> {
    let sample = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let dialect = GenericDialect {};

    let mut issues = Vec::new();
    for def in catalog.iter() {
        let sql = substitute_today(&def.sql, sample);
        if let Err(e) = Parser::parse_sql(&dialect, &sql) {
            issues.push(ValidationIssue {
                key: def.key,
                slug: def.slug.clone(),
                message: e.to_string(),
            });
        }
    }
    issues
}
