//! JSON API backing the dashboard page.
//!
//! - `GET /api/v1/queries` - list the catalog
//! - `POST /api/v1/queries/:key/run` - execute one query with optional
//!   post-fetch filters
//!
//! Each run opens a fresh store connection and drops it afterwards; a
//! connect failure is returned as a retryable error rather than ending the
//! process.

use crate::catalog::{QueryCatalog, TOP_PROVIDERS_KEY};
use crate::error::FoodLensError;
use crate::filter::{self, FilterSpec};
use crate::runner::{provider_contacts, ProviderContact, QueryRunner};
use crate::store;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct DashboardState {
    pub database_url: String,
    pub catalog: Arc<QueryCatalog>,
}

#[derive(Debug, Serialize)]
pub struct QueryInfo {
    pub key: u8,
    pub slug: String,
    pub label: String,
}

/// Filter values from the dashboard form. Empty strings mean "no filter".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunRequest {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub provider_name: String,
    #[serde(default)]
    pub food_type: String,
    #[serde(default)]
    pub meal_type: String,
}

#[derive(Debug, Serialize)]
pub struct RunResponse {
    pub key: u8,
    pub label: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub row_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<ProviderContact>>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
        }
    }
}

/// Map the four form fields 1:1 onto FilterSpecs over the canonical result
/// columns, dropping empty values.
pub(crate) fn filter_specs(req: &RunRequest) -> Vec<FilterSpec> {
    [
        ("City", req.city.as_str()),
        ("Provider_Name", req.provider_name.as_str()),
        ("Food_Type", req.food_type.as_str()),
        ("Meal_Type", req.meal_type.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.trim().is_empty())
    .map(|(column, value)| FilterSpec::new(column, value.trim()))
    .collect()
}

pub(crate) fn create_api_router(state: DashboardState) -> Router {
    Router::new()
        .route("/api/v1/queries", get(list_queries))
        .route("/api/v1/queries/:key/run", post(run_query))
        .with_state(state)
}

async fn list_queries(State(state): State<DashboardState>) -> Json<Vec<QueryInfo>> {
    let queries = state
        .catalog
        .iter()
        .map(|def| QueryInfo {
            key: def.key,
            slug: def.slug.clone(),
            label: def.label.clone(),
        })
        .collect();
    Json(queries)
}

async fn run_query(
    State(state): State<DashboardState>,
    Path(key): Path<u8>,
    Json(req): Json<RunRequest>,
) -> Response {
    let label = match state.catalog.lookup(key) {
        Ok(def) => def.label.clone(),
        Err(e) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("query_not_found", e.to_string())),
            )
                .into_response();
        }
    };

    let store = match store::connect(&state.database_url).await {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "store connection failed");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new("connection_failed", e.to_string())),
            )
                .into_response();
        }
    };

    let runner = QueryRunner::new(store, state.catalog.clone());
    let rs = match runner.run(key).await {
        Ok(rs) => rs,
        Err(e @ FoodLensError::Execution(_)) => {
            error!(key, error = %e, "query execution failed");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("execution_failed", e.to_string())),
            )
                .into_response();
        }
        Err(e) => {
            error!(key, error = %e, "query run failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("internal_error", e.to_string())),
            )
                .into_response();
        }
    };

    let filtered = filter::apply(&rs, &filter_specs(&req));
    info!(key, rows = filtered.len(), "dashboard run complete");

    let contacts = if key == TOP_PROVIDERS_KEY {
        Some(provider_contacts(&filtered))
    } else {
        None
    };

    let response = RunResponse {
        key,
        label,
        row_count: filtered.len(),
        columns: filtered.columns,
        rows: filtered.rows,
        contacts,
    };
    Json(response).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_specs_skip_empty_fields() {
        let req = RunRequest {
            city: "Pune".to_string(),
            provider_name: "".to_string(),
            food_type: "  ".to_string(),
            meal_type: "Lunch".to_string(),
        };
        let specs = filter_specs(&req);
        assert_eq!(
            specs,
            vec![
                FilterSpec::new("City", "Pune"),
                FilterSpec::new("Meal_Type", "Lunch"),
            ]
        );
    }

    #[test]
    fn test_filter_specs_empty_request() {
        assert!(filter_specs(&RunRequest::default()).is_empty());
    }

    #[test]
    fn test_filter_specs_trim_values() {
        let req = RunRequest {
            food_type: " Rice ".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_specs(&req), vec![FilterSpec::new("Food_Type", "Rice")]);
    }

    #[test]
    fn test_run_response_omits_contacts_when_absent() {
        let response = RunResponse {
            key: 9,
            label: "Total quantity of surplus food by city".to_string(),
            columns: vec!["City".to_string()],
            rows: vec![vec!["Pune".to_string()]],
            row_count: 1,
            contacts: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("contacts").is_none());
        assert_eq!(json["row_count"], 1);
    }
}
