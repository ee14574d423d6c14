mod api;
mod page;

pub use api::{DashboardState, ErrorResponse, QueryInfo, RunRequest, RunResponse};

use crate::error::Result;
use axum::Router;
use std::net::SocketAddr;
use tracing::info;

/// The full dashboard: embedded page at `/` plus the JSON API under
/// `/api/v1`.
pub fn create_dashboard_router(state: DashboardState) -> Router {
    Router::new()
        .merge(page::create_page_router())
        .merge(api::create_api_router(state))
}

pub async fn serve(addr: SocketAddr, state: DashboardState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "dashboard listening");
    axum::serve(listener, create_dashboard_router(state)).await?;
    Ok(())
}
