//! Web dashboard.
//!
//! Server-rendered pages over the same analysis pipeline as the CLI, plus a
//! JSON endpoint for the full report.

mod page;
mod routes;

use axum::Router;
use axum::routing::get;
use finratio::data::FinancialsProvider;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state: the provider every request analyses through.
pub(crate) struct DashboardState<P> {
    provider: Arc<P>,
}

impl<P> DashboardState<P> {
    pub(crate) fn new(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }
}

impl<P> Clone for DashboardState<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
        }
    }
}

/// Build the application router.
pub(crate) fn router<P>(state: DashboardState<P>) -> Router
where
    P: FinancialsProvider + 'static,
{
    Router::new()
        .route("/", get(routes::index))
        .route("/analyze", get(routes::analyze_page::<P>))
        .route("/api/analysis/:ticker", get(routes::analyze_api::<P>))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
