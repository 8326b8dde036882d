//! Route handlers.

use super::DashboardState;
use super::page;
use crate::NO_DATA_MESSAGE;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use finratio::data::{DataError, FinancialsProvider};
use finratio::{AnalysisError, analyze};
use serde::Deserialize;
use tracing::{error, info};

/// Ticker used to prefill the form.
const DEFAULT_TICKER: &str = "AAPL";

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeQuery {
    #[serde(default)]
    ticker: String,
}

fn status_for(err: &AnalysisError) -> StatusCode {
    match err {
        AnalysisError::Data(DataError::InvalidSymbol(_)) => StatusCode::BAD_REQUEST,
        AnalysisError::Data(_) => StatusCode::BAD_GATEWAY,
    }
}

pub(crate) async fn index() -> Html<String> {
    Html(page::index(DEFAULT_TICKER))
}

pub(crate) async fn analyze_page<P>(
    State(state): State<DashboardState<P>>,
    Query(query): Query<AnalyzeQuery>,
) -> Response
where
    P: FinancialsProvider + 'static,
{
    let ticker = query.ticker.trim().to_ascii_uppercase();
    if ticker.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Html(page::message(DEFAULT_TICKER, "Please enter a ticker symbol.")),
        )
            .into_response();
    }

    match analyze(state.provider.as_ref(), &ticker).await {
        Ok(Some(analysis)) => {
            info!(%ticker, "rendered analysis");
            Html(page::results(&analysis.into_report())).into_response()
        }
        Ok(None) => Html(page::message(&ticker, &format!("{NO_DATA_MESSAGE}: {ticker}"))).into_response(),
        Err(e) => {
            error!(%ticker, error = %e, "analysis failed");
            let status = status_for(&e);
            (status, Html(page::message(&ticker, &e.to_string()))).into_response()
        }
    }
}

pub(crate) async fn analyze_api<P>(
    State(state): State<DashboardState<P>>,
    Path(ticker): Path<String>,
) -> Response
where
    P: FinancialsProvider + 'static,
{
    match analyze(state.provider.as_ref(), &ticker).await {
        Ok(Some(analysis)) => Json(analysis.into_report()).into_response(),
        Ok(None) => {
            let message = format!("{NO_DATA_MESSAGE}: {}", ticker.trim().to_ascii_uppercase());
            (StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": message }))).into_response()
        }
        Err(e) => {
            error!(%ticker, error = %e, "analysis failed");
            (status_for(&e), Json(serde_json::json!({ "error": e.to_string() }))).into_response()
        }
    }
}

pub(crate) async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "finratio",
        "version": finratio::VERSION
    }))
}
