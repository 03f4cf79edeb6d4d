use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::PriceRow;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/:ticker", get(get_prices))
}

/// Raw, optional query parameters; the service applies defaults and clamps.
#[derive(Debug, Deserialize)]
pub struct PriceHistoryQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub async fn get_prices(
    Path(ticker): Path<String>,
    Query(params): Query<PriceHistoryQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<PriceRow>>, AppError> {
    info!("GET /prices/{} - Getting price history", ticker);
    let rows = services::price_service::get_prices(
        state.store.as_ref(),
        &ticker,
        params.start,
        params.end,
        params.limit,
        params.offset,
    )
    .await
    .map_err(|e| {
        match &e {
            AppError::TickerNotFound(t) => info!("Ticker not found: {}", t),
            _ => warn!("Failed to get price history for {}: {}", ticker, e),
        }
        e
    })?;
    Ok(Json(rows))
}
