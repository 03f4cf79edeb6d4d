use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::services;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_tickers))
}

pub async fn list_tickers(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    info!("GET /tickers - Listing known tickers");
    let tickers = services::ticker_service::list_tickers(state.store.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to list tickers: {}", e);
            e
        })?;
    Ok(Json(tickers))
}
