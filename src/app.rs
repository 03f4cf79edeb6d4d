use axum::Router;

use crate::routes::{health, prices, tickers};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/tickers", tickers::router())
        .nest("/prices", prices::router())
        .with_state(state)
}
