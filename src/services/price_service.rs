use tracing::{debug, error};

use crate::errors::AppError;
use crate::models::PriceRow;
use crate::store::{PriceFilter, PriceStore};

const DEFAULT_LIMIT: i64 = 100;
const MIN_LIMIT: i64 = 1;
const MAX_LIMIT: i64 = 500;
const DEFAULT_OFFSET: i64 = 0;

/// Resolve a price lookup: normalize the ticker, clamp the window
/// parameters, verify the ticker exists, then run the filtered query.
///
/// The existence check deliberately ignores the date range: a known ticker
/// with no rows in the requested window returns an empty result, while an
/// unknown ticker is a `TickerNotFound` regardless of the window.
pub async fn get_prices(
    store: &dyn PriceStore,
    ticker: &str,
    start: Option<String>,
    end: Option<String>,
    limit: Option<i64>,
    offset: Option<i64>,
) -> Result<Vec<PriceRow>, AppError> {
    let ticker = ticker.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(AppError::Validation("ticker must not be blank".to_string()));
    }

    let limit = limit.map_or(DEFAULT_LIMIT, |l| l.clamp(MIN_LIMIT, MAX_LIMIT));
    let offset = offset.map_or(DEFAULT_OFFSET, |o| o.max(DEFAULT_OFFSET));

    let exists = store.ticker_exists(&ticker).await.map_err(|e| {
        error!("Existence check failed for ticker {}: {}", ticker, e);
        AppError::Db(e)
    })?;
    if !exists {
        debug!("Unknown ticker requested: {}", ticker);
        return Err(AppError::TickerNotFound(ticker));
    }

    let filter = PriceFilter {
        ticker,
        start: non_blank(start),
        end: non_blank(end),
        limit,
        offset,
    };

    store.fetch_prices(&filter).await.map_err(|e| {
        error!("Price query failed for ticker {}: {}", filter.ticker, e);
        AppError::Db(e)
    })
}

// Blank date bounds behave exactly like absent ones.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
