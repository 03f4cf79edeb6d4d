pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::models::PriceRow;

/// Normalized, ready-to-execute parameters for a price lookup.
///
/// `start` and `end` are inclusive date bounds carried as opaque ISO-8601
/// strings; `None` means the bound is not applied. `limit` and `offset`
/// have already been clamped by the service layer.
#[derive(Debug, Clone)]
pub struct PriceFilter {
    pub ticker: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait PriceStore: Send + Sync {
    /// Distinct ticker symbols, lexicographic ascending.
    async fn list_tickers(&self) -> Result<Vec<String>, sqlx::Error>;

    /// Whether at least one price row exists for the ticker, ignoring dates.
    async fn ticker_exists(&self, ticker: &str) -> Result<bool, sqlx::Error>;

    /// Rows matching the filter, ordered by date ascending, windowed by
    /// the filter's limit/offset.
    async fn fetch_prices(&self, filter: &PriceFilter) -> Result<Vec<PriceRow>, sqlx::Error>;
}
