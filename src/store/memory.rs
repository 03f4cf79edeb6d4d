use async_trait::async_trait;

use crate::models::PriceRow;
use crate::store::{PriceFilter, PriceStore};

/// Test double backed by a plain `Vec`, mirroring the store contract:
/// ticker equality, inclusive date bounds, ascending order, limit/offset.
pub struct MemoryStore {
    rows: Vec<PriceRow>,
}

impl MemoryStore {
    pub fn new(mut rows: Vec<PriceRow>) -> Self {
        rows.sort_by(|a, b| (&a.ticker, a.date).cmp(&(&b.ticker, b.date)));
        Self { rows }
    }

    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }
}

#[async_trait]
impl PriceStore for MemoryStore {
    async fn list_tickers(&self) -> Result<Vec<String>, sqlx::Error> {
        let mut tickers: Vec<String> = self.rows.iter().map(|r| r.ticker.clone()).collect();
        tickers.sort();
        tickers.dedup();
        Ok(tickers)
    }

    async fn ticker_exists(&self, ticker: &str) -> Result<bool, sqlx::Error> {
        Ok(self.rows.iter().any(|r| r.ticker == ticker))
    }

    async fn fetch_prices(&self, filter: &PriceFilter) -> Result<Vec<PriceRow>, sqlx::Error> {
        let rows = self
            .rows
            .iter()
            .filter(|r| r.ticker == filter.ticker)
            .filter(|r| {
                let iso = r.date.to_string();
                filter.start.as_deref().map_or(true, |s| iso.as_str() >= s)
                    && filter.end.as_deref().map_or(true, |e| iso.as_str() <= e)
            })
            .skip(filter.offset as usize)
            .take(filter.limit as usize)
            .cloned()
            .collect();
        Ok(rows)
    }
}
