use tracing::error;

use crate::errors::AppError;
use crate::store::PriceStore;

/// Distinct known tickers, ascending. An empty store yields an empty list.
pub async fn list_tickers(store: &dyn PriceStore) -> Result<Vec<String>, AppError> {
    store.list_tickers().await.map_err(|e| {
        error!("Failed to list tickers: {}", e);
        AppError::Db(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PriceRow;
    use crate::store::memory::MemoryStore;
    use chrono::NaiveDate;

    fn row(ticker: &str, date: &str) -> PriceRow {
        PriceRow {
            ticker: ticker.to_string(),
            date: date.parse::<NaiveDate>().unwrap(),
            open: None,
            high: None,
            low: None,
            close: Some(100.0),
            adj_close: None,
            volume: None,
        }
    }

    #[tokio::test]
    async fn returns_distinct_tickers_sorted_ascending() {
        let store = MemoryStore::new(vec![
            row("MSFT", "2024-02-01"),
            row("AAPL", "2024-01-01"),
            row("GOOG", "2024-01-01"),
            row("AAPL", "2024-01-02"),
        ]);

        let tickers = list_tickers(&store).await.unwrap();
        assert_eq!(tickers, vec!["AAPL", "GOOG", "MSFT"]);
    }

    #[tokio::test]
    async fn empty_store_yields_empty_list() {
        let store = MemoryStore::empty();
        let tickers = list_tickers(&store).await.unwrap();
        assert!(tickers.is_empty());
    }
}
