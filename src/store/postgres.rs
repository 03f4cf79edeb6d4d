use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::PriceRow;
use crate::store::{PriceFilter, PriceStore};

#[derive(Clone)]
pub struct PgPriceStore {
    pool: PgPool,
}

impl PgPriceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PriceStore for PgPriceStore {
    async fn list_tickers(&self) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT ticker FROM prices ORDER BY ticker ASC",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn ticker_exists(&self, ticker: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM prices WHERE ticker = $1)",
        )
        .bind(ticker)
        .fetch_one(&self.pool)
        .await
    }

    async fn fetch_prices(&self, filter: &PriceFilter) -> Result<Vec<PriceRow>, sqlx::Error> {
        let mut query_builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT ticker, date, open, high, low, close, adj_close, volume \
             FROM prices WHERE ticker = ",
        );
        query_builder.push_bind(&filter.ticker);

        // Date bounds arrive as opaque ISO strings; bind them and let the
        // database cast, so user input never lands in the SQL text.
        if let Some(start) = &filter.start {
            query_builder.push(" AND date >= ");
            query_builder.push_bind(start);
            query_builder.push("::date");
        }

        if let Some(end) = &filter.end {
            query_builder.push(" AND date <= ");
            query_builder.push_bind(end);
            query_builder.push("::date");
        }

        query_builder.push(" ORDER BY date ASC LIMIT ");
        query_builder.push_bind(filter.limit);
        query_builder.push(" OFFSET ");
        query_builder.push_bind(filter.offset);

        query_builder
            .build_query_as::<PriceRow>()
            .fetch_all(&self.pool)
            .await
    }
}
