use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// One daily OHLCV observation for a ticker. Numeric fields are nullable:
// a missing value in the source stays `null` in the response, it is never
// collapsed to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PriceRow {
    pub ticker: String,
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    #[serde(rename = "adjClose")]
    pub adj_close: Option<f64>,
    pub volume: Option<i64>,
}
