pub(crate) mod health;
pub(crate) mod prices;
pub(crate) mod tickers;
