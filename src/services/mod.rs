pub mod price_service;
pub mod ticker_service;
