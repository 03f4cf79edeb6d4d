mod price_row;

pub use price_row::PriceRow;
