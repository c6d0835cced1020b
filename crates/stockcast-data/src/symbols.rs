//! Catalog of well-known symbols and their reference prices.

use serde::Serialize;

/// A listed stock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StockInfo {
    /// Ticker symbol
    pub symbol: &'static str,
    /// Company name
    pub name: &'static str,
    /// Reference price the synthetic series starts from
    pub base_price: f64,
}

/// Base price for symbols outside the catalog.
pub const DEFAULT_BASE_PRICE: f64 = 100.0;

/// Popular stocks offered for selection.
pub const POPULAR_STOCKS: &[StockInfo] = &[
    StockInfo { symbol: "AAPL", name: "Apple Inc.", base_price: 180.0 },
    StockInfo { symbol: "MSFT", name: "Microsoft Corporation", base_price: 330.0 },
    StockInfo { symbol: "GOOGL", name: "Alphabet Inc.", base_price: 140.0 },
    StockInfo { symbol: "AMZN", name: "Amazon.com Inc.", base_price: 160.0 },
    StockInfo { symbol: "TSLA", name: "Tesla, Inc.", base_price: 220.0 },
    StockInfo { symbol: "META", name: "Meta Platforms, Inc.", base_price: 470.0 },
    StockInfo { symbol: "NVDA", name: "NVIDIA Corporation", base_price: 800.0 },
    StockInfo { symbol: "JPM", name: "JPMorgan Chase & Co.", base_price: 190.0 },
];

/// Reference price for an exact (case-sensitive) symbol.
pub fn base_price(symbol: &str) -> Option<f64> {
    POPULAR_STOCKS
        .iter()
        .find(|stock| stock.symbol == symbol)
        .map(|stock| stock.base_price)
}

/// Case-insensitive catalog lookup.
pub fn lookup(symbol: &str) -> Option<&'static StockInfo> {
    POPULAR_STOCKS
        .iter()
        .find(|stock| stock.symbol.eq_ignore_ascii_case(symbol.trim()))
}

/// Stocks whose symbol equals `query` or whose name contains it, ignoring case.
pub fn search(query: &str) -> Vec<&'static StockInfo> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    POPULAR_STOCKS
        .iter()
        .filter(|stock| {
            stock.symbol.to_lowercase() == query || stock.name.to_lowercase().contains(&query)
        })
        .collect()
}
