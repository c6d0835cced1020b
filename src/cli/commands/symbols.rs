//! Stock catalog command.

use anyhow::Result;
use stockcast_data::symbols::{self, StockInfo};

use crate::cli::SymbolsArgs;

pub async fn run(args: SymbolsArgs) -> Result<()> {
    let stocks: Vec<&StockInfo> = match &args.search {
        Some(query) => symbols::search(query),
        None => symbols::POPULAR_STOCKS.iter().collect(),
    };

    println!("Popular Stocks");
    println!("═══════════════════════════════════════════════════════════");
    println!();

    if stocks.is_empty() {
        println!("  No stocks found.");
        return Ok(());
    }

    for info in stocks {
        println!("  {:<6} {:<28} base ${:.2}", info.symbol, info.name, info.base_price);
    }

    println!();
    println!("Any other symbol is accepted with a base price of ${:.2}.", symbols::DEFAULT_BASE_PRICE);

    Ok(())
}
