//! History command implementation.

use anyhow::{Context, Result};
use stockcast_config::AppConfig;
use stockcast_core::types::DailyBar;
use stockcast_data::write_history_csv;
use stockcast_engine::SelectedStock;
use stockcast_model::estimate_trend;
use tracing::info;

use super::mock_source;
use crate::cli::HistoryArgs;

pub async fn run(args: HistoryArgs, config: AppConfig) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let (stock, bars) = load_history(&config, &args).await?;
    info!("Generated {} bars for {}", bars.len(), stock.symbol);

    match args.output.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&bars)?);
        }
        "csv" => {
            write_history_csv(std::io::stdout().lock(), &bars)?;
        }
        _ => {
            println!("{} ({}) Daily History", stock.name, stock.symbol);
            println!("═══════════════════════════════════════════════════════════════════════");
            println!(
                "  {:<12} {:>10} {:>10} {:>10} {:>10} {:>14}",
                "Date", "Open", "High", "Low", "Close", "Volume"
            );
            println!("  ─────────────────────────────────────────────────────────────────────");
            for bar in &bars {
                println!(
                    "  {:<12} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>14}",
                    bar.date.to_string(),
                    bar.open,
                    bar.high,
                    bar.low,
                    bar.close,
                    bar.volume
                );
            }
            println!();
            println!("  Recent trend: {}", estimate_trend(&bars));
        }
    }

    Ok(())
}

/// Resolve the symbol the way a prediction session does, then generate.
async fn load_history(config: &AppConfig, args: &HistoryArgs) -> Result<(SelectedStock, Vec<DailyBar>)> {
    let stock = SelectedStock::resolve(&args.symbol)
        .with_context(|| format!("Invalid symbol '{}'", args.symbol))?;
    let source = mock_source(config, args.seed.or(config.session.seed), args.as_of);
    let bars = source.historical_bars(&stock.symbol).await?;
    Ok((stock, bars))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn args(symbol: &str) -> HistoryArgs {
        HistoryArgs {
            symbol: symbol.to_string(),
            seed: Some(42),
            as_of: NaiveDate::from_ymd_opt(2024, 3, 15),
            output: "text".to_string(),
        }
    }

    #[tokio::test]
    async fn test_lowercase_symbol_uses_catalog_price() {
        let config = AppConfig::default();
        let (lower, lower_bars) = load_history(&config, &args("aapl")).await.unwrap();
        let (upper, upper_bars) = load_history(&config, &args("AAPL")).await.unwrap();

        assert_eq!(lower, upper);
        assert_eq!(lower.name, "Apple Inc.");
        assert_eq!(lower_bars, upper_bars);
        assert!(lower_bars[0].open > Decimal::from(160));
    }

    #[tokio::test]
    async fn test_blank_symbol_rejected() {
        assert!(load_history(&AppConfig::default(), &args("  ")).await.is_err());
    }
}
