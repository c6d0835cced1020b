//! CLI definitions.

pub mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stockcast_core::types::Horizon;

#[derive(Parser)]
#[command(name = "stockcast")]
#[command(author, version, about = "Synthetic stock price history and forecast generator")]
pub struct Cli {
    /// Configuration file path (optional; defaults apply when missing)
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the configuration file)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Forecast the next trading days for a stock
    Predict(PredictArgs),
    /// Show the synthetic daily history for a stock
    History(HistoryArgs),
    /// List or search the stock catalog
    Symbols(SymbolsArgs),
    /// Validate configuration
    ValidateConfig,
    /// Write the default configuration to a file
    InitConfig(InitConfigArgs),
}

#[derive(clap::Args)]
pub struct PredictArgs {
    /// Stock symbol
    #[arg(short, long)]
    pub symbol: String,

    /// Trading days to forecast (1-30)
    #[arg(short, long)]
    pub days: Option<Horizon>,

    /// Random seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Date the synthetic history ends on (YYYY-MM-DD, default today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Data file (CSV) used instead of synthetic history
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(long, default_value = "text")]
    pub output: String,

    /// Save the predicted bars to a CSV file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct HistoryArgs {
    /// Stock symbol
    #[arg(short, long)]
    pub symbol: String,

    /// Random seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Date the history ends on (YYYY-MM-DD, default today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Output format (text, json, csv)
    #[arg(long, default_value = "text")]
    pub output: String,
}

#[derive(clap::Args)]
pub struct SymbolsArgs {
    /// Match symbols exactly or company names partially
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(clap::Args)]
pub struct InitConfigArgs {
    /// Destination file
    #[arg(short, long, default_value = "config/default.toml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
