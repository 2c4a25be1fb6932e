//! Command-line arguments.
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "stockscope", version, about, long_about = None)]
pub struct Cli {
    /// Market-data API key.
    #[arg(long, env = "STOCKSCOPE_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Market-data API root.
    #[arg(long, env = "STOCKSCOPE_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Serve fixture data instead of calling the API.
    #[arg(long, env = "STOCKSCOPE_USE_MOCK", global = true)]
    pub mock: bool,

    /// Per-request timeout in seconds. Requests wait indefinitely without it.
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Print the HTML fragment instead of terminal text.
    #[arg(long, global = true)]
    pub html: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Request timeout as a duration.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search companies and show each hit enriched with its profile.
    Search {
        /// Free-text query.
        query: String,
        /// Maximum hits.
        #[arg(long)]
        limit: Option<usize>,
        /// Exchange filter.
        #[arg(long)]
        exchange: Option<String>,
        /// Reorder the results.
        #[arg(long, value_enum)]
        sort: Option<SortKey>,
        /// Mark the query inside names and symbols (HTML output).
        #[arg(long)]
        highlight: bool,
    },
    /// Search companies without fetching profiles.
    QuickSearch {
        /// Free-text query.
        query: String,
        /// Maximum hits.
        #[arg(long)]
        limit: Option<usize>,
        /// Exchange filter.
        #[arg(long)]
        exchange: Option<String>,
    },
    /// Show one company's summary and recent price history.
    Company {
        /// Ticker symbol, or a query string such as `?symbol=AAPL`.
        symbol: String,
        /// Skip the price history.
        #[arg(long)]
        no_chart: bool,
    },
    /// Show the ticker strip.
    Ticker {
        /// Exchange whose listings feed the strip.
        #[arg(long)]
        exchange: Option<String>,
        /// Listings at or below this price are left out.
        #[arg(long)]
        min_price: Option<Decimal>,
        /// Keep refreshing and print the strip this many times.
        #[arg(long, value_name = "N")]
        cycles: Option<u32>,
        /// Refresh period in seconds when cycling.
        #[arg(long, value_name = "SECS", default_value_t = 300)]
        interval: u64,
    },
}

/// Result ordering for `search`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Company name, A to Z.
    Name,
    /// Symbol, A to Z.
    Symbol,
    /// Biggest gain first.
    Change,
}
