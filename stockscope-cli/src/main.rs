//! `stockscope`: look up companies from the terminal.
//!
//! ```bash
//! stockscope search apple --sort change
//! stockscope quick-search micro
//! stockscope company AAPL
//! stockscope ticker --cycles 3 --interval 60
//! ```
//!
//! The API key comes from `--api-key` or `STOCKSCOPE_API_KEY`. Set
//! `STOCKSCOPE_USE_MOCK=1` (or pass `--mock`) to use fixture data.
#![warn(missing_docs)]
mod args;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use stockscope::components::SubmitOutcome;
use stockscope::{
    CompanyInfo, Marquee, QuickSearch, Render, ScopeConnector, ScopeError, SearchForm,
    SearchResults, StockScope, StockScopeBuilder, Symbol, symbol_from_query,
};
use stockscope_fmp::FmpConnector;
use stockscope_mock::MockConnector;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Command, SortKey};

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = if verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    } else {
        EnvFilter::new(default)
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn connector(cli: &Cli) -> Result<Arc<dyn ScopeConnector>, ScopeError> {
    if cli.mock {
        tracing::info!("using fixture connector");
        return Ok(Arc::new(MockConnector::new()));
    }
    let mut b = FmpConnector::builder();
    if let Some(key) = &cli.api_key {
        b = b.api_key(key);
    }
    if let Some(url) = &cli.base_url {
        b = b.base_url(url);
    }
    Ok(Arc::new(b.build()?))
}

fn builder(cli: &Cli) -> Result<StockScopeBuilder, ScopeError> {
    let mut b = StockScope::builder().with_connector(connector(cli)?);
    if let Some(t) = cli.request_timeout() {
        b = b.request_timeout(t);
    }
    Ok(b)
}

fn print(view: &impl Render, html: bool) {
    if html {
        println!("{}", view.render_html());
    } else {
        let text = view.render_text();
        println!("{}", text.trim_end());
    }
}

async fn run(cli: Cli) -> Result<ExitCode, ScopeError> {
    let mut b = builder(&cli)?;
    match &cli.command {
        Command::Search {
            query,
            limit,
            exchange,
            sort,
            highlight,
        } => {
            if let Some(n) = limit {
                b = b.search_limit(*n);
            }
            if let Some(ex) = exchange {
                b = b.search_exchange(ex.clone());
            }
            let scope = Arc::new(b.build()?);
            let results = Arc::new(SearchResults::new());
            let form = SearchForm::new(scope);
            let sink = Arc::clone(&results);
            form.on_search(move |companies| sink.render(companies));
            form.set_value(query.clone());
            results.show_loading();

            match form.submit().await {
                SubmitOutcome::Completed(_) => {
                    match sort {
                        Some(SortKey::Name) => {
                            results.sort(|a, b| a.company_name.cmp(&b.company_name));
                        }
                        Some(SortKey::Symbol) => {
                            results.sort(|a, b| a.symbol.cmp(&b.symbol));
                        }
                        Some(SortKey::Change) => {
                            results.sort(|a, b| {
                                let change = |p: &stockscope::CompanyProfile| {
                                    p.changes_percentage.or(p.changes)
                                };
                                change(b).cmp(&change(a))
                            });
                        }
                        None => {}
                    }
                    if *highlight {
                        results.highlight(query.trim());
                    }
                    print(&results.view(), cli.html);
                    Ok(ExitCode::SUCCESS)
                }
                SubmitOutcome::Ignored => Ok(ExitCode::SUCCESS),
                SubmitOutcome::Rejected | SubmitOutcome::Failed(_) => {
                    let message = form.view().error.unwrap_or_default();
                    results.show_error(message);
                    print(&results.view(), cli.html);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::QuickSearch {
            query,
            limit,
            exchange,
        } => {
            if let Some(n) = limit {
                b = b.search_limit(*n);
            }
            if let Some(ex) = exchange {
                b = b.search_exchange(ex.clone());
            }
            let quick = QuickSearch::new(Arc::new(b.build()?));
            let view = quick.search(query).await;
            print(&view, cli.html);
            Ok(if matches!(view, stockscope::view::results::ResultsView::Error(_)) {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::Company { symbol, no_chart } => {
            let symbol = if symbol.contains('=') {
                symbol_from_query(symbol)
            } else {
                Symbol::new(symbol).ok()
            };
            let mut info = CompanyInfo::new(Arc::new(b.build()?), symbol);
            info.load().await;
            if !no_chart && info.company().is_some() {
                info.add_chart().await;
            }
            print(info.view(), cli.html);
            Ok(if info.view().error.is_some() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::Ticker {
            exchange,
            min_price,
            cycles,
            interval,
        } => {
            if let Some(ex) = exchange {
                b = b.ticker_exchange(ex.clone());
            }
            if let Some(p) = min_price {
                b = b.ticker_min_price(*p);
            }
            let period = Duration::from_secs((*interval).max(1));
            let marquee = Marquee::new(Arc::new(b.refresh_interval(period).build()?));
            let mut outcome = marquee.load().await;
            print(&marquee.view(), cli.html);
            for _ in 1..cycles.unwrap_or(1) {
                tokio::time::sleep(period).await;
                outcome = marquee.refresh().await;
                print(&marquee.view(), cli.html);
            }
            marquee.destroy();
            Ok(if outcome == stockscope::LoadOutcome::Failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
