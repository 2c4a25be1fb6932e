use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use stockscope_core::ScopeError;
use url::Url;

use crate::CONNECTOR_NAME;
use crate::config::FmpConfig;

/// One REST call against the FMP v3 API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /search?query=&limit=&exchange=`
    Search {
        /// Free-text query.
        query: String,
        /// Optional hit cap.
        limit: Option<usize>,
        /// Optional exchange filter.
        exchange: Option<String>,
    },
    /// `GET /profile/{symbol}`
    Profile(String),
    /// `GET /historical-price-full/{symbol}?serietype=line`
    History(String),
    /// `GET /stock/list`
    StockList,
}

impl Endpoint {
    /// Short description used in error messages and logs.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Search { query, .. } => format!("search for '{query}'"),
            Self::Profile(s) => format!("profile for {s}"),
            Self::History(s) => format!("history for {s}"),
            Self::StockList => "stock list".to_string(),
        }
    }

    /// Build the full request URL, API key included.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the configured base URL cannot carry path segments.
    pub fn url(&self, cfg: &FmpConfig) -> Result<Url, ScopeError> {
        let mut url = cfg.base_url.clone();
        {
            let mut segs = url
                .path_segments_mut()
                .map_err(|()| ScopeError::InvalidArg(format!("base url cannot be a base: {}", cfg.base_url)))?;
            segs.pop_if_empty();
            match self {
                Self::Search { .. } => {
                    segs.push("search");
                }
                Self::Profile(s) => {
                    segs.extend(["profile", s.as_str()]);
                }
                Self::History(s) => {
                    segs.extend(["historical-price-full", s.as_str()]);
                }
                Self::StockList => {
                    segs.extend(["stock", "list"]);
                }
            }
        }
        {
            let mut q = url.query_pairs_mut();
            match self {
                Self::Search {
                    query,
                    limit,
                    exchange,
                } => {
                    q.append_pair("query", query);
                    if let Some(limit) = limit {
                        q.append_pair("limit", &limit.to_string());
                    }
                    if let Some(exchange) = exchange {
                        q.append_pair("exchange", exchange);
                    }
                }
                Self::History(_) => {
                    q.append_pair("serietype", "line");
                }
                Self::Profile(_) | Self::StockList => {}
            }
            q.append_pair("apikey", &cfg.api_key);
        }
        Ok(url)
    }
}

/// Transport abstraction (so we can inject canned payloads in tests).
///
/// Implementations return the decoded JSON body of a 2xx response and map every
/// other outcome to a `ScopeError`.
#[async_trait]
pub trait FmpAdapter: Send + Sync {
    /// Perform the call and return its JSON body.
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value, ScopeError>;
}

impl dyn FmpAdapter {
    /// Build an adapter from a closure. Handy for tests.
    pub fn from_fn<F>(f: F) -> Arc<dyn FmpAdapter>
    where
        F: Fn(&Endpoint) -> Result<Value, ScopeError> + Send + Sync + 'static,
    {
        struct FnAdapter<F>(F);

        #[async_trait]
        impl<F> FmpAdapter for FnAdapter<F>
        where
            F: Fn(&Endpoint) -> Result<Value, ScopeError> + Send + Sync + 'static,
        {
            async fn fetch(&self, endpoint: &Endpoint) -> Result<Value, ScopeError> {
                (self.0)(endpoint)
            }
        }

        Arc::new(FnAdapter(f))
    }
}

/// Real adapter backed by a shared `reqwest::Client`.
/// `reqwest::Client` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    http: reqwest::Client,
    cfg: FmpConfig,
}

impl RealAdapter {
    /// Wrap an existing HTTP client.
    #[must_use]
    pub const fn new(http: reqwest::Client, cfg: FmpConfig) -> Self {
        Self { http, cfg }
    }

    /// The configuration this adapter sends requests with.
    #[must_use]
    pub const fn config(&self) -> &FmpConfig {
        &self.cfg
    }
}

fn map_reqwest_err(e: &reqwest::Error, what: &str) -> ScopeError {
    if e.is_timeout() {
        return ScopeError::connector(CONNECTOR_NAME, format!("timed out: {what}"));
    }
    if e.is_decode() {
        return ScopeError::Data(format!("malformed body for {what}: {e}"));
    }
    ScopeError::connector(CONNECTOR_NAME, format!("{what}: {e}"))
}

#[async_trait]
impl FmpAdapter for RealAdapter {
    async fn fetch(&self, endpoint: &Endpoint) -> Result<Value, ScopeError> {
        let what = endpoint.describe();
        let url = endpoint.url(&self.cfg)?;
        tracing::debug!(target: "stockscope_fmp", endpoint = %what, path = url.path(), "fmp request");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| map_reqwest_err(&e, &what))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScopeError::status(CONNECTOR_NAME, status.as_u16(), what));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| map_reqwest_err(&e, &what))
    }
}
