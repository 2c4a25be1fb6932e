use std::sync::Arc;
use std::time::Duration;

use stockscope_core::ScopeError;

use crate::FmpConnector;
use crate::adapter::RealAdapter;
use crate::config::{DEFAULT_BASE_URL, FmpConfig};

/// Builder for [`FmpConnector`].
///
/// ```no_run
/// use stockscope_fmp::FmpConnector;
///
/// let fmp = FmpConnector::builder()
///     .api_key("demo")
///     .build()
///     .expect("valid config");
/// # let _ = fmp;
/// ```
#[derive(Debug, Default)]
pub struct FmpConnectorBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    http: Option<reqwest::Client>,
    timeout: Option<Duration>,
}

impl FmpConnector {
    /// Returns an unconfigured builder pointing at the public API root.
    #[must_use]
    pub fn builder() -> FmpConnectorBuilder {
        FmpConnectorBuilder::default()
    }
}

impl FmpConnectorBuilder {
    /// Override the API root (defaults to the public v3 endpoint).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Reuse an existing HTTP client (connection pool, proxies, TLS settings).
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Transport-level timeout applied when the builder creates its own client.
    ///
    /// Ignored when a client is supplied with [`Self::http_client`].
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate and build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` when no key was given, the base URL is invalid, or
    /// the HTTP client cannot be constructed.
    pub fn build(self) -> Result<FmpConnector, ScopeError> {
        let key = self
            .api_key
            .ok_or_else(|| ScopeError::InvalidArg("api key is required".into()))?;
        let base = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let cfg = FmpConfig::new(base, key)?;

        let http = match self.http {
            Some(client) => client,
            None => {
                let mut b = reqwest::Client::builder();
                if let Some(t) = self.timeout {
                    b = b.timeout(t);
                }
                b.build()
                    .map_err(|e| ScopeError::InvalidArg(format!("http client: {e}")))?
            }
        };

        Ok(FmpConnector::from_adapter(Arc::new(RealAdapter::new(
            http, cfg,
        ))))
    }
}
