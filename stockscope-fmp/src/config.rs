use stockscope_core::ScopeError;
use url::Url;

/// Default API root for Financial Modeling Prep v3.
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "STOCKSCOPE_API_KEY";
/// Environment variable overriding the API root.
pub const ENV_BASE_URL: &str = "STOCKSCOPE_BASE_URL";

/// Where to reach the API and how to authenticate.
///
/// The key travels as the `apikey` query parameter on every call.
#[derive(Clone, PartialEq, Eq)]
pub struct FmpConfig {
    /// API root; endpoint paths are appended as segments.
    pub base_url: Url,
    /// API key.
    pub api_key: String,
}

impl std::fmt::Debug for FmpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FmpConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl FmpConfig {
    /// Build a config from a base URL string and a key.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the URL does not parse or is not http(s),
    /// or when the key is blank.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, ScopeError> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| ScopeError::InvalidArg(format!("invalid base url '{base_url}': {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ScopeError::InvalidArg(format!(
                "base url must be http(s): {base_url}"
            )));
        }
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ScopeError::InvalidArg("api key must not be empty".into()));
        }
        Ok(Self { base_url, api_key })
    }

    /// Read `STOCKSCOPE_API_KEY` and the optional `STOCKSCOPE_BASE_URL`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the key is missing or either value is invalid.
    pub fn from_env() -> Result<Self, ScopeError> {
        let key = std::env::var(ENV_API_KEY)
            .map_err(|_| ScopeError::InvalidArg(format!("{ENV_API_KEY} is not set")))?;
        let base = std::env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base, key)
    }
}
