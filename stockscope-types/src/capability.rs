use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with router endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Free-text symbol search.
    Search,
    /// Full company profile for one symbol.
    Profile,
    /// Daily closing-price history.
    History,
    /// Snapshot of every listed stock.
    Listing,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Profile => "profile",
            Self::History => "history",
            Self::Listing => "stock-list",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
