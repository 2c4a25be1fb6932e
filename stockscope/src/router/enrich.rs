//! Batch profile enrichment.
//!
//! Every input record triggers exactly one profile request. All requests run
//! concurrently and the join waits for each of them to settle; one slow or
//! failing request never aborts the others. Results are paired with their
//! input position before the join, so output order always follows input order.

use stockscope_core::{
    Capability, CompanyProfile, EnrichReport, Listing, ScopeError, SearchHit, Symbol, TickerEntry,
};

use crate::StockScope;
use crate::core::tag_err;

/// What happens to a record whose profile fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichPolicy {
    /// Drop the record (search results).
    DropFailed,
    /// Keep the pre-enrichment record so every display slot stays filled
    /// (ticker).
    KeepShallow,
}

/// A record that can be enriched with a profile.
pub trait Enrichable: Clone + Send + Sync {
    /// Symbol whose profile replaces this record.
    fn symbol(&self) -> &Symbol;
}

impl Enrichable for SearchHit {
    fn symbol(&self) -> &Symbol {
        &self.symbol
    }
}

impl Enrichable for Listing {
    fn symbol(&self) -> &Symbol {
        &self.symbol
    }
}

/// One enrichment outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enriched<T> {
    /// The profile fetch succeeded.
    Full {
        /// The record the profile was fetched for.
        shallow: T,
        /// The fetched profile.
        profile: CompanyProfile,
    },
    /// The fetch failed and the policy kept the original record.
    Shallow(T),
}

impl<T> Enriched<T> {
    /// The profile, if enrichment succeeded.
    #[must_use]
    pub fn into_profile(self) -> Option<CompanyProfile> {
        match self {
            Self::Full { profile, .. } => Some(profile),
            Self::Shallow(_) => None,
        }
    }

    /// True when enrichment succeeded.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        matches!(self, Self::Full { .. })
    }
}

impl From<Enriched<Listing>> for TickerEntry {
    fn from(e: Enriched<Listing>) -> Self {
        match e {
            Enriched::Full { shallow, profile } => Self::Profile {
                listing: shallow,
                profile,
            },
            Enriched::Shallow(listing) => Self::Listing(listing),
        }
    }
}

impl StockScope {
    /// Fetch a profile for every record and join them in input order.
    ///
    /// Failures never reach the caller as an error: they are logged at `warn`,
    /// collected in `warnings`, and the record is dropped or kept shallow per
    /// `policy`. Under `KeepShallow` the report has exactly `items.len()`
    /// entries.
    #[tracing::instrument(
        target = "stockscope::router",
        skip(self, items),
        fields(count = items.len(), policy = ?policy),
    )]
    pub async fn enrich<T: Enrichable>(
        &self,
        items: &[T],
        policy: EnrichPolicy,
    ) -> EnrichReport<Enriched<T>> {
        let connector = &self.connector;
        let Some(provider) = connector.as_profile_provider() else {
            let err = ScopeError::unsupported(Capability::Profile.as_str());
            tracing::warn!(target: "stockscope::enrich", error = %err, "enrichment skipped");
            return match policy {
                EnrichPolicy::DropFailed => EnrichReport {
                    items: Vec::new(),
                    warnings: vec![err],
                },
                EnrichPolicy::KeepShallow => EnrichReport {
                    items: items.iter().cloned().map(Enriched::Shallow).collect(),
                    warnings: vec![err],
                },
            };
        };

        let tasks = items.iter().enumerate().map(|(idx, item)| async move {
            let res = self
                .call_with_timeout(Capability::Profile, provider.profile(item.symbol()))
                .await
                .map_err(|e| tag_err(connector.name(), e));
            (idx, res)
        });
        let mut settled = futures::future::join_all(tasks).await;
        settled.sort_by_key(|(idx, _)| *idx);

        let mut out = EnrichReport {
            items: Vec::with_capacity(items.len()),
            warnings: Vec::new(),
        };
        for (idx, res) in settled {
            let Some(item) = items.get(idx) else { continue };
            match res {
                Ok(profile) => out.items.push(Enriched::Full {
                    shallow: item.clone(),
                    profile,
                }),
                Err(e) => {
                    tracing::warn!(
                        target: "stockscope::enrich",
                        symbol = %item.symbol(),
                        error = %e,
                        "profile enrichment failed"
                    );
                    if policy == EnrichPolicy::KeepShallow {
                        out.items.push(Enriched::Shallow(item.clone()));
                    }
                    out.warnings.push(e);
                }
            }
        }
        out
    }
}
