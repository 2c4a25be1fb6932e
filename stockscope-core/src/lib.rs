//! stockscope-core
//!
//! Core types, traits, and utilities shared across the stockscope crates.
//!
//! - `types`: the market data model, configuration, and error type.
//! - `connector`: the `ScopeConnector` trait and its capability provider traits.
//! - `timeseries`: helpers that shape price history for charting.
#![warn(missing_docs)]

/// Connector capability traits and the primary `ScopeConnector` interface.
pub mod connector;
/// Time-series utilities for ordering and windowing price history.
pub mod timeseries;
pub mod types;

pub use connector::ScopeConnector;
pub use timeseries::window::latest_window;
pub use types::*;
