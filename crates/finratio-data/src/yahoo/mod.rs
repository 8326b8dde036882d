//! Yahoo Finance data provider.
//!
//! Statements come from the fundamentals-timeseries API and the market
//! snapshot from quoteSummary. The timeseries parser is public so it can be
//! exercised against recorded responses.

pub mod client;
pub mod quote_summary;
pub mod timeseries;

pub use client::{ProviderConfig, YahooProvider, validate_symbol};
pub use quote_summary::SnapshotMultiples;
pub use timeseries::{camel_to_title, parse_timeseries, statement_keys};
