#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finratio/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod provider;
pub mod snapshot;
pub mod statement;
pub mod yahoo;

pub use error::{DataError, Result};
pub use provider::{FinancialsProvider, InMemoryProvider};
pub use snapshot::MarketSnapshot;
pub use statement::{LineItem, LineItemTable, Period, Statement, common_periods};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
