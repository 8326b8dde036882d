#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finratio/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analysis;

// Re-export main types from sub-crates
pub use finratio_data as data;
pub use finratio_output as output;
pub use finratio_ratios as ratios;

pub use analysis::{Analysis, AnalysisError, Result, analyze, normalize_symbol};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
