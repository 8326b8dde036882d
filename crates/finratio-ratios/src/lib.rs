#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finratio/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod chains;
pub mod derive;
pub mod growth;
pub mod leverage;
pub mod ops;
pub mod profitability;
pub mod quantities;
pub mod registry;
pub mod table;
pub mod valuation;

pub use chains::AliasChain;
pub use derive::{MAX_PERIODS, derive};
pub use quantities::Quantities;
pub use registry::{Ratio, RatioCategory, ratios_by_category};
pub use table::{RatioColumn, RatioError, RatioTable};
