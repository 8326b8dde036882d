#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/finratio/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod chart;
pub mod export;
pub mod format;
pub mod report;
pub mod svg;
pub mod text;

pub use chart::{ChartLabels, ChartPoint, ratio_series, render_terminal_chart};
pub use export::{ExportError, ExportFormat, Exporter};
pub use format::{format_amount, format_ratio};
pub use report::{AnalysisReport, ReportError};
pub use svg::render_svg_chart;
pub use text::{render_line_items, render_ratios};
