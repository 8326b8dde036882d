//! Analysis reports.

use crate::chart::{ChartLabels, ratio_series, render_terminal_chart};
use crate::text::{render_line_items, render_ratios};
use chrono::{DateTime, Utc};
use finratio_data::{LineItemTable, Period};
use finratio_ratios::{Ratio, RatioTable};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Everything produced for one company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Ticker symbol, uppercase.
    pub symbol: String,

    /// Report generation timestamp.
    pub generated_at: DateTime<Utc>,

    /// Periods covered by the ratio table, most recent first.
    pub periods: Vec<Period>,

    /// Income statement restricted to the analysed periods.
    pub income: LineItemTable,

    /// Balance sheet restricted to the analysed periods.
    pub balance_sheet: LineItemTable,

    /// Cash flow statement restricted to the analysed periods.
    pub cash_flow: LineItemTable,

    /// Derived ratios.
    pub ratios: RatioTable,
}

impl AnalysisReport {
    /// Create a report stamped with the current time.
    pub fn new(
        symbol: impl Into<String>,
        income: LineItemTable,
        balance_sheet: LineItemTable,
        cash_flow: LineItemTable,
        ratios: RatioTable,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            generated_at: Utc::now(),
            periods: ratios.periods().to_vec(),
            income,
            balance_sheet,
            cash_flow,
            ratios,
        }
    }

    /// Convert report to JSON string.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Text rendering: the three statements, the ratio table and, optionally,
    /// one chart per ratio.
    pub fn to_text(&self, charts: bool) -> String {
        let mut output = format!("\nFinancial analysis: {}\n", self.symbol);
        for table in [&self.income, &self.balance_sheet, &self.cash_flow] {
            output.push_str(&render_line_items(table));
        }
        output.push_str(&render_ratios(&self.ratios));

        if charts {
            output.push_str("\nTrends over Time\n");
            for ratio in Ratio::ALL {
                output.push_str(&render_terminal_chart(
                    &ChartLabels::for_ratio(ratio, &self.symbol),
                    &ratio_series(&self.ratios, ratio),
                ));
            }
        }
        output
    }
}
