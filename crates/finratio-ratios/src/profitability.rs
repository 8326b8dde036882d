//! Profitability ratios
//!
//! Margins relate earnings to revenue; returns relate net income to the
//! capital base (equity or assets). All are expressed in percent.

use crate::ops::{Values, percent};
use crate::quantities::Quantities;

/// EBIT as a percentage of revenue.
pub fn operating_margin(q: &Quantities) -> Values {
    percent(&q.ebit, &q.revenue)
}

/// Net income as a percentage of revenue.
pub fn net_margin(q: &Quantities) -> Values {
    percent(&q.net_income, &q.revenue)
}

/// Return on equity: net income over shareholders' equity.
///
/// Negative equity is not filtered; the sign flows into the ratio.
pub fn return_on_equity(q: &Quantities) -> Values {
    percent(&q.net_income, &q.equity)
}

/// Return on assets: net income over total assets.
pub fn return_on_assets(q: &Quantities) -> Values {
    percent(&q.net_income, &q.total_assets)
}
