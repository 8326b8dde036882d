//! Growth ratios
//!
//! Year-over-year percent change, each period measured against the next
//! older period. With periods most recent first, the oldest period never has
//! a growth figure.

use crate::ops::{Values, change_vs_older};
use crate::quantities::Quantities;

/// Revenue growth in percent.
pub fn revenue_growth(q: &Quantities) -> Values {
    change_vs_older(&q.revenue)
}

/// Net income growth in percent.
pub fn net_income_growth(q: &Quantities) -> Values {
    change_vs_older(&q.net_income)
}

/// Free cash flow growth in percent, on the resolved (possibly derived) series.
pub fn free_cash_flow_growth(q: &Quantities) -> Values {
    change_vs_older(&q.free_cash_flow)
}
