//! Balance sheet strength: leverage and liquidity ratios.

use crate::ops::{Values, divide};
use crate::quantities::Quantities;

/// Total liabilities over shareholders' equity.
pub fn debt_to_equity(q: &Quantities) -> Values {
    divide(&q.total_liabilities, &q.equity)
}

/// Current assets over current liabilities.
pub fn current_ratio(q: &Quantities) -> Values {
    divide(&q.current_assets, &q.current_liabilities)
}
