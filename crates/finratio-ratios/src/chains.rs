//! Alias fallback chains for line item lookup.
//!
//! Different companies, and even the same company across filings, report the
//! same concept under different line item names. A chain lists the accepted
//! names in priority order; the first one present in the table wins.

use crate::ops::Values;
use finratio_data::{LineItemTable, Statement};

/// Ordered candidate names for one financial quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasChain {
    /// Quantity being resolved, e.g. "revenue"
    pub quantity: &'static str,
    /// Statement the quantity lives in
    pub statement: Statement,
    /// Accepted line item names, highest priority first
    pub aliases: &'static [&'static str],
}

impl AliasChain {
    /// Define a chain.
    pub const fn new(
        quantity: &'static str,
        statement: Statement,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            quantity,
            statement,
            aliases,
        }
    }

    /// First alias present in the table, if any.
    ///
    /// Presence is about the line item existing, not about it having values: a
    /// present primary alias whose values are all absent still wins.
    pub fn matched_alias(&self, table: &LineItemTable) -> Option<&'static str> {
        self.aliases.iter().copied().find(|alias| table.contains(alias))
    }

    /// Values of the first present alias, or absent for every period.
    pub fn resolve(&self, table: &LineItemTable) -> Values {
        self.matched_alias(table)
            .and_then(|alias| table.get(alias))
            .map_or_else(|| vec![None; table.periods().len()], <[_]>::to_vec)
    }
}

/// Revenue.
pub const REVENUE: AliasChain =
    AliasChain::new("revenue", Statement::Income, &["Total Revenue", "Operating Revenue"]);

/// Earnings before interest and taxes.
pub const EBIT: AliasChain = AliasChain::new("ebit", Statement::Income, &["EBIT", "Operating Income"]);

/// Net income.
pub const NET_INCOME: AliasChain = AliasChain::new(
    "net income",
    Statement::Income,
    &["Net Income", "Net Income Common Stockholders"],
);

/// Total assets.
pub const TOTAL_ASSETS: AliasChain =
    AliasChain::new("total assets", Statement::BalanceSheet, &["Total Assets"]);

/// Total liabilities.
pub const TOTAL_LIABILITIES: AliasChain = AliasChain::new(
    "total liabilities",
    Statement::BalanceSheet,
    &["Total Liabilities Net Minority Interest"],
);

/// Shareholders' equity.
pub const EQUITY: AliasChain = AliasChain::new(
    "equity",
    Statement::BalanceSheet,
    &["Stockholders Equity", "Common Stock Equity"],
);

/// Current assets.
pub const CURRENT_ASSETS: AliasChain =
    AliasChain::new("current assets", Statement::BalanceSheet, &["Current Assets"]);

/// Current liabilities.
pub const CURRENT_LIABILITIES: AliasChain = AliasChain::new(
    "current liabilities",
    Statement::BalanceSheet,
    &["Current Liabilities"],
);

/// Operating cash flow.
pub const OPERATING_CASH_FLOW: AliasChain = AliasChain::new(
    "operating cash flow",
    Statement::CashFlow,
    &[
        "Operating Cash Flow",
        "Cash Flow From Continuing Operating Activities",
    ],
);

/// Capital expenditure, reported as a negative outflow.
pub const CAPITAL_EXPENDITURE: AliasChain = AliasChain::new(
    "capital expenditure",
    Statement::CashFlow,
    &["Capital Expenditure", "Purchase Of PPE"],
);

/// Reported free cash flow.
pub const FREE_CASH_FLOW: AliasChain =
    AliasChain::new("free cash flow", Statement::CashFlow, &["Free Cash Flow"]);
