//! Named financial quantities resolved from the three statements.

use crate::chains::{self, AliasChain};
use crate::ops::{self, Values};
use finratio_data::LineItemTable;
use tracing::debug;

/// Every quantity the ratios need, one value per period.
///
/// All sequences have the same length as the period axis of the tables they
/// were resolved from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Quantities {
    /// Total revenue
    pub revenue: Values,
    /// Earnings before interest and taxes
    pub ebit: Values,
    /// Net income
    pub net_income: Values,
    /// Total assets
    pub total_assets: Values,
    /// Total liabilities
    pub total_liabilities: Values,
    /// Shareholders' equity
    pub equity: Values,
    /// Current assets
    pub current_assets: Values,
    /// Current liabilities
    pub current_liabilities: Values,
    /// Operating cash flow
    pub operating_cash_flow: Values,
    /// Capital expenditure (negative for outflows)
    pub capital_expenditure: Values,
    /// Free cash flow, reported or derived
    pub free_cash_flow: Values,
    /// True when free cash flow was derived as operating cash flow plus capex
    pub free_cash_flow_derived: bool,
}

impl Quantities {
    /// Resolve every quantity from tables that share one period axis.
    ///
    /// When reported free cash flow is absent in every period it is replaced
    /// by `operating cash flow + capital expenditure`.
    pub fn resolve(
        income: &LineItemTable,
        balance_sheet: &LineItemTable,
        cash_flow: &LineItemTable,
    ) -> Self {
        let lookup = |chain: &AliasChain, table: &LineItemTable| {
            if chain.matched_alias(table).is_none() {
                debug!(quantity = chain.quantity, "no alias present, quantity absent");
            }
            chain.resolve(table)
        };

        let operating_cash_flow = lookup(&chains::OPERATING_CASH_FLOW, cash_flow);
        let capital_expenditure = lookup(&chains::CAPITAL_EXPENDITURE, cash_flow);
        let reported_fcf = lookup(&chains::FREE_CASH_FLOW, cash_flow);

        let free_cash_flow_derived = ops::all_absent(&reported_fcf);
        let free_cash_flow = if free_cash_flow_derived {
            ops::add(&operating_cash_flow, &capital_expenditure)
        } else {
            reported_fcf
        };

        Self {
            revenue: lookup(&chains::REVENUE, income),
            ebit: lookup(&chains::EBIT, income),
            net_income: lookup(&chains::NET_INCOME, income),
            total_assets: lookup(&chains::TOTAL_ASSETS, balance_sheet),
            total_liabilities: lookup(&chains::TOTAL_LIABILITIES, balance_sheet),
            equity: lookup(&chains::EQUITY, balance_sheet),
            current_assets: lookup(&chains::CURRENT_ASSETS, balance_sheet),
            current_liabilities: lookup(&chains::CURRENT_LIABILITIES, balance_sheet),
            operating_cash_flow,
            capital_expenditure,
            free_cash_flow,
            free_cash_flow_derived,
        }
    }

    /// Number of periods.
    pub fn len(&self) -> usize {
        self.revenue.len()
    }

    /// True when there are no periods.
    pub fn is_empty(&self) -> bool {
        self.revenue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finratio_data::{Period, Statement};

    fn periods() -> Vec<Period> {
        vec![
            Period::from_ymd(2024, 6, 30).unwrap(),
            Period::from_ymd(2023, 6, 30).unwrap(),
        ]
    }

    fn cash_flow(items: &[(&str, [Option<f64>; 2])]) -> LineItemTable {
        let mut table = LineItemTable::new(Statement::CashFlow, periods());
        for (name, values) in items {
            table.push_item(*name, values.to_vec()).unwrap();
        }
        table
    }

    fn resolve(cf: &LineItemTable) -> Quantities {
        Quantities::resolve(
            &LineItemTable::new(Statement::Income, periods()),
            &LineItemTable::new(Statement::BalanceSheet, periods()),
            cf,
        )
    }

    #[test]
    fn test_reported_free_cash_flow_used() {
        let q = resolve(&cash_flow(&[
            ("Free Cash Flow", [Some(7.0), None]),
            ("Operating Cash Flow", [Some(60.0), Some(40.0)]),
            ("Capital Expenditure", [Some(-10.0), Some(-5.0)]),
        ]));
        assert!(!q.free_cash_flow_derived);
        assert_eq!(q.free_cash_flow, vec![Some(7.0), None]);
    }

    #[test]
    fn test_free_cash_flow_fallback() {
        let q = resolve(&cash_flow(&[
            ("Free Cash Flow", [None, None]),
            ("Cash Flow From Continuing Operating Activities", [Some(60.0), Some(40.0)]),
            ("Purchase Of PPE", [Some(-10.0), None]),
        ]));
        assert!(q.free_cash_flow_derived);
        assert_eq!(q.free_cash_flow, vec![Some(50.0), None]);
    }

    #[test]
    fn test_missing_quantities_are_absent() {
        let q = resolve(&cash_flow(&[]));
        assert_eq!(q.len(), 2);
        assert_eq!(q.revenue, vec![None, None]);
        assert_eq!(q.equity, vec![None, None]);
        assert_eq!(q.free_cash_flow, vec![None, None]);
        assert!(q.free_cash_flow_derived);
    }
}
