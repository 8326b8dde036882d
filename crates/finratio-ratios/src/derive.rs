//! Ratio derivation
//!
//! Resolve every quantity once into [`Quantities`], compute each ratio as a
//! pure function of it, then assemble the [`RatioTable`].

use crate::growth;
use crate::leverage;
use crate::ops::Values;
use crate::profitability;
use crate::quantities::Quantities;
use crate::registry::Ratio;
use crate::table::{RatioColumn, RatioTable};
use crate::valuation::most_recent_only;
use finratio_data::snapshot::keys;
use finratio_data::{LineItemTable, MarketSnapshot, common_periods};
use tracing::{debug, warn};

/// Maximum number of periods kept, most recent first.
pub const MAX_PERIODS: usize = 5;

/// Derive the ratio table for one company.
///
/// Returns `None` when any statement is empty or the statements share no
/// period. Otherwise the table covers the most recent [`MAX_PERIODS`] periods
/// common to all three statements; missing inputs show up as absent values.
pub fn derive(
    income: &LineItemTable,
    balance_sheet: &LineItemTable,
    cash_flow: &LineItemTable,
    snapshot: &MarketSnapshot,
) -> Option<RatioTable> {
    if income.is_empty() || balance_sheet.is_empty() || cash_flow.is_empty() {
        debug!("at least one statement is empty, nothing to derive");
        return None;
    }

    let periods = common_periods(&[income, balance_sheet, cash_flow], MAX_PERIODS);
    if periods.is_empty() {
        debug!("statements share no period");
        return None;
    }

    let quantities = Quantities::resolve(
        &income.select(&periods),
        &balance_sheet.select(&periods),
        &cash_flow.select(&periods),
    );
    if quantities.free_cash_flow_derived {
        debug!("free cash flow not reported, derived from operating cash flow and capex");
    }

    let columns = Ratio::ALL
        .into_iter()
        .map(|ratio| RatioColumn {
            ratio,
            values: compute(ratio, &quantities, snapshot),
        })
        .collect();

    RatioTable::from_columns(periods, columns)
        .inspect_err(|e| warn!(error = %e, "ratio table assembly failed"))
        .ok()
}

/// Values of one ratio.
fn compute(ratio: Ratio, q: &Quantities, snapshot: &MarketSnapshot) -> Values {
    let n = q.len();
    match ratio {
        Ratio::OperatingMargin => profitability::operating_margin(q),
        Ratio::NetMargin => profitability::net_margin(q),
        Ratio::ReturnOnEquity => profitability::return_on_equity(q),
        Ratio::ReturnOnAssets => profitability::return_on_assets(q),
        Ratio::DebtToEquity => leverage::debt_to_equity(q),
        Ratio::CurrentRatio => leverage::current_ratio(q),
        Ratio::FreeCashFlow => q.free_cash_flow.clone(),
        Ratio::RevenueGrowth => growth::revenue_growth(q),
        Ratio::NetIncomeGrowth => growth::net_income_growth(q),
        Ratio::FcfGrowth => growth::free_cash_flow_growth(q),
        Ratio::PriceToEarnings => most_recent_only(snapshot, keys::TRAILING_PE, n),
        Ratio::EvToEbitda => most_recent_only(snapshot, keys::ENTERPRISE_TO_EBITDA, n),
        Ratio::PriceToSales => most_recent_only(snapshot, keys::PRICE_TO_SALES, n),
        Ratio::PriceToBook => most_recent_only(snapshot, keys::PRICE_TO_BOOK, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use finratio_data::{Period, Statement};

    fn years(years: &[i32]) -> Vec<Period> {
        years
            .iter()
            .map(|y| Period::from_ymd(*y, 12, 31).unwrap())
            .collect()
    }

    fn table(statement: Statement, periods: Vec<Period>, items: &[(&str, Values)]) -> LineItemTable {
        let mut table = LineItemTable::new(statement, periods);
        for (name, values) in items {
            table.push_item(*name, values.clone()).unwrap();
        }
        table
    }

    #[test]
    fn test_empty_statement_is_no_data() {
        let p = years(&[2024]);
        let income = table(Statement::Income, p.clone(), &[("Total Revenue", vec![Some(1.0)])]);
        let balance = LineItemTable::empty(Statement::BalanceSheet);
        let cash_flow = table(Statement::CashFlow, p, &[("Free Cash Flow", vec![Some(1.0)])]);

        assert!(derive(&income, &balance, &cash_flow, &MarketSnapshot::new()).is_none());
    }

    #[test]
    fn test_disjoint_periods_is_no_data() {
        let income = table(Statement::Income, years(&[2024]), &[("EBIT", vec![Some(1.0)])]);
        let balance = table(Statement::BalanceSheet, years(&[2023]), &[("Total Assets", vec![Some(1.0)])]);
        let cash_flow = table(Statement::CashFlow, years(&[2024]), &[("Free Cash Flow", vec![Some(1.0)])]);

        assert!(derive(&income, &balance, &cash_flow, &MarketSnapshot::new()).is_none());
    }

    #[test]
    fn test_keeps_five_most_recent_common_periods() {
        let all = years(&[2024, 2023, 2022, 2021, 2020, 2019, 2018]);
        let revenue: Values = (0..7).map(|i| Some(100.0 - f64::from(i) * 10.0)).collect();
        let income = table(Statement::Income, all.clone(), &[("Total Revenue", revenue)]);
        // Balance sheet is missing 2024
        let balance = table(
            Statement::BalanceSheet,
            all[1..].to_vec(),
            &[("Total Assets", vec![Some(1.0); 6])],
        );
        let cash_flow = table(Statement::CashFlow, all, &[("Free Cash Flow", vec![Some(1.0); 7])]);

        let ratios = derive(&income, &balance, &cash_flow, &MarketSnapshot::new()).unwrap();
        assert_eq!(ratios.periods(), years(&[2023, 2022, 2021, 2020, 2019]).as_slice());

        // 2023 revenue 90 against 2022 revenue 80
        let growth = ratios.column(Ratio::RevenueGrowth).unwrap();
        assert_relative_eq!(growth[0].unwrap(), 12.5);
        // 2019 is the oldest kept period, so it has no growth figure
        assert_eq!(growth[4], None);
    }

    #[test]
    fn test_market_multiples_on_most_recent_row_only() {
        let p = years(&[2024, 2023, 2022]);
        let income = table(Statement::Income, p.clone(), &[("Total Revenue", vec![Some(1.0); 3])]);
        let balance = table(Statement::BalanceSheet, p.clone(), &[("Total Assets", vec![Some(1.0); 3])]);
        let cash_flow = table(Statement::CashFlow, p, &[("Free Cash Flow", vec![Some(1.0); 3])]);
        let snapshot = MarketSnapshot::new()
            .with(keys::TRAILING_PE, 28.4)
            .with(keys::PRICE_TO_BOOK, 6.1);

        let ratios = derive(&income, &balance, &cash_flow, &snapshot).unwrap();
        assert_eq!(
            ratios.column(Ratio::PriceToEarnings).unwrap(),
            &[Some(28.4), None, None]
        );
        assert_eq!(ratios.column(Ratio::PriceToBook).unwrap(), &[Some(6.1), None, None]);
        assert_eq!(ratios.column(Ratio::EvToEbitda).unwrap(), &[None, None, None]);
        assert_eq!(ratios.column(Ratio::PriceToSales).unwrap(), &[None, None, None]);
    }

    #[test]
    fn test_columns_follow_registry_order() {
        let p = years(&[2024]);
        let income = table(Statement::Income, p.clone(), &[("Total Revenue", vec![Some(1.0)])]);
        let balance = table(Statement::BalanceSheet, p.clone(), &[("Total Assets", vec![Some(1.0)])]);
        let cash_flow = table(Statement::CashFlow, p, &[("Free Cash Flow", vec![Some(1.0)])]);

        let ratios = derive(&income, &balance, &cash_flow, &MarketSnapshot::new()).unwrap();
        let order: Vec<Ratio> = ratios.columns().iter().map(|c| c.ratio).collect();
        assert_eq!(order, Ratio::ALL.to_vec());
    }
}
