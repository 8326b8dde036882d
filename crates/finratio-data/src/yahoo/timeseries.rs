//! Annual statement data from the Yahoo Finance fundamentals-timeseries API.
//!
//! The endpoint reports each line item as its own series keyed by a
//! camel-case type such as `annualTotalRevenue`. Parsing turns those series
//! into a [`LineItemTable`] with display names ("Total Revenue").

use crate::error::{DataError, Result};
use crate::statement::{LineItemTable, Period, Statement};
use serde::Deserialize;
use std::collections::HashMap;

/// Prefix Yahoo puts in front of annual series types.
pub const ANNUAL_PREFIX: &str = "annual";

const INCOME_KEYS: &[&str] = &[
    "TotalRevenue",
    "OperatingRevenue",
    "CostOfRevenue",
    "GrossProfit",
    "ResearchAndDevelopment",
    "SellingGeneralAndAdministration",
    "OperatingExpense",
    "OperatingIncome",
    "EBIT",
    "EBITDA",
    "InterestExpense",
    "PretaxIncome",
    "TaxProvision",
    "NetIncome",
    "NetIncomeCommonStockholders",
    "BasicEPS",
    "DilutedEPS",
    "BasicAverageShares",
    "DilutedAverageShares",
];

const BALANCE_SHEET_KEYS: &[&str] = &[
    "TotalAssets",
    "CurrentAssets",
    "CashAndCashEquivalents",
    "AccountsReceivable",
    "Inventory",
    "TotalNonCurrentAssets",
    "NetPPE",
    "Goodwill",
    "TotalLiabilitiesNetMinorityInterest",
    "CurrentLiabilities",
    "AccountsPayable",
    "LongTermDebt",
    "TotalDebt",
    "NetDebt",
    "StockholdersEquity",
    "CommonStockEquity",
    "RetainedEarnings",
    "WorkingCapital",
    "ShareIssued",
];

const CASH_FLOW_KEYS: &[&str] = &[
    "OperatingCashFlow",
    "CashFlowFromContinuingOperatingActivities",
    "DepreciationAndAmortization",
    "StockBasedCompensation",
    "ChangeInWorkingCapital",
    "CapitalExpenditure",
    "PurchaseOfPPE",
    "FreeCashFlow",
    "InvestingCashFlow",
    "FinancingCashFlow",
    "CashDividendsPaid",
    "RepurchaseOfCapitalStock",
    "EndCashPosition",
];

/// Yahoo series keys requested for a statement, in display order.
pub const fn statement_keys(statement: Statement) -> &'static [&'static str] {
    match statement {
        Statement::Income => INCOME_KEYS,
        Statement::BalanceSheet => BALANCE_SHEET_KEYS,
        Statement::CashFlow => CASH_FLOW_KEYS,
    }
}

/// Turn a camel-case key into a spaced title.
///
/// A space goes before an uppercase letter that follows a lowercase letter or
/// digit, and before the last capital of an acronym that starts a new word:
/// `PurchaseOfPPE` becomes "Purchase Of PPE", `EBIT` stays "EBIT".
pub fn camel_to_title(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut title = String::with_capacity(key.len() + 8);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                title.push(' ');
            }
        }
        title.push(c);
    }
    title
}

#[derive(Debug, Deserialize)]
struct TimeseriesEnvelope {
    timeseries: TimeseriesBody,
}

#[derive(Debug, Deserialize)]
struct TimeseriesBody {
    #[serde(default)]
    result: Option<Vec<TimeseriesResult>>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct TimeseriesResult {
    meta: TimeseriesMeta,
    #[serde(flatten)]
    series: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct TimeseriesMeta {
    #[serde(rename = "type", default)]
    kind: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DataPoint {
    as_of_date: String,
    #[serde(default)]
    reported_value: Option<ReportedValue>,
}

#[derive(Debug, Deserialize)]
struct ReportedValue {
    #[serde(default)]
    raw: Option<f64>,
}

/// Parse a fundamentals-timeseries response body into a statement table.
///
/// `keys` are the unprefixed series keys that were requested; they fix the
/// row order. Series the response does not carry are left out.
pub fn parse_timeseries(statement: Statement, keys: &[&str], body: &str) -> Result<LineItemTable> {
    let envelope: TimeseriesEnvelope = serde_json::from_str(body)?;

    let results = match (envelope.timeseries.result, envelope.timeseries.error) {
        (Some(results), _) => results,
        (None, Some(error)) if !error.is_null() => {
            return Err(DataError::YahooApi(error.to_string()));
        }
        (None, _) => Vec::new(),
    };

    let mut observations: HashMap<String, Vec<(Period, f64)>> = HashMap::new();
    for result in results {
        let Some(kind) = result.meta.kind.into_iter().next() else {
            continue;
        };
        let Some(raw_points) = result.series.get(&kind) else {
            continue;
        };

        let points: Vec<Option<DataPoint>> = serde_json::from_value(raw_points.clone())?;
        let key = kind.strip_prefix(ANNUAL_PREFIX).unwrap_or(kind.as_str()).to_string();
        let entry = observations.entry(key).or_default();

        for point in points.into_iter().flatten() {
            let Some(value) = point.reported_value.and_then(|v| v.raw) else {
                continue;
            };
            if value.is_finite() {
                entry.push((Period::parse(&point.as_of_date)?, value));
            }
        }
    }

    let rows = keys
        .iter()
        .filter_map(|key| {
            observations
                .remove(*key)
                .map(|obs| (camel_to_title(key), obs))
        })
        .collect();

    Ok(LineItemTable::from_observations(statement, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("TotalRevenue", "Total Revenue")]
    #[case("EBIT", "EBIT")]
    #[case("PurchaseOfPPE", "Purchase Of PPE")]
    #[case("NetPPE", "Net PPE")]
    #[case("DilutedEPS", "Diluted EPS")]
    #[case("TotalLiabilitiesNetMinorityInterest", "Total Liabilities Net Minority Interest")]
    #[case(
        "CashFlowFromContinuingOperatingActivities",
        "Cash Flow From Continuing Operating Activities"
    )]
    fn test_camel_to_title(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(camel_to_title(key), expected);
    }

    #[test]
    fn test_statement_keys_cover_alias_sources() {
        assert!(statement_keys(Statement::Income).contains(&"NetIncomeCommonStockholders"));
        assert!(statement_keys(Statement::BalanceSheet).contains(&"CommonStockEquity"));
        assert!(statement_keys(Statement::CashFlow).contains(&"PurchaseOfPPE"));
    }

    #[test]
    fn test_error_body() {
        let body = r#"{"timeseries":{"result":null,"error":{"code":"Bad Request","description":"Invalid type"}}}"#;
        let err = parse_timeseries(Statement::Income, INCOME_KEYS, body).unwrap_err();
        assert!(matches!(err, DataError::YahooApi(msg) if msg.contains("Invalid type")));
    }

    #[test]
    fn test_result_without_values_is_empty() {
        let body = r#"{"timeseries":{"result":[{"meta":{"symbol":["ZZZZ"],"type":["annualTotalRevenue"]}}],"error":null}}"#;
        let table = parse_timeseries(Statement::Income, INCOME_KEYS, body).unwrap();
        assert!(table.is_empty());
    }
}
