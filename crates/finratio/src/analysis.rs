//! The analysis pipeline: fetch, align, derive.

use finratio_data::yahoo::validate_symbol;
use finratio_data::{
    DataError, FinancialsProvider, LineItemTable, MarketSnapshot, Statement,
};
use finratio_output::AnalysisReport;
use finratio_ratios::{RatioTable, derive};
use thiserror::Error;
use tracing::{info, warn};

/// Analysis errors
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Fetching or parsing statements failed
    #[error("Data error: {0}")]
    Data(#[from] DataError),
}

/// Result type for analysis
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Statements and derived ratios for one company.
///
/// The statements are restricted to the periods of the ratio table.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Normalised ticker symbol
    pub symbol: String,
    /// Income statement
    pub income: LineItemTable,
    /// Balance sheet
    pub balance_sheet: LineItemTable,
    /// Cash flow statement
    pub cash_flow: LineItemTable,
    /// Derived ratios
    pub ratios: RatioTable,
}

impl Analysis {
    /// Turn the analysis into a timestamped report.
    pub fn into_report(self) -> AnalysisReport {
        AnalysisReport::new(
            self.symbol,
            self.income,
            self.balance_sheet,
            self.cash_flow,
            self.ratios,
        )
    }
}

/// Trim and uppercase a ticker, rejecting anything that is not a symbol.
pub fn normalize_symbol(identifier: &str) -> Result<String> {
    let symbol = identifier.trim().to_ascii_uppercase();
    validate_symbol(&symbol)?;
    Ok(symbol)
}

/// Analyse one company.
///
/// Returns `Ok(None)` when the provider has no statements for the symbol, or
/// the statements share no period. A failing snapshot does not fail the
/// analysis: market multiples are left absent instead.
pub async fn analyze<P: FinancialsProvider>(provider: &P, identifier: &str) -> Result<Option<Analysis>> {
    let symbol = normalize_symbol(identifier)?;
    info!(%symbol, "fetching statements");

    let income = provider.fetch_statement(&symbol, Statement::Income).await?;
    let balance_sheet = provider.fetch_statement(&symbol, Statement::BalanceSheet).await?;
    let cash_flow = provider.fetch_statement(&symbol, Statement::CashFlow).await?;

    if income.is_empty() || balance_sheet.is_empty() || cash_flow.is_empty() {
        info!(%symbol, "no financial data");
        return Ok(None);
    }

    let snapshot = match provider.fetch_snapshot(&symbol).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            warn!(%symbol, error = %e, "market snapshot unavailable, multiples will be absent");
            MarketSnapshot::new()
        }
    };

    let Some(ratios) = derive(&income, &balance_sheet, &cash_flow, &snapshot) else {
        info!(%symbol, "statements share no period");
        return Ok(None);
    };
    info!(%symbol, periods = ratios.len(), "derived ratios");

    let periods = ratios.periods().to_vec();
    Ok(Some(Analysis {
        symbol,
        income: income.select(&periods),
        balance_sheet: balance_sheet.select(&periods),
        cash_flow: cash_flow.select(&periods),
        ratios,
    }))
}
