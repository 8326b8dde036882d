//! The provider seam between the analysis pipeline and a data source.

use crate::error::{DataError, Result};
use crate::snapshot::MarketSnapshot;
use crate::statement::{LineItemTable, Statement};
use std::collections::HashMap;
use std::future::Future;

/// A source of financial statements and market snapshots, keyed by ticker.
///
/// An unknown symbol is not an error: providers return empty tables and let
/// the caller decide that nothing was found.
pub trait FinancialsProvider: Send + Sync {
    /// Fetch one statement for `symbol`, periods most recent first.
    fn fetch_statement(
        &self,
        symbol: &str,
        statement: Statement,
    ) -> impl Future<Output = Result<LineItemTable>> + Send;

    /// Fetch the current market snapshot for `symbol`.
    fn fetch_snapshot(&self, symbol: &str) -> impl Future<Output = Result<MarketSnapshot>> + Send;
}

/// Fixed data for one company.
#[derive(Debug, Clone)]
struct CompanyData {
    income: LineItemTable,
    balance_sheet: LineItemTable,
    cash_flow: LineItemTable,
    snapshot: MarketSnapshot,
}

/// Provider backed by tables held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    companies: HashMap<String, CompanyData>,
    failing_snapshots: bool,
}

impl InMemoryProvider {
    /// Create a provider with no companies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a company. The symbol is matched case-insensitively.
    pub fn with_company(
        mut self,
        symbol: &str,
        income: LineItemTable,
        balance_sheet: LineItemTable,
        cash_flow: LineItemTable,
        snapshot: MarketSnapshot,
    ) -> Self {
        self.companies.insert(
            symbol.to_uppercase(),
            CompanyData {
                income,
                balance_sheet,
                cash_flow,
                snapshot,
            },
        );
        self
    }

    /// Make every snapshot request fail, as an unreachable quote endpoint would.
    pub fn with_failing_snapshots(mut self) -> Self {
        self.failing_snapshots = true;
        self
    }
}

impl FinancialsProvider for InMemoryProvider {
    async fn fetch_statement(&self, symbol: &str, statement: Statement) -> Result<LineItemTable> {
        let table = self
            .companies
            .get(&symbol.to_uppercase())
            .map(|company| match statement {
                Statement::Income => company.income.clone(),
                Statement::BalanceSheet => company.balance_sheet.clone(),
                Statement::CashFlow => company.cash_flow.clone(),
            })
            .unwrap_or_else(|| LineItemTable::empty(statement));
        Ok(table)
    }

    async fn fetch_snapshot(&self, symbol: &str) -> Result<MarketSnapshot> {
        if self.failing_snapshots {
            return Err(DataError::YahooApi(format!(
                "quote summary unavailable for {symbol}"
            )));
        }
        Ok(self
            .companies
            .get(&symbol.to_uppercase())
            .map(|company| company.snapshot.clone())
            .unwrap_or_default())
    }
}
