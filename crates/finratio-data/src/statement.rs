//! Financial statement tables.
//!
//! A [`LineItemTable`] holds one statement as a list of named line items, each
//! carrying one optional value per [`Period`]. Periods are ordered most recent
//! first, which is also the order providers report them in.

use crate::error::{DataError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A fiscal period, identified by its end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Period(NaiveDate);

impl Period {
    /// Create a period ending on `date`.
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Create a period from a calendar date, returning `None` for invalid dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse an ISO `YYYY-MM-DD` date.
    pub fn parse(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| DataError::Parse(format!("invalid period date {s:?}: {e}")))
    }

    /// Period end date.
    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    /// Calendar year of the period end.
    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl From<NaiveDate> for Period {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// The three financial statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statement {
    /// Income statement
    Income,
    /// Balance sheet
    BalanceSheet,
    /// Cash flow statement
    CashFlow,
}

impl Statement {
    /// Human readable title.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Income => "Income Statement",
            Self::BalanceSheet => "Balance Sheet",
            Self::CashFlow => "Cash Flow",
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One named row of a statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Line item name, e.g. "Total Revenue"
    pub name: String,
    /// One value per period, aligned with the table's periods
    pub values: Vec<Option<f64>>,
}

/// A financial statement: line item name to per-period values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemTable {
    statement: Statement,
    periods: Vec<Period>,
    items: Vec<LineItem>,
}

impl LineItemTable {
    /// Create a table with no periods and no line items.
    pub const fn empty(statement: Statement) -> Self {
        Self {
            statement,
            periods: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Create a table over `periods`, which must be ordered most recent first.
    pub const fn new(statement: Statement, periods: Vec<Period>) -> Self {
        Self {
            statement,
            periods,
            items: Vec::new(),
        }
    }

    /// Build a table from sparse observations.
    ///
    /// The period axis is the union of all observed dates, most recent first.
    /// Rows keep their input order; rows without any observation are dropped.
    pub fn from_observations(statement: Statement, rows: Vec<(String, Vec<(Period, f64)>)>) -> Self {
        let periods: Vec<Period> = rows
            .iter()
            .flat_map(|(_, obs)| obs.iter().map(|(p, _)| *p))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .rev()
            .collect();

        let items = rows
            .into_iter()
            .filter(|(_, obs)| !obs.is_empty())
            .map(|(name, obs)| {
                let by_period: BTreeMap<Period, f64> = obs.into_iter().collect();
                let values = periods.iter().map(|p| by_period.get(p).copied()).collect();
                LineItem { name, values }
            })
            .collect();

        Self {
            statement,
            periods,
            items,
        }
    }

    /// Add a line item, replacing any existing item with the same name.
    pub fn push_item(&mut self, name: impl Into<String>, values: Vec<Option<f64>>) -> Result<()> {
        let name = name.into();
        if values.len() != self.periods.len() {
            return Err(DataError::ShapeMismatch {
                name,
                expected: self.periods.len(),
                actual: values.len(),
            });
        }

        if let Some(existing) = self.items.iter_mut().find(|item| item.name == name) {
            existing.values = values;
        } else {
            self.items.push(LineItem { name, values });
        }
        Ok(())
    }

    /// Builder form of [`push_item`](Self::push_item).
    pub fn with_item(mut self, name: impl Into<String>, values: Vec<Option<f64>>) -> Result<Self> {
        self.push_item(name, values)?;
        Ok(self)
    }

    /// Which statement this table holds.
    pub const fn statement(&self) -> Statement {
        self.statement
    }

    /// Periods, most recent first.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Line items in table order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// True when the table has no periods or no line items.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty() || self.items.is_empty()
    }

    /// Whether a line item with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    /// Values for a line item, aligned with [`periods`](Self::periods).
    pub fn get(&self, name: &str) -> Option<&[Option<f64>]> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.values.as_slice())
    }

    /// Single value lookup.
    pub fn value(&self, name: &str, period: Period) -> Option<f64> {
        let idx = self.periods.iter().position(|p| *p == period)?;
        self.get(name).and_then(|values| values[idx])
    }

    /// Reindex the table onto `periods`. Periods the table lacks come back absent.
    pub fn select(&self, periods: &[Period]) -> Self {
        let positions: Vec<Option<usize>> = periods
            .iter()
            .map(|p| self.periods.iter().position(|own| own == p))
            .collect();

        let items = self
            .items
            .iter()
            .map(|item| LineItem {
                name: item.name.clone(),
                values: positions
                    .iter()
                    .map(|pos| pos.and_then(|i| item.values[i]))
                    .collect(),
            })
            .collect();

        Self {
            statement: self.statement,
            periods: periods.to_vec(),
            items,
        }
    }
}

/// Periods present in every table, most recent first, truncated to `limit`.
pub fn common_periods(tables: &[&LineItemTable], limit: usize) -> Vec<Period> {
    let Some((first, rest)) = tables.split_first() else {
        return Vec::new();
    };

    let mut periods: Vec<Period> = first
        .periods()
        .iter()
        .copied()
        .filter(|p| rest.iter().all(|t| t.periods().contains(p)))
        .collect();
    periods.sort_unstable_by(|a, b| b.cmp(a));
    periods.truncate(limit);
    periods
}
