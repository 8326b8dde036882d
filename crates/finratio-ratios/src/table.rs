//! The ratio table: one row per period, one column per ratio.

use crate::ops::Values;
use crate::registry::Ratio;
use finratio_data::Period;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ratio table construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RatioError {
    /// A column does not have one value per period
    #[error("Column {ratio} has {actual} values, expected {expected}")]
    ShapeMismatch {
        /// Offending column
        ratio: Ratio,
        /// Number of periods
        expected: usize,
        /// Number of values supplied
        actual: usize,
    },

    /// The same ratio was supplied twice
    #[error("Duplicate column: {0}")]
    DuplicateColumn(Ratio),
}

/// Values of one ratio, aligned with the table's periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioColumn {
    /// Ratio the column holds
    pub ratio: Ratio,
    /// One value per period, most recent first
    pub values: Values,
}

/// Derived ratios over a set of periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioTable {
    periods: Vec<Period>,
    columns: Vec<RatioColumn>,
}

impl RatioTable {
    /// Assemble a table, checking every column against the period axis.
    pub fn from_columns(periods: Vec<Period>, columns: Vec<RatioColumn>) -> Result<Self, RatioError> {
        for (i, column) in columns.iter().enumerate() {
            if column.values.len() != periods.len() {
                return Err(RatioError::ShapeMismatch {
                    ratio: column.ratio,
                    expected: periods.len(),
                    actual: column.values.len(),
                });
            }
            if columns[..i].iter().any(|c| c.ratio == column.ratio) {
                return Err(RatioError::DuplicateColumn(column.ratio));
            }
        }
        Ok(Self { periods, columns })
    }

    /// Periods, most recent first.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Columns in order.
    pub fn columns(&self) -> &[RatioColumn] {
        &self.columns
    }

    /// Values of one ratio.
    pub fn column(&self, ratio: Ratio) -> Option<&[Option<f64>]> {
        self.columns
            .iter()
            .find(|c| c.ratio == ratio)
            .map(|c| c.values.as_slice())
    }

    /// One cell. `None` when the period or ratio is unknown, or the value is absent.
    pub fn get(&self, period: Period, ratio: Ratio) -> Option<f64> {
        let row = self.periods.iter().position(|p| *p == period)?;
        self.column(ratio)?.get(row).copied().flatten()
    }

    /// Every ratio value for one period, in column order.
    pub fn row(&self, period: Period) -> Option<Vec<(Ratio, Option<f64>)>> {
        let row = self.periods.iter().position(|p| *p == period)?;
        Some(
            self.columns
                .iter()
                .map(|c| (c.ratio, c.values[row]))
                .collect(),
        )
    }

    /// Number of periods.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// True when there are no periods.
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn periods() -> Vec<Period> {
        vec![
            Period::from_ymd(2024, 12, 31).unwrap(),
            Period::from_ymd(2023, 12, 31).unwrap(),
        ]
    }

    fn column(ratio: Ratio, values: Values) -> RatioColumn {
        RatioColumn { ratio, values }
    }

    #[test]
    fn test_lookup() {
        let table = RatioTable::from_columns(
            periods(),
            vec![
                column(Ratio::CurrentRatio, vec![Some(1.2), None]),
                column(Ratio::PriceToBook, vec![Some(4.0), None]),
            ],
        )
        .unwrap();

        let latest = periods()[0];
        let older = periods()[1];
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(latest, Ratio::CurrentRatio), Some(1.2));
        assert_eq!(table.get(older, Ratio::CurrentRatio), None);
        assert_eq!(table.get(latest, Ratio::NetMargin), None);
        assert_eq!(
            table.row(older),
            Some(vec![(Ratio::CurrentRatio, None), (Ratio::PriceToBook, None)])
        );
        assert!(table.row(Period::from_ymd(2020, 12, 31).unwrap()).is_none());
    }

    #[test]
    fn test_shape_mismatch() {
        let err = RatioTable::from_columns(periods(), vec![column(Ratio::NetMargin, vec![Some(1.0)])])
            .unwrap_err();
        assert_eq!(
            err,
            RatioError::ShapeMismatch {
                ratio: Ratio::NetMargin,
                expected: 2,
                actual: 1
            }
        );
        assert_eq!(err.to_string(), "Column Net Margin (%) has 1 values, expected 2");
    }

    #[test]
    fn test_duplicate_column() {
        let err = RatioTable::from_columns(
            periods(),
            vec![
                column(Ratio::NetMargin, vec![None, None]),
                column(Ratio::NetMargin, vec![None, None]),
            ],
        )
        .unwrap_err();
        assert_eq!(err, RatioError::DuplicateColumn(Ratio::NetMargin));
    }
}
