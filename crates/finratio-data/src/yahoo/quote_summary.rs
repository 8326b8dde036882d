//! Market snapshot from the Yahoo Finance quoteSummary API.

use crate::snapshot::{MarketSnapshot, keys};

/// Market multiples read from one quoteSummary result.
///
/// `trailing_pe` and `price_to_sales` come from the `summaryDetail` module,
/// `price_to_book` and `enterprise_to_ebitda` from `defaultKeyStatistics`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SnapshotMultiples {
    /// Trailing price to earnings
    pub trailing_pe: Option<f64>,
    /// Trailing twelve month price to sales
    pub price_to_sales: Option<f64>,
    /// Price to book
    pub price_to_book: Option<f64>,
    /// Enterprise value to EBITDA
    pub enterprise_to_ebitda: Option<f64>,
}

impl From<SnapshotMultiples> for MarketSnapshot {
    fn from(multiples: SnapshotMultiples) -> Self {
        let mut snapshot = Self::new();
        let fields = [
            (keys::TRAILING_PE, multiples.trailing_pe),
            (keys::PRICE_TO_SALES, multiples.price_to_sales),
            (keys::PRICE_TO_BOOK, multiples.price_to_book),
            (keys::ENTERPRISE_TO_EBITDA, multiples.enterprise_to_ebitda),
        ];
        for (key, value) in fields {
            if let Some(v) = value {
                snapshot.insert(key, v);
            }
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_multiples_are_left_out() {
        let snapshot = MarketSnapshot::from(SnapshotMultiples {
            trailing_pe: Some(31.5),
            price_to_book: Some(45.2),
            ..Default::default()
        });

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get(keys::TRAILING_PE), Some(31.5));
        assert_eq!(snapshot.get(keys::PRICE_TO_BOOK), Some(45.2));
        assert_eq!(snapshot.get(keys::PRICE_TO_SALES), None);
    }

    #[test]
    fn test_non_finite_multiples_dropped() {
        let snapshot = MarketSnapshot::from(SnapshotMultiples {
            enterprise_to_ebitda: Some(f64::NAN),
            price_to_sales: Some(f64::INFINITY),
            ..Default::default()
        });
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_no_multiples_is_empty() {
        assert!(MarketSnapshot::from(SnapshotMultiples::default()).is_empty());
    }
}
