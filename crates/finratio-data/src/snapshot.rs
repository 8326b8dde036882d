//! Point-in-time market metrics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known snapshot keys, named as Yahoo Finance reports them.
pub mod keys {
    /// Trailing price to earnings
    pub const TRAILING_PE: &str = "trailingPE";
    /// Enterprise value to EBITDA
    pub const ENTERPRISE_TO_EBITDA: &str = "enterpriseToEbitda";
    /// Trailing twelve month price to sales
    pub const PRICE_TO_SALES: &str = "priceToSalesTrailing12Months";
    /// Price to book
    pub const PRICE_TO_BOOK: &str = "priceToBook";
}

/// Flat mapping from metric name to value, with no time dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketSnapshot {
    metrics: BTreeMap<String, f64>,
}

impl MarketSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a metric. Non-finite values are ignored.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) {
        if value.is_finite() {
            self.metrics.insert(key.into(), value);
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.insert(key, value);
        self
    }

    /// Metric value, if present.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.metrics.get(key).copied()
    }

    /// Number of metrics.
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// True when no metric is present.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Iterate metrics in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.metrics.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for MarketSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for (key, value) in iter {
            snapshot.insert(key, value);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_lookup() {
        let snapshot: MarketSnapshot = [(keys::TRAILING_PE, 28.5), ("priceToBook", f64::NAN)]
            .into_iter()
            .collect();

        assert_eq!(snapshot.get(keys::TRAILING_PE), Some(28.5));
        assert_eq!(snapshot.get(keys::PRICE_TO_BOOK), None);
        assert_eq!(snapshot.len(), 1);
    }
}
