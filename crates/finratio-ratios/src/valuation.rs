//! Market multiples
//!
//! Multiples come straight from the market snapshot and describe the present,
//! so they are attached to the most recent period only.

use crate::ops::{Values, finite};
use finratio_data::MarketSnapshot;

/// Place the snapshot value for `key` on the most recent of `periods` periods.
///
/// Every other period is absent, as is the first one when the key is missing.
pub fn most_recent_only(snapshot: &MarketSnapshot, key: &str, periods: usize) -> Values {
    let mut values = vec![None; periods];
    if let Some(first) = values.first_mut() {
        *first = snapshot.get(key).and_then(finite);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use finratio_data::snapshot::keys;

    #[test]
    fn test_most_recent_only() {
        let snapshot = MarketSnapshot::new().with(keys::TRAILING_PE, 31.0);
        assert_eq!(
            most_recent_only(&snapshot, keys::TRAILING_PE, 3),
            vec![Some(31.0), None, None]
        );
        assert_eq!(
            most_recent_only(&snapshot, keys::PRICE_TO_BOOK, 2),
            vec![None, None]
        );
        assert!(most_recent_only(&snapshot, keys::TRAILING_PE, 0).is_empty());
    }
}
