//! Elementwise arithmetic over per-period values.
//!
//! All helpers treat `None` as absent: any absent operand, a zero
//! denominator, or a non-finite result yields `None`.

/// One optional value per period.
pub type Values = Vec<Option<f64>>;

/// Keep finite values only.
pub fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// `num / den` per period.
pub fn divide(num: &[Option<f64>], den: &[Option<f64>]) -> Values {
    num.iter()
        .zip(den)
        .map(|(n, d)| match (n, d) {
            (Some(n), Some(d)) if *d != 0.0 => finite(n / d),
            _ => None,
        })
        .collect()
}

/// `num / den * 100` per period.
pub fn percent(num: &[Option<f64>], den: &[Option<f64>]) -> Values {
    divide(num, den)
        .into_iter()
        .map(|v| v.and_then(|v| finite(v * 100.0)))
        .collect()
}

/// `a + b` per period.
pub fn add(a: &[Option<f64>], b: &[Option<f64>]) -> Values {
    a.iter()
        .zip(b)
        .map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) => finite(a + b),
            _ => None,
        })
        .collect()
}

/// Percent change of each period against the next older one.
///
/// Values are ordered most recent first, so period `i` is compared with
/// period `i + 1`. The oldest period has nothing to compare with.
pub fn change_vs_older(values: &[Option<f64>]) -> Values {
    (0..values.len())
        .map(|i| {
            let current = values[i]?;
            let older = values.get(i + 1).copied().flatten()?;
            if older == 0.0 {
                return None;
            }
            finite((current - older) / older * 100.0)
        })
        .collect()
}

/// True when no period has a value.
pub fn all_absent(values: &[Option<f64>]) -> bool {
    values.iter().all(Option::is_none)
}
