//! Number formatting shared by tables, charts and the dashboard.

use finratio_ratios::Ratio;

/// Format a statement amount.
///
/// Magnitudes of a thousand or more are rounded to whole units and grouped
/// with thousands separators (`-1,234,568`); smaller values such as per-share
/// figures keep two decimals.
pub fn format_amount(value: f64) -> String {
    if value.abs() < 1000.0 {
        return format!("{value:.2}");
    }

    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format a ratio value: free cash flow as an amount, everything else with two decimals.
pub fn format_ratio(ratio: Ratio, value: f64) -> String {
    match ratio {
        Ratio::FreeCashFlow => format_amount(value),
        _ => format!("{value:.2}"),
    }
}

/// Blank for absent values.
pub(crate) fn cell(value: Option<f64>, format: impl Fn(f64) -> String) -> String {
    value.map(format).unwrap_or_default()
}
