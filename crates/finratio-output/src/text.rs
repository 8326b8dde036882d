//! Fixed-width ASCII tables.
//!
//! Statements are laid out with line items as rows and periods as columns;
//! the ratio table has one row per period and one column per ratio. Absent
//! values are left blank.

use crate::format::{cell, format_amount, format_ratio};
use finratio_data::LineItemTable;
use finratio_ratios::RatioTable;

/// Render a statement table.
pub fn render_line_items(table: &LineItemTable) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", table.statement().title()));

    if table.is_empty() {
        output.push_str("(no data)\n");
        return output;
    }

    let headers: Vec<String> = table.periods().iter().map(ToString::to_string).collect();
    let rows: Vec<(&str, Vec<String>)> = table
        .items()
        .iter()
        .map(|item| {
            let cells = item.values.iter().map(|v| cell(*v, format_amount)).collect();
            (item.name.as_str(), cells)
        })
        .collect();

    let name_width = rows
        .iter()
        .map(|(name, _)| name.len())
        .chain(std::iter::once("Line Item".len()))
        .max()
        .unwrap_or_default();
    let value_width = rows
        .iter()
        .flat_map(|(_, cells)| cells.iter().map(String::len))
        .chain(headers.iter().map(String::len))
        .max()
        .unwrap_or_default();
    let width = name_width + headers.len() * (value_width + 1);

    output.push_str(&"=".repeat(width));
    output.push('\n');
    output.push_str(&format!("{:<name_width$}", "Line Item"));
    for header in &headers {
        output.push_str(&format!(" {header:>value_width$}"));
    }
    output.push('\n');
    output.push_str(&"-".repeat(width));
    output.push('\n');

    for (name, cells) in &rows {
        output.push_str(&format!("{name:<name_width$}"));
        for c in cells {
            output.push_str(&format!(" {c:>value_width$}"));
        }
        output.push('\n');
    }

    output.push_str(&"=".repeat(width));
    output.push('\n');
    output
}

/// Render the ratio table, one row per period.
pub fn render_ratios(table: &RatioTable) -> String {
    let mut output = String::new();
    output.push_str("\nFinancial Ratios\n");

    if table.is_empty() {
        output.push_str("(no data)\n");
        return output;
    }

    let period_width = table
        .periods()
        .iter()
        .map(|p| p.to_string().len())
        .chain(std::iter::once("Period".len()))
        .max()
        .unwrap_or_default();

    // Each column is as wide as its header or its widest value
    let columns: Vec<(&str, Vec<String>, usize)> = table
        .columns()
        .iter()
        .map(|column| {
            let cells: Vec<String> = column
                .values
                .iter()
                .map(|v| cell(*v, |x| format_ratio(column.ratio, x)))
                .collect();
            let name = column.ratio.name();
            let width = cells.iter().map(String::len).max().unwrap_or_default().max(name.len());
            (name, cells, width)
        })
        .collect();
    let width = period_width + columns.iter().map(|(_, _, w)| w + 2).sum::<usize>();

    output.push_str(&"=".repeat(width));
    output.push('\n');
    output.push_str(&format!("{:<period_width$}", "Period"));
    for (name, _, w) in &columns {
        output.push_str(&format!("  {name:>w$}"));
    }
    output.push('\n');
    output.push_str(&"-".repeat(width));
    output.push('\n');

    for (row, period) in table.periods().iter().enumerate() {
        output.push_str(&format!("{:<period_width$}", period.to_string()));
        for (_, cells, w) in &columns {
            output.push_str(&format!("  {:>w$}", cells[row]));
        }
        output.push('\n');
    }

    output.push_str(&"=".repeat(width));
    output.push('\n');
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use finratio_data::{Period, Statement};
    use finratio_ratios::{Ratio, RatioColumn};

    fn periods() -> Vec<Period> {
        vec![
            Period::from_ymd(2024, 9, 28).unwrap(),
            Period::from_ymd(2023, 9, 30).unwrap(),
        ]
    }

    #[test]
    fn test_render_line_items() {
        let table = LineItemTable::new(Statement::Income, periods())
            .with_item("Total Revenue", vec![Some(391_035_000_000.0), Some(383_285_000_000.0)])
            .unwrap()
            .with_item("Diluted EPS", vec![Some(6.08), None])
            .unwrap();

        let text = render_line_items(&table);
        assert!(text.contains("Income Statement"));
        assert!(text.contains("2024-09-28"));
        assert!(text.contains("391,035,000,000"));
        assert!(text.contains("6.08"));

        let eps_line = text.lines().find(|l| l.starts_with("Diluted EPS")).unwrap();
        assert!(eps_line.trim_end().ends_with("6.08"));
    }

    #[test]
    fn test_render_empty_statement() {
        let text = render_line_items(&LineItemTable::empty(Statement::CashFlow));
        assert!(text.contains("Cash Flow"));
        assert!(text.contains("(no data)"));
    }

    #[test]
    fn test_render_ratios() {
        let table = RatioTable::from_columns(
            periods(),
            vec![
                RatioColumn {
                    ratio: Ratio::OperatingMargin,
                    values: vec![Some(31.5123), Some(29.8)],
                },
                RatioColumn {
                    ratio: Ratio::PriceToEarnings,
                    values: vec![Some(37.6), None],
                },
            ],
        )
        .unwrap();

        let text = render_ratios(&table);
        let header = text.lines().find(|l| l.starts_with("Period")).unwrap();
        assert!(header.contains("Operating Margin (%)"));
        assert!(header.contains("P/E Ratio"));

        let latest = text.lines().find(|l| l.starts_with("2024-09-28")).unwrap();
        assert!(latest.contains("31.51"));
        assert!(latest.contains("37.60"));

        let older = text.lines().find(|l| l.starts_with("2023-09-30")).unwrap();
        assert!(older.contains("29.80"));
        assert!(!older.contains("37.60"));
    }
}
