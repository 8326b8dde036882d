//! Server-side HTML rendering.
//!
//! Everything user supplied or provider supplied goes through `html_escape`
//! before it reaches the page.

use finratio::data::LineItemTable;
use finratio::output::{
    AnalysisReport, ChartLabels, format_amount, format_ratio, ratio_series, render_svg_chart,
};
use finratio::ratios::{Ratio, RatioTable};
use html_escape::{encode_double_quoted_attribute, encode_text};

const STYLE: &str = r#"
body { margin: 0; font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; color: #262730; display: flex; min-height: 100vh; }
.sidebar { width: 260px; padding: 24px; background: #f0f2f6; box-sizing: border-box; }
.sidebar label { display: block; font-size: 14px; margin-bottom: 6px; }
.sidebar input { width: 100%; padding: 8px; box-sizing: border-box; margin-bottom: 12px; }
.sidebar button { padding: 8px 16px; border: 1px solid #ccc; background: #fff; border-radius: 6px; cursor: pointer; }
main { flex: 1; padding: 24px 40px; overflow-x: auto; }
table { border-collapse: collapse; margin-bottom: 24px; font-size: 13px; }
th, td { border: 1px solid #e6e9ef; padding: 4px 10px; }
th { background: #fafafa; text-align: left; }
td.num { text-align: right; font-variant-numeric: tabular-nums; }
.charts { display: grid; grid-template-columns: repeat(auto-fill, minmax(420px, 1fr)); gap: 16px; }
.notice { padding: 12px 16px; background: #fff3cd; border-radius: 6px; }
"#;

/// Page skeleton with the ticker form in the sidebar.
fn layout(ticker: &str, content: &str) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>Financial Ratio Analyzer</title>\n");
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));
    html.push_str("<aside class=\"sidebar\">\n<h2>Inputs</h2>\n<form action=\"/analyze\" method=\"get\">\n");
    html.push_str("<label for=\"ticker\">Enter company ticker (e.g. AAPL, MSFT, TSLA)</label>\n");
    html.push_str(&format!(
        "<input id=\"ticker\" name=\"ticker\" type=\"text\" value=\"{}\">\n",
        encode_double_quoted_attribute(ticker)
    ));
    html.push_str("<button type=\"submit\">Run Analysis</button>\n</form>\n</aside>\n");
    html.push_str("<main>\n<h1>Financial Ratio Analyzer</h1>\n");
    html.push_str(content);
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

/// Landing page: the form only.
pub(crate) fn index(ticker: &str) -> String {
    layout(
        ticker,
        "<p>Enter a ticker in the sidebar and press <b>Run Analysis</b>.</p>\n",
    )
}

/// A page showing a single message, e.g. no data or an error.
pub(crate) fn message(ticker: &str, message: &str) -> String {
    layout(
        ticker,
        &format!("<p class=\"notice\">{}</p>\n", encode_text(message)),
    )
}

fn cell(value: Option<f64>, format: impl Fn(f64) -> String) -> String {
    let text = value.map(format).unwrap_or_default();
    format!("<td class=\"num\">{}</td>", encode_text(&text))
}

fn statement_table(table: &LineItemTable) -> String {
    let mut html = format!("<h3>{}</h3>\n", table.statement().title());
    if table.is_empty() {
        html.push_str("<p>No line items.</p>\n");
        return html;
    }

    html.push_str("<table>\n<tr><th>Line Item</th>");
    for period in table.periods() {
        html.push_str(&format!("<th>{period}</th>"));
    }
    html.push_str("</tr>\n");

    for item in table.items() {
        html.push_str(&format!("<tr><th>{}</th>", encode_text(&item.name)));
        for value in &item.values {
            html.push_str(&cell(*value, format_amount));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
    html
}

fn ratio_table(table: &RatioTable) -> String {
    let mut html = String::from("<h3>Financial Ratios</h3>\n<table>\n<tr><th>Period</th>");
    for column in table.columns() {
        html.push_str(&format!("<th>{}</th>", encode_text(column.ratio.name())));
    }
    html.push_str("</tr>\n");

    for (row, period) in table.periods().iter().enumerate() {
        html.push_str(&format!("<tr><th>{period}</th>"));
        for column in table.columns() {
            html.push_str(&cell(column.values[row], |v| format_ratio(column.ratio, v)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");
    html
}

/// Full results: statements, ratios and one chart per ratio.
pub(crate) fn results(report: &AnalysisReport) -> String {
    let mut content = format!(
        "<h2>{}</h2>\n<p>Generated {}</p>\n",
        encode_text(&report.symbol),
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    for table in [&report.income, &report.balance_sheet, &report.cash_flow] {
        content.push_str(&statement_table(table));
    }
    content.push_str(&ratio_table(&report.ratios));

    content.push_str("<h3>Trends over Time</h3>\n<div class=\"charts\">\n");
    for ratio in Ratio::ALL {
        content.push_str(&render_svg_chart(
            &ChartLabels::for_ratio(ratio, &report.symbol),
            &ratio_series(&report.ratios, ratio),
        ));
        content.push('\n');
    }
    content.push_str("</div>\n");

    layout(&report.symbol, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use finratio::data::{Period, Statement};
    use finratio::ratios::RatioColumn;

    #[test]
    fn test_user_input_is_escaped() {
        let html = message("\"><script>", "<b>bad</b>");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>bad</b>"));
        assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
    }

    #[test]
    fn test_absent_values_are_blank_cells() {
        let periods = vec![
            Period::from_ymd(2024, 12, 31).unwrap(),
            Period::from_ymd(2023, 12, 31).unwrap(),
        ];
        let table = RatioTable::from_columns(
            periods,
            vec![RatioColumn {
                ratio: Ratio::PriceToSales,
                values: vec![Some(7.25), None],
            }],
        )
        .unwrap();

        let html = ratio_table(&table);
        assert!(html.contains("<td class=\"num\">7.25</td>"));
        assert!(html.contains("<td class=\"num\"></td>"));
    }

    #[test]
    fn test_statement_table() {
        let table = LineItemTable::new(Statement::CashFlow, vec![Period::from_ymd(2024, 6, 30).unwrap()])
            .with_item("Free Cash Flow", vec![Some(74_071_000_000.0)])
            .unwrap();
        let html = statement_table(&table);
        assert!(html.contains("<h3>Cash Flow</h3>"));
        assert!(html.contains("<th>2024-06-30</th>"));
        assert!(html.contains("74,071,000,000"));
    }
}
