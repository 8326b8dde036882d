//! Terminal line charts.
//!
//! One chart per ratio: one point per period, oldest on the left. Each chart
//! is drawn with a ratatui [`Chart`] into an off-screen [`Buffer`] and
//! printed as plain lines. Absent values leave a gap in the line.

use crate::format::format_amount;
use finratio_ratios::{Ratio, RatioTable};
use ratatui::{
    buffer::Cell,
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

/// Chart width in terminal columns
const WIDTH: u16 = 72;

/// Chart height in terminal rows
const HEIGHT: u16 = 16;

/// One point of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// X axis label, usually the fiscal year
    pub label: String,
    /// Y value, absent for gaps
    pub value: Option<f64>,
}

impl ChartPoint {
    /// Create a point.
    pub fn new(label: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Title, axis captions and an optional description for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabels {
    /// Chart title
    pub title: String,
    /// X axis caption
    pub x_axis: String,
    /// Y axis caption
    pub y_axis: String,
    /// What the plotted series measures
    pub description: Option<String>,
}

impl ChartLabels {
    /// Labels with no description.
    pub fn new(
        title: impl Into<String>,
        x_axis: impl Into<String>,
        y_axis: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_axis: x_axis.into(),
            y_axis: y_axis.into(),
            description: None,
        }
    }

    /// Labels for one ratio of one company: "Net Margin (%) over time - AAPL",
    /// years on the x axis, the ratio on the y axis.
    pub fn for_ratio(ratio: Ratio, symbol: &str) -> Self {
        Self {
            description: Some(ratio.description().to_string()),
            ..Self::new(
                format!("{} over time - {symbol}", ratio.name()),
                "Year",
                ratio.name(),
            )
        }
    }
}

/// Points of one ratio in chronological order (oldest first), labelled by
/// fiscal year.
pub fn ratio_series(table: &RatioTable, ratio: Ratio) -> Vec<ChartPoint> {
    let values = table.column(ratio).unwrap_or_default();
    table
        .periods()
        .iter()
        .zip(values)
        .rev()
        .map(|(period, value)| ChartPoint::new(period.year().to_string(), *value))
        .collect()
}

/// Value range of the present points.
pub(crate) fn bounds(points: &[ChartPoint]) -> Option<(f64, f64)> {
    points
        .iter()
        .filter_map(|p| p.value)
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Runs of consecutive present points as `(index, value)` pairs.
///
/// An absent point ends the current run, so no line is drawn across it.
pub(crate) fn runs(points: &[ChartPoint]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();
    for (i, point) in points.iter().enumerate() {
        match point.value {
            Some(v) => current.push((i as f64, v)),
            None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Render a line chart as text.
pub fn render_terminal_chart(labels: &ChartLabels, points: &[ChartPoint]) -> String {
    let mut output = String::from("\n");
    let Some((min, max)) = bounds(points) else {
        output.push_str(&format!("{}\n  (no data)\n", labels.title));
        return output;
    };
    let (low, high) = if max > min {
        (min, max)
    } else {
        (min - 1.0, max + 1.0)
    };

    let lines = runs(points);
    let markers = lines.concat();
    let mut datasets: Vec<Dataset<'_>> = lines
        .iter()
        .map(|run| {
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .data(run)
        })
        .collect();
    datasets.push(
        Dataset::default()
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .data(&markers),
    );

    // A lone point sits in the middle, between two blank labels.
    let (x_bounds, x_labels) = if points.len() > 1 {
        (
            [0.0, (points.len() - 1) as f64],
            points.iter().map(|p| Span::raw(p.label.as_str())).collect(),
        )
    } else {
        (
            [-1.0, 1.0],
            vec![
                Span::raw(""),
                Span::raw(points[0].label.as_str()),
                Span::raw(""),
            ],
        )
    };

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", labels.title)),
        )
        .x_axis(
            Axis::default()
                .title(labels.x_axis.as_str())
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(labels.y_axis.as_str())
                .bounds([low, high])
                .labels(vec![
                    Span::raw(format_amount(low)),
                    Span::raw(format_amount((low + high) / 2.0)),
                    Span::raw(format_amount(high)),
                ]),
        );

    let area = Rect::new(0, 0, WIDTH, HEIGHT);
    let mut buffer = Buffer::empty(area);
    chart.render(area, &mut buffer);

    for row in buffer.content.chunks(usize::from(WIDTH)) {
        let line: String = row.iter().map(Cell::symbol).collect();
        output.push_str(line.trim_end());
        output.push('\n');
    }
    if let Some(description) = &labels.description {
        output.push_str(&format!("  {description}\n"));
    }
    output
}
