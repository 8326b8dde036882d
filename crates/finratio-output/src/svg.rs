//! Inline SVG line charts for the dashboard.

use crate::chart::{ChartLabels, ChartPoint, bounds, runs};
use crate::format::format_amount;
use html_escape::encode_text;

const WIDTH: f64 = 420.0;
const HEIGHT: f64 = 240.0;
const MARGIN_LEFT: f64 = 72.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 36.0;
const MARGIN_BOTTOM: f64 = 52.0;

/// Render a line chart as a standalone `<svg>` element.
///
/// Points are drawn left to right in the order given. Consecutive present
/// points are joined; an absent point breaks the line.
pub fn render_svg_chart(labels: &ChartLabels, points: &[ChartPoint]) -> String {
    let mut svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" class="chart" viewBox="0 0 {WIDTH} {HEIGHT}" width="{WIDTH}" height="{HEIGHT}" role="img">"##
    );
    svg.push_str(&format!("<title>{}</title>", encode_text(&labels.title)));
    if let Some(description) = &labels.description {
        svg.push_str(&format!("<desc>{}</desc>", encode_text(description)));
    }
    svg.push_str(&format!(
        r##"<text x="{}" y="20" text-anchor="middle" font-size="14" font-weight="bold">{}</text>"##,
        WIDTH / 2.0,
        encode_text(&labels.title)
    ));

    let Some((min, max)) = bounds(points) else {
        svg.push_str(&format!(
            r##"<text x="{}" y="{}" text-anchor="middle" fill="#888">No data</text></svg>"##,
            WIDTH / 2.0,
            HEIGHT / 2.0
        ));
        return svg;
    };

    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let bottom = MARGIN_TOP + plot_height;

    let x_of = |i: f64| {
        if points.len() > 1 {
            MARGIN_LEFT + plot_width * i / (points.len() - 1) as f64
        } else {
            MARGIN_LEFT + plot_width / 2.0
        }
    };
    let y_of = |v: f64| {
        if max > min {
            MARGIN_TOP + plot_height * (max - v) / (max - min)
        } else {
            MARGIN_TOP + plot_height / 2.0
        }
    };

    // Axes
    svg.push_str(&format!(
        r##"<line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{bottom}" stroke="#999"/>"##
    ));
    svg.push_str(&format!(
        r##"<line x1="{MARGIN_LEFT}" y1="{bottom}" x2="{}" y2="{bottom}" stroke="#999"/>"##,
        WIDTH - MARGIN_RIGHT
    ));
    let mut ticks = vec![(max, y_of(max))];
    if max > min {
        ticks.push((min, y_of(min)));
    }
    for (value, y) in ticks {
        svg.push_str(&format!(
            r##"<text x="{}" y="{:.1}" text-anchor="end" font-size="10" dominant-baseline="middle">{}</text>"##,
            MARGIN_LEFT - 6.0,
            y,
            format_amount(value)
        ));
    }

    // Axis captions
    svg.push_str(&format!(
        r##"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11" fill="#555">{}</text>"##,
        MARGIN_LEFT + plot_width / 2.0,
        HEIGHT - 8.0,
        encode_text(&labels.x_axis)
    ));
    svg.push_str(&format!(
        r##"<text x="14" y="{0:.1}" text-anchor="middle" font-size="11" fill="#555" transform="rotate(-90 14 {0:.1})">{1}</text>"##,
        MARGIN_TOP + plot_height / 2.0,
        encode_text(&labels.y_axis)
    ));

    // One polyline per run of present values
    for run in runs(points).iter().filter(|r| r.len() > 1) {
        let coords: Vec<String> = run
            .iter()
            .map(|(i, v)| format!("{:.1},{:.1}", x_of(*i), y_of(*v)))
            .collect();
        svg.push_str(&format!(
            r##"<polyline fill="none" stroke="steelblue" stroke-width="2" points="{}"/>"##,
            coords.join(" ")
        ));
    }

    for (i, point) in points.iter().enumerate() {
        let x = x_of(i as f64);
        if let Some(v) = point.value {
            svg.push_str(&format!(
                r##"<circle cx="{x:.1}" cy="{:.1}" r="3.5" fill="steelblue"><title>{}</title></circle>"##,
                y_of(v),
                encode_text(&format!("{}: {}", point.label, format_amount(v)))
            ));
        }
        svg.push_str(&format!(
            r##"<text x="{x:.1}" y="{:.1}" text-anchor="middle" font-size="10">{}</text>"##,
            bottom + 16.0,
            encode_text(&point.label)
        ));
    }

    svg.push_str("</svg>");
    svg
}
