//! Aggregate portfolio curve chart.
//!
//! Draws the curve with a ratatui [`Chart`] into an off-screen buffer and
//! returns the buffer as text. Besides the curve the plot carries a zero
//! line, a vertical line at the horizon month and a horizontal line at the
//! aggregate value reached there.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget};

/// Default chart width in terminal cells.
pub const CHART_WIDTH: u16 = 80;

/// Default chart height in terminal cells.
pub const CHART_HEIGHT: u16 = 20;

/// Symbol of the zero line.
pub const ZERO_SYMBOL: &str = "•";
/// Symbol of the vertical line at the horizon month.
pub const HORIZON_MONTH_SYMBOL: &str = "█";
/// Symbol of the horizontal line at the horizon value.
pub const HORIZON_VALUE_SYMBOL: &str = "▄";

const TITLE: &str = " Aggregate net accumulated benefit ";

/// Renders `curve` as a `width` x `height` chart followed by a legend line.
///
/// Returns an empty string for an empty curve. `horizon_month` past the end
/// of the curve draws no horizon lines.
pub fn render(curve: &[f64], horizon_month: usize, width: u16, height: u16) -> String {
    if curve.is_empty() {
        return String::new();
    }
    let horizon_value = curve.get(horizon_month).copied();

    let last_month = (curve.len() - 1).max(1) as f64;
    let x_bounds = [0.0, last_month];
    let y_bounds = value_bounds(curve);

    let curve_data: Vec<(f64, f64)> = curve
        .iter()
        .enumerate()
        .map(|(m, &v)| (m as f64, v))
        .collect();
    let zero_data = [(0.0, 0.0), (last_month, 0.0)];
    let (month_data, value_data) = match horizon_value {
        Some(v) => (
            vec![(horizon_month as f64, y_bounds[0]), (horizon_month as f64, y_bounds[1])],
            vec![(0.0, v), (last_month, v)],
        ),
        None => (Vec::new(), Vec::new()),
    };

    // later datasets draw over earlier ones
    let datasets = vec![
        Dataset::default()
            .name("zero")
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&zero_data),
        Dataset::default()
            .name("horizon value")
            .marker(Marker::Bar)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&value_data),
        Dataset::default()
            .name("horizon month")
            .marker(Marker::Block)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&month_data),
        Dataset::default()
            .name("aggregate BNA")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&curve_data),
    ];

    let x_labels: Vec<Span> = [0.0, last_month / 2.0, last_month]
        .iter()
        .map(|m| Span::raw(format!("{:.0}", m)))
        .collect();
    let y_labels: Vec<Span> = [y_bounds[0], (y_bounds[0] + y_bounds[1]) / 2.0, y_bounds[1]]
        .iter()
        .map(|v| Span::raw(format!("{:.2}", v)))
        .collect();

    let chart = Chart::new(datasets)
        .block(Block::default().title(TITLE).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("Month")
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("BNA")
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(y_labels),
        )
        .hidden_legend_constraints((Constraint::Length(0), Constraint::Length(0)));

    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    chart.render(area, &mut buffer);

    let mut out = buffer_lines(&buffer).join("\n");
    out.push('\n');
    out.push_str(&legend(horizon_month, horizon_value));
    out.push('\n');
    out
}

/// Y bounds covering the curve and zero, widened when the curve is flat.
fn value_bounds(curve: &[f64]) -> [f64; 2] {
    let hi = curve.iter().copied().fold(0.0_f64, f64::max);
    let lo = curve.iter().copied().fold(0.0_f64, f64::min);
    if hi > lo {
        [lo, hi]
    } else {
        [lo - 1.0, hi + 1.0]
    }
}

fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let line: String = (area.left()..area.right())
                .map(|x| buffer.get(x, y).symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}

fn legend(horizon_month: usize, horizon_value: Option<f64>) -> String {
    match horizon_value {
        Some(value) => format!(
            "⣿ aggregate BNA  {} month {}  {} value at horizon: {:.2}  {} zero",
            HORIZON_MONTH_SYMBOL, horizon_month, HORIZON_VALUE_SYMBOL, value, ZERO_SYMBOL
        ),
        None => format!("⣿ aggregate BNA  {} zero", ZERO_SYMBOL),
    }
}
