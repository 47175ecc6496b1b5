//! SVG line chart of scores over time.
//!
//! The y-axis is fixed to 0-100 so charts from different histories line up.

use selfquiz_core::model::ProgressLog;

use crate::html_escape;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 24.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 48.0;
const MAX_X_LABELS: usize = 12;
const LINE_COLOR: &str = "rgba(75, 192, 192, 1)";
const FILL_COLOR: &str = "rgba(75, 192, 192, 0.2)";

/// One plotted attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    /// X-axis label (the attempt date).
    pub label: String,
    /// Score in percent.
    pub score: f64,
}

/// One point per attempt, labelled with its date.
pub fn points_from_log(log: &ProgressLog) -> Vec<ChartPoint> {
    log.assessments
        .iter()
        .map(|a| ChartPoint {
            label: a.timestamp.format("%Y-%m-%d").to_string(),
            score: a.score_percent,
        })
        .collect()
}

fn plot_width() -> f64 {
    WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

fn x_at(index: usize, count: usize) -> f64 {
    if count <= 1 {
        MARGIN_LEFT + plot_width() / 2.0
    } else {
        MARGIN_LEFT + plot_width() * index as f64 / (count - 1) as f64
    }
}

fn y_at(score: f64) -> f64 {
    let clamped = if score.is_finite() { score.clamp(0.0, 100.0) } else { 0.0 };
    MARGIN_TOP + plot_height() * (1.0 - clamped / 100.0)
}

/// Render the chart. An empty series renders a placeholder message instead.
pub fn line_chart_svg(points: &[ChartPoint]) -> String {
    if points.is_empty() {
        return "<p class=\"empty\">No attempts recorded yet.</p>\n".to_string();
    }

    let mut svg = format!(
        "<svg class=\"chart\" width=\"{WIDTH}\" height=\"{HEIGHT}\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" xmlns=\"http://www.w3.org/2000/svg\" role=\"img\" aria-label=\"Score (%) over time\">\n"
    );

    // Gridlines and y-axis labels.
    for tick in (0..=100).step_by(20) {
        let y = y_at(tick as f64);
        svg.push_str(&format!(
            "  <line x1=\"{MARGIN_LEFT}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"currentColor\" stroke-opacity=\"0.15\"/>\n",
            WIDTH - MARGIN_RIGHT
        ));
        svg.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{y:.1}\" font-size=\"11\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{tick}</text>\n",
            MARGIN_LEFT - 8.0
        ));
    }

    let coords: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (x_at(i, points.len()), y_at(p.score)))
        .collect();

    // Area under the line.
    if coords.len() > 1 {
        let baseline = y_at(0.0);
        let mut area = format!("{:.1},{baseline:.1}", coords[0].0);
        for (x, y) in &coords {
            area.push_str(&format!(" {x:.1},{y:.1}"));
        }
        area.push_str(&format!(" {:.1},{baseline:.1}", coords[coords.len() - 1].0));
        svg.push_str(&format!(
            "  <polygon points=\"{area}\" fill=\"{FILL_COLOR}\" stroke=\"none\"/>\n"
        ));
    }

    let line: Vec<String> = coords.iter().map(|(x, y)| format!("{x:.1},{y:.1}")).collect();
    svg.push_str(&format!(
        "  <polyline points=\"{}\" fill=\"none\" stroke=\"{LINE_COLOR}\" stroke-width=\"2\"/>\n",
        line.join(" ")
    ));

    let label_step = points.len().div_ceil(MAX_X_LABELS).max(1);
    for (i, (point, (x, y))) in points.iter().zip(&coords).enumerate() {
        svg.push_str(&format!(
            "  <circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"4\" fill=\"{LINE_COLOR}\"><title>{}: {:.2}%</title></circle>\n",
            html_escape(&point.label),
            point.score
        ));
        if i % label_step == 0 || i == points.len() - 1 {
            svg.push_str(&format!(
                "  <text x=\"{x:.1}\" y=\"{:.1}\" font-size=\"11\" fill=\"currentColor\" text-anchor=\"middle\">{}</text>\n",
                HEIGHT - MARGIN_BOTTOM + 20.0,
                html_escape(&point.label)
            ));
        }
    }

    svg.push_str("</svg>\n");
    svg
}
