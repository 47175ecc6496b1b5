//! HTML dashboard generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use std::path::Path;

use anyhow::{Context, Result};

use selfquiz_core::model::ProgressLog;
use selfquiz_core::recommend::{Recommendations, ENCOURAGEMENT};
use selfquiz_core::statistics::ProgressSummary;

use crate::chart::{line_chart_svg, points_from_log};
use crate::html_escape;

fn percent(score: Option<f64>) -> String {
    score
        .map(|s| format!("{s:.2}%"))
        .unwrap_or_else(|| "-".to_string())
}

/// Generate the progress dashboard.
pub fn generate_dashboard(
    log: &ProgressLog,
    recommendations: &Recommendations,
    summary: &ProgressSummary,
) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>selfquiz progress</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>selfquiz progress</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">{} attempts | generated {}</p>\n",
        summary.attempts,
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Summary
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Summary</h2>\n");
    html.push_str("<table class=\"summary\">\n");
    html.push_str("<thead><tr><th>Attempts</th><th>Average</th><th>Best</th><th>Latest</th><th>Trend</th></tr></thead>\n");
    html.push_str(&format!(
        "<tbody><tr><td>{}</td><td>{:.2}%</td><td>{}</td><td>{}</td><td class=\"trend\">{}</td></tr></tbody>\n",
        summary.attempts,
        summary.average_score,
        percent(summary.best_score),
        percent(summary.latest_score),
        summary.trend,
    ));
    html.push_str("</table>\n");

    html.push_str("<h2>Score (%) over time</h2>\n");
    html.push_str(&line_chart_svg(&points_from_log(log)));
    html.push_str("</section>\n");

    // Recommendations
    html.push_str("<section class=\"recommendations\">\n");
    html.push_str("<h2>Personalized Recommendations</h2>\n");
    match recommendations {
        Recommendations::OnTrack => {
            html.push_str(&format!("<p>{}</p>\n", html_escape(ENCOURAGEMENT)));
        }
        Recommendations::Review(prompts) => {
            html.push_str("<p>Review the following areas:</p>\n<ul>\n");
            for prompt in prompts {
                html.push_str(&format!("<li>{}</li>\n", html_escape(prompt)));
            }
            html.push_str("</ul>\n");
        }
    }
    html.push_str("</section>\n");

    // Attempts
    if !log.is_empty() {
        html.push_str("<section class=\"attempts\">\n");
        html.push_str("<h2>Attempts</h2>\n");
        html.push_str("<table class=\"attempts-table\">\n");
        html.push_str("<thead><tr><th>#</th><th>Date</th><th>Correct</th><th>Score</th></tr></thead>\n");
        html.push_str("<tbody>\n");
        for (i, attempt) in log.assessments.iter().enumerate() {
            let class = if attempt.score_percent >= 80.0 {
                "pass"
            } else if attempt.score_percent < 50.0 {
                "fail"
            } else {
                "mid"
            };
            html.push_str(&format!(
                "<tr class=\"{class}\"><td>{}</td><td>{}</td><td>{}/{}</td><td>{:.2}%</td></tr>\n",
                i + 1,
                attempt.timestamp.format("%Y-%m-%d %H:%M"),
                attempt.correct_count(),
                attempt.questions.len(),
                attempt.score_percent,
            ));
        }
        html.push_str("</tbody></table>\n");
        html.push_str("</section>\n");
    }

    html.push_str("</body>\n</html>");
    html
}

/// Write the dashboard to a file.
pub fn write_dashboard(
    log: &ProgressLog,
    recommendations: &Recommendations,
    summary: &ProgressSummary,
    path: &Path,
) -> Result<()> {
    let html = generate_dashboard(log, recommendations, summary);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write dashboard to {}", path.display()))?;
    tracing::info!(path = %path.display(), attempts = log.len(), "wrote dashboard");
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --pass: #dcfce7; --mid: #fef9c3; --fail: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --mid: #713f12; --fail: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta, .empty { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.pass { background: var(--pass); }
.mid { background: var(--mid); }
.fail { background: var(--fail); }
.trend { text-transform: capitalize; }
svg { margin: 1rem 0; max-width: 100%; height: auto; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use selfquiz_core::model::{Attempt, Question};
    use selfquiz_core::recommend::{recommend, DEFAULT_LIMIT};

    fn make_log() -> ProgressLog {
        let question = Question {
            prompt: "Fill in the blank: \"<b>bold</b> _____ claims\"".into(),
            options: vec!["big".into(), "bix".into(), "claimx".into(), "<b>bolx".into()],
            correct_option: "big".into(),
        };
        ProgressLog {
            assessments: vec![
                Attempt::new(vec![question.clone()], vec![None], 0.0),
                Attempt::new(vec![question], vec![Some("big".into())], 100.0),
            ],
        }
    }

    #[test]
    fn dashboard_contains_required_elements() {
        let log = make_log();
        let recs = recommend(&log, DEFAULT_LIMIT);
        let summary = ProgressSummary::from_log(&log, 5.0);
        let html = generate_dashboard(&log, &recs, &summary);

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("<svg"));
        assert_eq!(html.matches("<circle").count(), 2);
        assert!(html.contains("Review the following areas:"));
        assert!(html.contains("improving"));
        assert!(html.contains("1/1"));
    }

    #[test]
    fn prompts_are_escaped() {
        let log = make_log();
        let recs = recommend(&log, DEFAULT_LIMIT);
        let html = generate_dashboard(&log, &recs, &ProgressSummary::from_log(&log, 5.0));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(!html.contains("<b>bold</b>"));
    }

    #[test]
    fn empty_history_is_encouraging() {
        let log = ProgressLog::default();
        let html = generate_dashboard(
            &log,
            &Recommendations::OnTrack,
            &ProgressSummary::from_log(&log, 5.0),
        );
        assert!(html.contains("Great job! Keep up the good work."));
        assert!(html.contains("No attempts recorded yet."));
        assert!(!html.contains("attempts-table"));
    }

    #[test]
    fn write_to_file() {
        let log = make_log();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("dashboard.html");

        write_dashboard(
            &log,
            &recommend(&log, DEFAULT_LIMIT),
            &ProgressSummary::from_log(&log, 5.0),
            &path,
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
        assert!(content.contains("Personalized Recommendations"));
    }
}
