//! The `selfquiz history` command.

use anyhow::Result;
use comfy_table::{Cell, Table};
use serde::Serialize;

use selfquiz_core::statistics::ProgressSummary;
use selfquiz_core::ProgressLog;

use super::GlobalArgs;

#[derive(Serialize)]
struct HistoryOutput<'a> {
    summary: &'a ProgressSummary,
    #[serde(flatten)]
    log: &'a ProgressLog,
}

pub fn execute(global: &GlobalArgs, format: String) -> Result<()> {
    let ctx = global.context()?;
    let log = ctx.history();
    let summary = ctx.summary();

    match format.as_str() {
        "json" => {
            let output = HistoryOutput {
                summary: &summary,
                log: &log,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        "text" => print_text(&log, &summary),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }
    Ok(())
}

fn print_text(log: &ProgressLog, summary: &ProgressSummary) {
    if log.is_empty() {
        println!("No attempts recorded yet.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Date", "Correct", "Score"]);
    for (i, attempt) in log.assessments.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(attempt.timestamp.format("%Y-%m-%d %H:%M:%S")),
            Cell::new(format!(
                "{}/{}",
                attempt.correct_count(),
                attempt.questions.len()
            )),
            Cell::new(format!("{:.2}%", attempt.score_percent)),
        ]);
    }
    println!("{table}");

    println!(
        "\n{} attempt(s), average {:.2}%, best {:.2}%, trend: {}",
        summary.attempts,
        summary.average_score,
        summary.best_score.unwrap_or(0.0),
        summary.trend
    );
}
