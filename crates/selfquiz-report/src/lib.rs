//! selfquiz-report — progress dashboard generation.
//!
//! Produces a self-contained HTML dashboard with an inline SVG line chart of
//! scores over time.

pub mod chart;
pub mod dashboard;

pub use dashboard::{generate_dashboard, write_dashboard};

/// Escape a string for safe HTML insertion.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
