//! Aggregate statistics over the attempt history.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ProgressLog;

/// Direction of the latest score change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Improving,
    Declining,
    Steady,
    /// Fewer than two attempts.
    NotEnoughData,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Improving => write!(f, "improving"),
            Trend::Declining => write!(f, "declining"),
            Trend::Steady => write!(f, "steady"),
            Trend::NotEnoughData => write!(f, "not enough data"),
        }
    }
}

/// Summary of all recorded attempts. Scores are percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// Number of attempts recorded.
    pub attempts: usize,
    /// Mean score across attempts (0 when there are none).
    pub average_score: f64,
    /// Highest score recorded.
    pub best_score: Option<f64>,
    /// Score of the most recent attempt.
    pub latest_score: Option<f64>,
    /// Latest score minus the one before it.
    pub change_from_previous: Option<f64>,
    /// Classification of `change_from_previous`.
    pub trend: Trend,
}

impl ProgressSummary {
    /// Summarize `log`. A change larger than `threshold` percentage points in
    /// either direction counts as a trend.
    pub fn from_log(log: &ProgressLog, threshold: f64) -> Self {
        let scores: Vec<f64> = log.assessments.iter().map(|a| a.score_percent).collect();

        let average_score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        };
        let best_score = scores.iter().copied().reduce(f64::max);
        let latest_score = scores.last().copied();

        let change_from_previous = match scores.as_slice() {
            [.., previous, latest] => Some(latest - previous),
            _ => None,
        };

        let trend = match change_from_previous {
            None => Trend::NotEnoughData,
            Some(delta) if delta > threshold => Trend::Improving,
            Some(delta) if delta < -threshold => Trend::Declining,
            Some(_) => Trend::Steady,
        };

        Self {
            attempts: scores.len(),
            average_score,
            best_score,
            latest_score,
            change_from_previous,
            trend,
        }
    }
}
