//! Remediation hints from the attempt history.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ProgressLog;

/// Shown when every recorded answer was correct.
pub const ENCOURAGEMENT: &str = "Great job! Keep up the good work.";

/// Default number of review entries.
pub const DEFAULT_LIMIT: usize = 5;

/// What the user should look at next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "prompts", rename_all = "snake_case")]
pub enum Recommendations {
    /// Prompts of missed questions, oldest attempt first.
    Review(Vec<String>),
    /// Nothing was missed.
    OnTrack,
}

impl Recommendations {
    /// The prompts to review; empty when on track.
    pub fn prompts(&self) -> &[String] {
        match self {
            Recommendations::Review(prompts) => prompts,
            Recommendations::OnTrack => &[],
        }
    }

    pub fn is_on_track(&self) -> bool {
        matches!(self, Recommendations::OnTrack)
    }
}

impl fmt::Display for Recommendations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendations::OnTrack => write!(f, "{ENCOURAGEMENT}"),
            Recommendations::Review(prompts) => {
                write!(f, "Review the following areas:")?;
                for prompt in prompts {
                    write!(f, "\n  - {prompt}")?;
                }
                Ok(())
            }
        }
    }
}

/// Every missed prompt in the log, in attempt order then question order.
/// Duplicates are kept.
pub fn missed_prompts(log: &ProgressLog) -> Vec<&str> {
    log.assessments
        .iter()
        .flat_map(|attempt| attempt.missed_prompts())
        .collect()
}

/// The first `limit` missed prompts, or [`Recommendations::OnTrack`] when
/// nothing was missed.
pub fn recommend(log: &ProgressLog, limit: usize) -> Recommendations {
    let missed = missed_prompts(log);
    if missed.is_empty() {
        return Recommendations::OnTrack;
    }
    Recommendations::Review(
        missed
            .into_iter()
            .take(limit)
            .map(String::from)
            .collect(),
    )
}
