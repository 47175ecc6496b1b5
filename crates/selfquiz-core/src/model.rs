//! Core data model types for selfquiz.
//!
//! Field names on the wire follow the persisted progress format, so a log
//! written by earlier versions of the tool stays readable.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Number of options every generated question carries.
pub const OPTION_COUNT: usize = 4;

/// A fill-in-the-blank multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Text shown to the user.
    #[serde(rename = "question")]
    pub prompt: String,
    /// The candidate answers, in display order.
    pub options: Vec<String>,
    /// The option that counts as correct. Always one of `options`.
    #[serde(rename = "correct")]
    pub correct_option: String,
}

impl Question {
    /// Returns `true` if `answer` matches the correct option exactly.
    pub fn is_correct(&self, answer: Option<&str>) -> bool {
        answer == Some(self.correct_option.as_str())
    }
}

/// One completed assessment submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    /// When the attempt was submitted.
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
    /// Unrounded score in `[0, 100]`.
    #[serde(rename = "score", default, deserialize_with = "score_or_zero")]
    pub score_percent: f64,
    /// The questions as they were asked.
    #[serde(default)]
    pub questions: Vec<Question>,
    /// One entry per question; `None` when left unanswered.
    #[serde(default)]
    pub answers: Vec<Option<String>>,
}

/// Older logs may carry `null` for a zero-question attempt.
fn score_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl Attempt {
    /// Create an attempt stamped with the current time at millisecond precision.
    pub fn new(questions: Vec<Question>, answers: Vec<Option<String>>, score_percent: f64) -> Self {
        Self {
            timestamp: Utc::now().trunc_subsecs(3),
            score_percent,
            questions,
            answers,
        }
    }

    /// The recorded answer for question `index`, if any.
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(index).and_then(|a| a.as_deref())
    }

    /// Number of questions answered correctly.
    pub fn correct_count(&self) -> usize {
        self.questions
            .iter()
            .enumerate()
            .filter(|(i, q)| q.is_correct(self.answer(*i)))
            .count()
    }

    /// Prompts of every question whose answer did not match, in question order.
    pub fn missed_prompts(&self) -> impl Iterator<Item = &str> + '_ {
        self.questions
            .iter()
            .enumerate()
            .filter(|(i, q)| !q.is_correct(self.answer(*i)))
            .map(|(_, q)| q.prompt.as_str())
    }
}

/// The full persisted history of attempts, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressLog {
    #[serde(default)]
    pub assessments: Vec<Attempt>,
}

impl ProgressLog {
    pub fn len(&self) -> usize {
        self.assessments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assessments.is_empty()
    }

    /// The most recent attempt.
    pub fn latest(&self) -> Option<&Attempt> {
        self.assessments.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            prompt: "Fill in the blank: \"The _____ brown fox jumps\"".into(),
            options: vec!["quick".into(), "quicx".into(), "brox".into(), "jumpx".into()],
            correct_option: "quick".into(),
        }
    }

    #[test]
    fn question_uses_persisted_field_names() {
        let json = serde_json::to_value(question()).unwrap();
        assert_eq!(json["correct"], "quick");
        assert!(json["question"].as_str().unwrap().contains("_____"));
        assert_eq!(json["options"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn attempt_parses_legacy_shape() {
        let json = r#"{
            "date": "2024-03-01T10:15:30.000Z",
            "score": 50,
            "questions": [
                {"question": "q1", "options": ["a","b","c","d"], "correct": "a"},
                {"question": "q2", "options": ["a","b","c","d"], "correct": "b"}
            ],
            "answers": ["a", null]
        }"#;
        let attempt: Attempt = serde_json::from_str(json).unwrap();
        assert_eq!(attempt.score_percent, 50.0);
        assert_eq!(attempt.answer(0), Some("a"));
        assert_eq!(attempt.answer(1), None);
        assert_eq!(attempt.correct_count(), 1);
        assert_eq!(attempt.missed_prompts().collect::<Vec<_>>(), vec!["q2"]);
    }

    #[test]
    fn null_score_reads_as_zero() {
        let json = r#"{"date": "2024-03-01T10:15:30Z", "score": null, "questions": [], "answers": []}"#;
        let attempt: Attempt = serde_json::from_str(json).unwrap();
        assert_eq!(attempt.score_percent, 0.0);
    }

    #[test]
    fn short_answer_list_counts_as_missed() {
        let attempt = Attempt::new(vec![question()], vec![], 0.0);
        assert_eq!(attempt.correct_count(), 0);
        assert_eq!(attempt.missed_prompts().count(), 1);
    }

    #[test]
    fn empty_log_serializes_to_empty_assessments() {
        let json = serde_json::to_string(&ProgressLog::default()).unwrap();
        assert_eq!(json, r#"{"assessments":[]}"#);
    }
}
