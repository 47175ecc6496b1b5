//! Assessment sessions and the per-user quiz context.

use anyhow::Result;
use rand::Rng;

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::generator::{generate_questions, GeneratorConfig};
use crate::model::{Attempt, ProgressLog, Question};
use crate::recommend::{recommend, Recommendations};
use crate::statistics::ProgressSummary;
use crate::store::ProgressStore;

/// Percentage of correct answers. Zero questions scores 0, not NaN.
pub fn score_percent(correct: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64 * 100.0
    }
}

/// Resolve a user choice to a zero-based option index.
///
/// Accepts a 1-based number (`"2"`) or a letter (`"b"`, case-insensitive).
pub fn parse_choice(choice: &str, option_count: usize) -> Option<usize> {
    let choice = choice.trim();
    if let Ok(n) = choice.parse::<usize>() {
        return (1..=option_count).contains(&n).then(|| n - 1);
    }
    let mut chars = choice.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => {
            let idx = (c.to_ascii_lowercase() as u8 - b'a') as usize;
            (idx < option_count).then_some(idx)
        }
        _ => None,
    }
}

/// Label shown next to option `index` (`a`, `b`, ...).
pub fn option_label(index: usize) -> char {
    (b'a' + (index % 26) as u8) as char
}

/// The question set currently being answered.
#[derive(Debug, Clone, Default)]
pub struct AssessmentSession {
    questions: Vec<Question>,
}

impl AssessmentSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Result<&Question, QuizError> {
        self.questions
            .get(index)
            .ok_or(QuizError::NoSuchQuestion(index + 1))
    }

    /// Map a user choice for question `index` to the option text.
    pub fn answer_for_choice(&self, index: usize, choice: &str) -> Result<String, QuizError> {
        let question = self.question(index)?;
        let options = question.options.len();
        parse_choice(choice, options)
            .map(|i| question.options[i].clone())
            .ok_or_else(|| QuizError::InvalidChoice {
                question: index + 1,
                choice: choice.trim().to_string(),
                options,
                last: option_label(options.saturating_sub(1)),
            })
    }

    /// Score the submitted answers. Missing trailing answers count as
    /// unanswered.
    pub fn submit(&self, mut answers: Vec<Option<String>>) -> Result<Submission, QuizError> {
        if answers.len() > self.questions.len() {
            return Err(QuizError::TooManyAnswers {
                answers: answers.len(),
                questions: self.questions.len(),
            });
        }
        answers.resize(self.questions.len(), None);

        let correct = self
            .questions
            .iter()
            .zip(&answers)
            .filter(|(q, a)| q.is_correct(a.as_deref()))
            .count();
        let total = self.questions.len();

        Ok(Submission {
            attempt: Attempt::new(self.questions.clone(), answers, score_percent(correct, total)),
            correct,
            total,
        })
    }
}

/// The scored result of one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    /// The attempt to persist.
    pub attempt: Attempt,
    pub correct: usize,
    pub total: usize,
}

impl Submission {
    pub fn score_percent(&self) -> f64 {
        self.attempt.score_percent
    }

    /// `Score: <correct>/<total> (<percent>%)`, percent rounded to two places.
    pub fn results_line(&self) -> String {
        format!(
            "Score: {}/{} ({:.2}%)",
            self.correct,
            self.total,
            self.score_percent()
        )
    }
}

/// What a submission through [`QuizContext`] produces.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub submission: Submission,
    /// Recommendations computed from the log after the append.
    pub recommendations: Recommendations,
}

/// Everything one user session works with: the loaded document, the current
/// question set, and the progress store.
pub struct QuizContext<S: ProgressStore> {
    store: S,
    content: String,
    session: AssessmentSession,
    generator: GeneratorConfig,
    recommendation_limit: usize,
    trend_threshold: f64,
}

impl<S: ProgressStore> QuizContext<S> {
    pub fn new(store: S, config: &QuizConfig) -> Self {
        Self {
            store,
            content: String::new(),
            session: AssessmentSession::default(),
            generator: config.generator(),
            recommendation_limit: config.recommendation_limit,
            trend_threshold: config.trend_threshold,
        }
    }

    /// Replace the current document and generate a fresh question set.
    pub fn load_document<R: Rng>(&mut self, content: String, rng: &mut R) -> &AssessmentSession {
        let questions = generate_questions(&content, &self.generator, rng);
        if questions.is_empty() {
            tracing::warn!("no sentence qualified for a question");
        }
        self.content = content;
        self.session = AssessmentSession::new(questions);
        &self.session
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Score the answers, append the attempt, and recompute recommendations.
    pub fn submit(&mut self, answers: Vec<Option<String>>) -> Result<SubmitOutcome> {
        let submission = self.session.submit(answers)?;
        self.store.append(submission.attempt.clone())?;
        tracing::info!(
            correct = submission.correct,
            total = submission.total,
            "recorded attempt"
        );
        Ok(SubmitOutcome {
            recommendations: self.recommendations(),
            submission,
        })
    }

    pub fn history(&self) -> ProgressLog {
        self.store.load()
    }

    pub fn recommendations(&self) -> Recommendations {
        recommend(&self.store.load(), self.recommendation_limit)
    }

    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary::from_log(&self.store.load(), self.trend_threshold)
    }
}
