//! Sentence-based question generation.
//!
//! Splits a document into sentences, blanks out one random word per sentence,
//! and builds three look-alike distractors from the sentence's other words.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Question, OPTION_COUNT};

/// Placeholder shown where the answer word was removed.
pub const BLANK: &str = "_____";

/// Characters used for fixed distractor variants once random draws run out.
const VARIANT_SUFFIXES: [char; 4] = ['x', 'y', 'z', 'q'];

/// Tuning knobs for question generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum questions to produce.
    pub question_count: usize,
    /// Minimum trimmed length of a sentence candidate, in characters.
    pub min_sentence_chars: usize,
    /// Minimum words a sentence needs to become a question.
    pub min_words: usize,
    /// Random distractor draws before falling back to fixed variants.
    pub max_distractor_draws: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            question_count: 5,
            min_sentence_chars: 11,
            min_words: 5,
            max_distractor_draws: 64,
        }
    }
}

/// Split text on runs of `.`, `!` and `?`, keeping trimmed candidates that
/// are at least `min_chars` characters long.
pub fn sentence_candidates(text: &str, min_chars: usize) -> impl Iterator<Item = &str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(move |s| !s.is_empty() && s.chars().count() >= min_chars)
}

/// Generate up to `config.question_count` questions from `text`.
///
/// Only the first `config.question_count` candidates are considered. Those
/// with fewer than `config.min_words` words are skipped, so a short sentence
/// among them means fewer questions. Returns an empty list when nothing
/// qualifies.
pub fn generate_questions<R: Rng>(
    text: &str,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<Question> {
    let mut questions = Vec::with_capacity(config.question_count);

    let candidates =
        sentence_candidates(text, config.min_sentence_chars).take(config.question_count);
    for sentence in candidates {
        let words = split_words(sentence);
        if words.len() < config.min_words || words.iter().all(|w| w.is_empty()) {
            tracing::trace!(words = words.len(), "skipping short sentence");
            continue;
        }
        questions.push(build_question(&words, config.max_distractor_draws, rng));
    }

    tracing::debug!(count = questions.len(), "generated questions");
    questions
}

/// Split a sentence on single spaces. Runs of spaces yield empty words and
/// line breaks stay inside a word; both count toward the word total.
pub fn split_words(sentence: &str) -> Vec<&str> {
    sentence.split(' ').collect()
}

/// `words` must contain at least one non-empty word.
fn build_question<R: Rng>(words: &[&str], max_draws: usize, rng: &mut R) -> Question {
    let positions: Vec<usize> = words
        .iter()
        .enumerate()
        .filter(|(_, w)| !w.is_empty())
        .map(|(i, _)| i)
        .collect();
    let answer_index = positions[rng.random_range(0..positions.len())];
    let correct = words[answer_index].to_string();

    let mut options = Vec::with_capacity(OPTION_COUNT);
    options.push(correct.clone());

    // Single-character words would all collapse to the same "x" variant.
    let bases: Vec<&str> = words
        .iter()
        .copied()
        .filter(|w| w.chars().count() > 1)
        .collect();

    let mut draws = 0;
    while options.len() < OPTION_COUNT && draws < max_draws && !bases.is_empty() {
        draws += 1;
        let base = bases[rng.random_range(0..bases.len())];
        let candidate = replace_last_char(base, 'x');
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    if options.len() < OPTION_COUNT {
        tracing::debug!(answer = %correct, draws, "falling back to fixed distractor variants");
        fill_with_variants(&mut options, &correct);
    }

    options.shuffle(rng);

    Question {
        prompt: blank_prompt(words, answer_index),
        options,
        correct_option: correct,
    }
}

/// Replace the final character of `word` with `with`.
fn replace_last_char(word: &str, with: char) -> String {
    match word.char_indices().next_back() {
        Some((idx, _)) => {
            let mut out = String::with_capacity(idx + with.len_utf8());
            out.push_str(&word[..idx]);
            out.push(with);
            out
        }
        None => with.to_string(),
    }
}

/// Top up `options` with deterministic variants of the answer. The numbered
/// tail is unbounded but every entry is distinct, so this always terminates.
fn fill_with_variants(options: &mut Vec<String>, correct: &str) {
    let stem = replace_last_char(correct, 'x');
    let variants = VARIANT_SUFFIXES
        .iter()
        .map(|&c| replace_last_char(correct, c))
        .chain((1usize..).map(|n| format!("{stem}{n}")));

    for variant in variants {
        if options.len() >= OPTION_COUNT {
            break;
        }
        if !options.contains(&variant) {
            options.push(variant);
        }
    }
}

fn blank_prompt(words: &[&str], answer_index: usize) -> String {
    let sentence = words
        .iter()
        .enumerate()
        .map(|(i, w)| if i == answer_index { BLANK } else { *w })
        .collect::<Vec<_>>()
        .join(" ");
    format!("Fill in the blank: \"{sentence}\"")
}
