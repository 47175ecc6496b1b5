//! Configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::generator::GeneratorConfig;

/// Top-level selfquiz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Directory holding the progress store.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Name of the durable entry inside `data_dir`.
    #[serde(default = "default_store_key")]
    pub store_key: String,
    /// Maximum questions per assessment.
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    /// Minimum trimmed length of a sentence candidate, in characters.
    #[serde(default = "default_min_sentence_chars")]
    pub min_sentence_chars: usize,
    /// Minimum words a sentence needs to become a question.
    #[serde(default = "default_min_words")]
    pub min_words: usize,
    /// Random draws allowed before falling back to fixed distractor variants.
    #[serde(default = "default_max_distractor_draws")]
    pub max_distractor_draws: usize,
    /// Maximum entries in the review list.
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,
    /// Score change, in percentage points, that counts as a trend.
    #[serde(default = "default_trend_threshold")]
    pub trend_threshold: f64,
}

fn default_data_dir() -> PathBuf {
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("selfquiz"),
        Err(_) => PathBuf::from(".selfquiz"),
    }
}
fn default_store_key() -> String {
    "userData".to_string()
}
fn default_question_count() -> usize {
    5
}
fn default_min_sentence_chars() -> usize {
    11
}
fn default_min_words() -> usize {
    5
}
fn default_max_distractor_draws() -> usize {
    64
}
fn default_recommendation_limit() -> usize {
    5
}
fn default_trend_threshold() -> f64 {
    5.0
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            store_key: default_store_key(),
            question_count: default_question_count(),
            min_sentence_chars: default_min_sentence_chars(),
            min_words: default_min_words(),
            max_distractor_draws: default_max_distractor_draws(),
            recommendation_limit: default_recommendation_limit(),
            trend_threshold: default_trend_threshold(),
        }
    }
}

impl QuizConfig {
    /// Generator settings derived from this config.
    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            question_count: self.question_count,
            min_sentence_chars: self.min_sentence_chars,
            min_words: self.min_words,
            max_distractor_draws: self.max_distractor_draws,
        }
    }

    /// Path of the progress store file.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.store_key))
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `selfquiz.toml` in the current directory
/// 2. `~/.config/selfquiz/config.toml`
///
/// Environment variable override: `SELFQUIZ_DATA_DIR`.
pub fn load_config() -> Result<QuizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("selfquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            config_home()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => QuizConfig::default(),
    };

    if let Ok(dir) = std::env::var("SELFQUIZ_DATA_DIR") {
        if !dir.is_empty() {
            config.data_dir = PathBuf::from(dir);
        }
    }

    Ok(config)
}

/// Parse and validate a TOML config string.
pub fn parse_config(content: &str) -> Result<QuizConfig> {
    let config: QuizConfig = toml::from_str(content)?;
    anyhow::ensure!(config.question_count >= 1, "question_count must be at least 1");
    anyhow::ensure!(config.min_words >= 1, "min_words must be at least 1");
    anyhow::ensure!(
        config.recommendation_limit >= 1,
        "recommendation_limit must be at least 1"
    );
    anyhow::ensure!(!config.store_key.trim().is_empty(), "store_key must not be empty");
    anyhow::ensure!(
        config.trend_threshold >= 0.0,
        "trend_threshold must not be negative"
    );
    Ok(config)
}

fn config_home() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("selfquiz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizConfig::default();
        assert_eq!(config.store_key, "userData");
        assert_eq!(config.question_count, 5);
        assert_eq!(config.min_sentence_chars, 11);
        assert_eq!(config.recommendation_limit, 5);
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config(
            r#"
data_dir = "/tmp/quiz"
question_count = 3
"#,
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/quiz"));
        assert_eq!(config.question_count, 3);
        assert_eq!(config.min_words, 5);
        assert_eq!(config.store_path(), PathBuf::from("/tmp/quiz/userData.json"));
    }

    #[test]
    fn rejects_zero_questions() {
        assert!(parse_config("question_count = 0").is_err());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = load_config_from(Some(Path::new("no/such/selfquiz.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selfquiz.toml");
        std::fs::write(&path, "store_key = \"progress\"\nrecommendation_limit = 3\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.store_key, "progress");
        assert_eq!(config.recommendation_limit, 3);
    }
}
