//! Progress store: an append-only attempt log behind a single named entry.
//!
//! The whole log is read on every load and rewritten on every append. There
//! is no coordination between writers: two processes appending at the same
//! time can race and one attempt may be lost.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::{Attempt, ProgressLog};

/// Durable storage for the attempt history.
pub trait ProgressStore {
    /// Load the full log. Missing or unreadable content yields an empty log.
    fn load(&self) -> ProgressLog;

    /// Append one attempt and persist the full log.
    fn append(&mut self, attempt: Attempt) -> Result<()>;
}

/// Parse a persisted log, treating malformed content as empty.
pub fn parse_log(raw: &str) -> ProgressLog {
    match serde_json::from_str(raw) {
        Ok(log) => log,
        Err(e) => {
            tracing::warn!(error = %e, "progress log is malformed, starting from an empty log");
            ProgressLog::default()
        }
    }
}

fn serialize_log(log: &ProgressLog) -> Result<String> {
    serde_json::to_string(log).context("failed to serialize progress log")
}

/// A store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The entry named `key` inside `dir`, stored as `<dir>/<key>.json`.
    pub fn in_dir(dir: &Path, key: &str) -> Self {
        Self::new(dir.join(format!("{key}.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProgressStore for JsonFileStore {
    fn load(&self) -> ProgressLog {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => parse_log(&raw),
            Err(e) if e.kind() == ErrorKind::NotFound => ProgressLog::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read progress log");
                ProgressLog::default()
            }
        }
    }

    fn append(&mut self, attempt: Attempt) -> Result<()> {
        let mut log = self.load();
        log.assessments.push(attempt);
        let json = serialize_log(&log)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create data directory {}", parent.display())
                })?;
            }
        }
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write progress log to {}", self.path.display()))?;

        tracing::info!(path = %self.path.display(), attempts = log.len(), "saved attempt");
        Ok(())
    }
}

/// An in-process store holding the raw serialized entry.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing raw entry, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> ProgressLog {
        self.raw.as_deref().map(parse_log).unwrap_or_default()
    }

    fn append(&mut self, attempt: Attempt) -> Result<()> {
        let mut log = self.load();
        log.assessments.push(attempt);
        self.raw = Some(serialize_log(&log)?);
        Ok(())
    }
}
