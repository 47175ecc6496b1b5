//! selfquiz-core — Question generation, scoring, and progress tracking.
//!
//! This crate defines the data model, the sentence-based question generator,
//! the assessment session, the progress store, and the recommendation logic
//! that the rest of selfquiz builds on.

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod recommend;
pub mod session;
pub mod statistics;
pub mod store;

pub use config::QuizConfig;
pub use error::QuizError;
pub use model::{Attempt, ProgressLog, Question};
