//! Résumé and job-description extraction and matching engine.
//!
//! `parsing` and `job` turn raw text into structured records, `scoring`
//! compares them, and `MatchEngine` carries the read-only context
//! (vocabulary, experience scorer, threshold) the operations share.

pub mod config;
pub mod errors;
pub mod extraction;
pub mod job;
pub mod models;
pub mod parsing;
pub mod scoring;
pub mod state;
pub mod vocabulary;

pub use errors::{ExtractionError, VocabularyError};
pub use models::{JobRecord, MatchResult, ResumeRecord};
pub use state::MatchEngine;
pub use vocabulary::SkillVocabulary;
