//! Explainability Engine — deterministic resume vs job-description matching.
//!
//! Pipeline: normalize → {tokenize, split sentences} → rank → score → evidence → compose.
//! Every step is a pure function: no I/O, no clock, no randomness, no shared
//! mutable state. Safe to call concurrently from any number of handlers.

pub mod composer;
pub mod evidence;
pub mod handlers;
pub mod models;
pub mod ranker;
pub mod scoring;
pub mod text;
pub mod tokenizer;

use std::sync::OnceLock;

use crate::explain::composer::compose;
use crate::explain::models::ExplainResult;
use crate::explain::ranker::{rank_keywords, JD_KEYWORD_LIMIT, RESUME_KEYWORD_LIMIT};
use crate::explain::text::{normalize, Sentences};
use crate::explain::tokenizer::{Stopwords, Tokenizer};

/// The engine only carries its (immutable) tokenizer configuration.
/// Shared across requests as `Arc<ExplainEngine>`.
#[derive(Debug, Clone, Default)]
pub struct ExplainEngine {
    tokenizer: Tokenizer,
}

impl ExplainEngine {
    pub fn new(stopwords: Stopwords) -> Self {
        Self {
            tokenizer: Tokenizer::new(stopwords),
        }
    }

    pub fn stopwords_version(&self) -> &str {
        self.tokenizer.stopwords().version()
    }

    /// Compares a resume against a job description. Never fails: empty input
    /// degrades to empty keyword sets and a zero score.
    pub fn explain(&self, resume_text: &str, job_description_text: &str) -> ExplainResult {
        let jd_keywords = rank_keywords(
            self.tokenizer.tokenize(&normalize(job_description_text)),
            JD_KEYWORD_LIMIT,
        );
        let resume_keywords = rank_keywords(
            self.tokenizer.tokenize(&normalize(resume_text)),
            RESUME_KEYWORD_LIMIT,
        );
        let sentences: Vec<String> = Sentences::new(resume_text).collect();

        compose(&jd_keywords, &resume_keywords, &sentences)
    }
}

/// Runs the pipeline with the built-in stopword list.
pub fn explain(resume_text: &str, job_description_text: &str) -> ExplainResult {
    static DEFAULT_ENGINE: OnceLock<ExplainEngine> = OnceLock::new();
    DEFAULT_ENGINE
        .get_or_init(ExplainEngine::default)
        .explain(resume_text, job_description_text)
}
