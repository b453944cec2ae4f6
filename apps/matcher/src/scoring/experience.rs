//! Experience Similarity — pluggable, trait-based scorers comparing the
//! candidate's experience narrative with the job description.
//!
//! Default: `LexicalScorer` (word-level sequence ratio, no model needed).
//! `EmbeddingScorer` takes any `Embedder`; `HashingEmbedder` is the local,
//! deterministic one. `KeywordOverlapScorer` counts shared action verbs.
//!
//! `MatchEngine` holds an `Arc<dyn ExperienceScorer>`, chosen at startup via config.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::bail;

use crate::scoring::round2;
use crate::scoring::similarity::sequence_ratio;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap similarity backends without touching the matcher.
pub trait ExperienceScorer: Send + Sync {
    /// Backend label reported in `MatchResult::scorer`.
    fn name(&self) -> &'static str;

    /// Similarity of two non-blank texts, expected in [0,1].
    fn similarity(&self, candidate: &str, job: &str) -> f64;
}

/// Applies the shared contract around any backend: blank input scores 0.0,
/// output is clamped to [0,1] and rounded to two decimals.
pub fn score_experience(scorer: &dyn ExperienceScorer, candidate: &str, job: &str) -> f64 {
    if candidate.trim().is_empty() || job.trim().is_empty() {
        return 0.0;
    }
    let raw = scorer.similarity(candidate, job);
    if raw.is_nan() {
        return 0.0;
    }
    round2(raw.clamp(0.0, 1.0))
}

fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Backend selection
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerKind {
    Lexical,
    Keyword,
    Embedding,
}

impl ScorerKind {
    pub fn build(self) -> Arc<dyn ExperienceScorer> {
        match self {
            ScorerKind::Lexical => Arc::new(LexicalScorer),
            ScorerKind::Keyword => Arc::new(KeywordOverlapScorer::default()),
            ScorerKind::Embedding => Arc::new(EmbeddingScorer::new(HashingEmbedder::default())),
        }
    }
}

impl FromStr for ScorerKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lexical" => Ok(ScorerKind::Lexical),
            "keyword" => Ok(ScorerKind::Keyword),
            "embedding" => Ok(ScorerKind::Embedding),
            other => bail!("unknown experience scorer '{other}' (expected lexical, keyword or embedding)"),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LexicalScorer (default)
// ────────────────────────────────────────────────────────────────────────────

/// Ratio of matching contiguous word runs between the two texts.
pub struct LexicalScorer;

impl ExperienceScorer for LexicalScorer {
    fn name(&self) -> &'static str {
        "lexical"
    }

    fn similarity(&self, candidate: &str, job: &str) -> f64 {
        sequence_ratio(&words(candidate), &words(job))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordOverlapScorer
// ────────────────────────────────────────────────────────────────────────────

const ACTION_VERBS: &[&str] = &["develop", "design", "lead", "build", "test", "deploy", "manage"];

/// Fraction of action-verb stems that appear in both texts.
pub struct KeywordOverlapScorer {
    keywords: Vec<String>,
}

impl Default for KeywordOverlapScorer {
    fn default() -> Self {
        Self::new(ACTION_VERBS.iter().copied())
    }
}

impl KeywordOverlapScorer {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }
}

impl ExperienceScorer for KeywordOverlapScorer {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn similarity(&self, candidate: &str, job: &str) -> f64 {
        if self.keywords.is_empty() {
            return 0.0;
        }
        let (candidate, job) = (candidate.to_lowercase(), job.to_lowercase());
        let shared = self
            .keywords
            .iter()
            .filter(|k| candidate.contains(k.as_str()) && job.contains(k.as_str()))
            .count();
        shared as f64 / self.keywords.len() as f64
    }
}

// ────────────────────────────────────────────────────────────────────────────
// EmbeddingScorer
// ────────────────────────────────────────────────────────────────────────────

/// Text to dense vector. Implementations must be deterministic and cheap to
/// share across threads; any model weights are loaded once, up front.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> Vec<f32>;

    fn dimension(&self) -> usize;
}

/// Cosine similarity of embeddings. Negative cosines clamp to 0.
pub struct EmbeddingScorer<E: Embedder> {
    embedder: E,
}

impl<E: Embedder> EmbeddingScorer<E> {
    pub fn new(embedder: E) -> Self {
        Self { embedder }
    }
}

impl<E: Embedder> ExperienceScorer for EmbeddingScorer<E> {
    fn name(&self) -> &'static str {
        "embedding"
    }

    fn similarity(&self, candidate: &str, job: &str) -> f64 {
        cosine(&self.embedder.embed(candidate), &self.embedder.embed(job))
    }
}

pub fn cosine(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| *x as f64 * *y as f64).sum();
    let norm_a: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).max(0.0)
}

pub const DEFAULT_EMBEDDING_DIM: usize = 512;

/// Feature-hashed bag of unigrams and bigrams with sublinear term frequency,
/// L2 normalized.
pub struct HashingEmbedder {
    dimension: usize,
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIM)
    }
}

impl HashingEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }
}

impl Embedder for HashingEmbedder {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn embed(&self, text: &str) -> Vec<f32> {
        let tokens = words(text);
        let mut counts = vec![0u32; self.dimension];

        let unigrams = tokens.iter().map(|t| fnv1a(t.as_bytes()));
        let bigrams = tokens
            .windows(2)
            .map(|pair| fnv1a(format!("{} {}", pair[0], pair[1]).as_bytes()));
        for hash in unigrams.chain(bigrams) {
            counts[(hash % self.dimension as u64) as usize] += 1;
        }

        let mut vector: Vec<f32> = counts
            .into_iter()
            .map(|c| if c == 0 { 0.0 } else { 1.0 + (c as f32).ln() })
            .collect();
        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            vector.iter_mut().for_each(|v| *v /= norm);
        }
        vector
    }
}

/// 64-bit FNV-1a; stable across runs and platforms.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325, |hash, b| {
        (hash ^ *b as u64).wrapping_mul(0x0100_0000_01b3)
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
