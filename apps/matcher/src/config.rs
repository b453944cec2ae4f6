use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::scoring::experience::ScorerKind;

pub const DEFAULT_SKILL_THRESHOLD: f64 = 0.80;

/// Engine configuration loaded from environment variables.
/// Every variable is optional.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON array of skill names. `None` selects the built-in vocabulary.
    pub skills_vocabulary_path: Option<PathBuf>,
    pub skill_match_threshold: f64,
    pub experience_scorer: ScorerKind,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skills_vocabulary_path: None,
            skill_match_threshold: DEFAULT_SKILL_THRESHOLD,
            experience_scorer: ScorerKind::Lexical,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Split out of `from_env`
    /// so tests never touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let skill_match_threshold = match lookup("SKILL_MATCH_THRESHOLD") {
            Some(raw) => parse_threshold(&raw)?,
            None => defaults.skill_match_threshold,
        };

        let experience_scorer = match lookup("EXPERIENCE_SCORER") {
            Some(raw) => raw
                .parse::<ScorerKind>()
                .with_context(|| format!("EXPERIENCE_SCORER has unsupported value '{raw}'"))?,
            None => defaults.experience_scorer,
        };

        Ok(Config {
            skills_vocabulary_path: lookup("SKILLS_VOCABULARY_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            skill_match_threshold,
            experience_scorer,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_threshold(raw: &str) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .context("SKILL_MATCH_THRESHOLD must be a number")?;
    if !(0.0..=1.0).contains(&value) {
        bail!("SKILL_MATCH_THRESHOLD must be between 0 and 1, got {value}");
    }
    Ok(value)
}
