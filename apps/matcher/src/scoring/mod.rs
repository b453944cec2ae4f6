// Matching and scoring.
// Skill matcher (fuzzy set intersection), experience scorers behind a trait,
// and the aggregator that folds both into one MatchResult.

pub mod aggregate;
pub mod experience;
pub mod similarity;
pub mod skill_matcher;

pub use aggregate::{match_resume_to_job, overall_score};
pub use experience::{ExperienceScorer, ScorerKind};
pub use skill_matcher::{match_skills, SkillMatch};

/// Rounds to two decimals, the precision every reported score uses.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
