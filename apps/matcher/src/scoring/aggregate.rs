//! Match Aggregator — folds the skill match and the experience similarity
//! into one `MatchResult`.

use tracing::debug;

use crate::models::{JobRecord, MatchResult, ResumeRecord};
use crate::scoring::experience::{score_experience, ExperienceScorer};
use crate::scoring::round2;
use crate::scoring::skill_matcher::match_skills;

/// Unweighted mean of the two component scores, rounded to two decimals.
pub fn overall_score(skill_match_score: f64, experience_match_score: f64) -> f64 {
    round2((skill_match_score + experience_match_score) / 2.0)
}

/// Matches one résumé against one job. Pure: identical inputs always produce
/// an identical result.
pub fn match_resume_to_job(
    resume: &ResumeRecord,
    job: &JobRecord,
    scorer: &dyn ExperienceScorer,
    threshold: f64,
) -> MatchResult {
    let skills = match_skills(&resume.skills, &job.skills, threshold);
    let experience_match_score =
        score_experience(scorer, &resume.experience_narrative(), &job.description);

    let overall = overall_score(skills.score, experience_match_score);
    debug!(
        skill = skills.score,
        experience = experience_match_score,
        overall,
        scorer = scorer.name(),
        "Scored résumé against job"
    );

    MatchResult {
        matched_skills: skills.matched,
        missing_skills: skills.missing,
        skill_match_score: skills.score,
        experience_match_score,
        overall_score: overall,
        suggestions: skills.suggestions,
        scorer: scorer.name().to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
