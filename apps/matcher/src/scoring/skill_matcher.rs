//! Skill Matcher — fuzzy intersection of candidate skills with job skills.
//!
//! Each candidate skill claims at most one job skill: the most similar one,
//! provided the similarity reaches the threshold. Scores are denominated in
//! job skills, so matched and missing sets are both job-side spellings.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::scoring::round2;
use crate::scoring::similarity::token_sort_ratio;

/// Jaro-Winkler floor for proposing a candidate skill next to a missing one.
const SUGGESTION_THRESHOLD: f64 = 0.6;

/// Slack for floating-point noise when comparing against the threshold.
const EPSILON: f64 = 1e-9;

/// Spellings folded together before comparison.
const SKILL_ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("k8s", "kubernetes"),
    ("postgres", "postgresql"),
    ("psql", "postgresql"),
    ("golang", "go"),
    ("reactjs", "react"),
    ("react.js", "react"),
    ("nodejs", "node.js"),
    ("node", "node.js"),
    ("vuejs", "vue.js"),
    ("vue", "vue.js"),
    ("ml", "machine learning"),
    ("ai", "artificial intelligence"),
    ("amazon web services", "aws"),
    ("google cloud platform", "google cloud"),
    ("gcp", "google cloud"),
    ("ms excel", "excel"),
    ("microsoft excel", "excel"),
    ("c sharp", "c#"),
    ("cpp", "c++"),
    ("sklearn", "scikit-learn"),
    ("mongo", "mongodb"),
    ("tf", "tensorflow"),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
    /// |matched| / |job skills|, rounded; 0.0 when the job lists none.
    pub score: f64,
    /// missing job skill -> nearest candidate skill
    pub suggestions: BTreeMap<String, String>,
}

fn case_fold<I, S>(skills: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    skills
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Canonical spelling of an already lowercased skill.
pub fn canonical_skill(skill: &str) -> &str {
    SKILL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == skill)
        .map_or(skill, |(_, canonical)| *canonical)
}

/// Matches candidate skills against job skills. `threshold` is on a 0..1 scale.
pub fn match_skills<C, J, S, T>(candidate_skills: C, job_skills: J, threshold: f64) -> SkillMatch
where
    C: IntoIterator<Item = S>,
    J: IntoIterator<Item = T>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let candidates = case_fold(candidate_skills);
    let jobs = case_fold(job_skills);

    let mut matched = BTreeSet::new();
    for candidate in &candidates {
        let candidate_key = canonical_skill(candidate);

        // Ties keep the first job skill in sorted order.
        let mut best: Option<(&String, f64)> = None;
        for job_skill in &jobs {
            let score = token_sort_ratio(candidate_key, canonical_skill(job_skill));
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((job_skill, score));
            }
        }

        if let Some((job_skill, score)) = best {
            if score + EPSILON >= threshold {
                matched.insert(job_skill.clone());
            }
        }
    }

    let missing: BTreeSet<String> = jobs.difference(&matched).cloned().collect();
    let suggestions = suggest_nearest(&missing, &candidates);

    let score = if jobs.is_empty() {
        0.0
    } else {
        round2(matched.len() as f64 / jobs.len() as f64)
    };

    SkillMatch {
        matched,
        missing,
        score,
        suggestions,
    }
}

/// For each missing skill, the candidate skill closest by Jaro-Winkler.
fn suggest_nearest(
    missing: &BTreeSet<String>,
    candidates: &BTreeSet<String>,
) -> BTreeMap<String, String> {
    missing
        .iter()
        .filter_map(|gap| {
            let gap_key = canonical_skill(gap);
            candidates
                .iter()
                .map(|c| (c, strsim::jaro_winkler(gap_key, canonical_skill(c))))
                .filter(|(_, sim)| *sim >= SUGGESTION_THRESHOLD)
                .fold(None, |best: Option<(&String, f64)>, (c, sim)| match best {
                    Some((_, best_sim)) if best_sim >= sim => best,
                    _ => Some((c, sim)),
                })
                .map(|(c, _)| (gap.clone(), c.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_partial_overlap_scores_half() {
        let result = match_skills(["Python", "JavaScript"], ["Python", "React"], 0.8);
        assert_eq!(result.matched, set(&["python"]));
        assert_eq!(result.missing, set(&["react"]));
        assert_eq!(result.score, 0.5);
    }

    #[test]
    fn test_empty_job_skills_score_zero() {
        let result = match_skills(["Python"], Vec::<String>::new(), 0.8);
        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_empty_candidate_skills() {
        let result = match_skills(Vec::<String>::new(), ["sql", "aws"], 0.8);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.missing, set(&["aws", "sql"]));
    }

    #[test]
    fn test_casing_plural_and_word_order_variants_match() {
        let result = match_skills(
            ["REST APIs", "learning machine", "Dockers"],
            ["rest api", "machine learning", "docker"],
            0.8,
        );
        assert_eq!(result.matched, set(&["docker", "machine learning", "rest api"]));
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_synonyms_match() {
        let result = match_skills(["JS", "k8s", "Postgres"], ["javascript", "kubernetes", "postgresql"], 0.8);
        assert_eq!(result.score, 1.0);
    }

    #[test]
    fn test_matched_reports_job_side_spelling() {
        let result = match_skills(["ReactJS"], ["react"], 0.8);
        assert_eq!(result.matched, set(&["react"]));
    }

    #[test]
    fn test_duplicate_candidates_count_once() {
        let result = match_skills(["SQL", "sql", " Sql "], ["sql", "excel"], 0.8);
        assert_eq!(result.matched, set(&["sql"]));
        assert_eq!(result.score, 0.5);
    }

    #[test]
    fn test_threshold_is_respected() {
        let strict = match_skills(["postgres sql"], ["postgresql"], 0.99);
        assert!(strict.matched.is_empty());
        let loose = match_skills(["postgres sql"], ["postgresql"], 0.8);
        assert_eq!(loose.matched, set(&["postgresql"]));
    }

    #[test]
    fn test_suggestions_point_at_near_candidate() {
        let result = match_skills(["TypeScript"], ["typescript 5", "cobol"], 0.95);
        assert!(result.missing.contains("typescript 5"));
        assert_eq!(
            result.suggestions.get("typescript 5").map(String::as_str),
            Some("typescript")
        );
        assert!(!result.suggestions.contains_key("cobol"));
    }

    #[test]
    fn test_matching_is_idempotent() {
        let a = match_skills(["Go", "Rust"], ["rust", "go", "c"], 0.8);
        let b = match_skills(["Go", "Rust"], ["rust", "go", "c"], 0.8);
        assert_eq!(a, b);
    }
}
