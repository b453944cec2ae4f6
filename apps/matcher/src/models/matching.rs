use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Outcome of matching one résumé against one job.
///
/// Derived only; every collection is ordered so repeated runs over the same
/// inputs serialize byte-for-byte identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Job-side spellings of the skills the candidate covers.
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
    pub skill_match_score: f64,
    pub experience_match_score: f64,
    pub overall_score: f64,
    /// missing job skill -> closest candidate skill, when one is close enough.
    pub suggestions: BTreeMap<String, String>,
    /// Experience scorer backend, for transparency.
    pub scorer: String,
}

impl MatchResult {
    /// Builds a human-readable recommendation from the overall score and gaps.
    pub fn recommendation(&self) -> String {
        let top_gaps: Vec<&str> = self
            .missing_skills
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        let percent = (self.overall_score * 100.0).round() as u32;

        if self.overall_score >= 0.8 {
            "Strong fit. The résumé covers the key job requirements.".to_string()
        } else if top_gaps.is_empty() {
            format!("Partial fit ({percent}/100). Skills are covered; experience overlap is limited.")
        } else if self.overall_score >= 0.5 {
            format!(
                "Moderate fit ({percent}/100). Missing skills: {}.",
                top_gaps.join(", ")
            )
        } else {
            format!(
                "Low fit ({percent}/100). Significant gaps: {}.",
                top_gaps.join(", ")
            )
        }
    }
}
