use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Structured job posting produced by `job::analyzer::analyze_job`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRecord {
    pub title: Option<String>,
    /// Lowercased, sorted.
    pub skills: BTreeSet<String>,
    pub experience_requirement: Option<String>,
    /// Degree keywords found in the posting, sorted.
    pub education: BTreeSet<String>,
    pub responsibilities: Vec<String>,
    /// Lowercased full text with whitespace runs collapsed.
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_serialize_sorted() {
        let job = JobRecord {
            skills: ["sql", "aws", "docker"].iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        };
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["skills"], serde_json::json!(["aws", "docker", "sql"]));
        assert!(json["title"].is_null());
    }

    #[test]
    fn test_partial_map_deserializes_with_defaults() {
        let job: JobRecord =
            serde_json::from_str(r#"{"skills": ["react"], "description": "build uis"}"#).unwrap();
        assert!(job.skills.contains("react"));
        assert!(job.experience_requirement.is_none());
        assert_eq!(job.description, "build uis");
    }
}
