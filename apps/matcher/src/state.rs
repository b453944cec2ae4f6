use std::sync::Arc;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::{Config, DEFAULT_SKILL_THRESHOLD};
use crate::job;
use crate::models::{JobRecord, MatchResult, ResumeRecord};
use crate::parsing;
use crate::scoring::{self, ExperienceScorer, ScorerKind};
use crate::vocabulary::SkillVocabulary;

/// Read-only context shared by every analysis and match.
///
/// Built once at startup and cloned freely across worker threads; nothing in
/// it is mutated after construction.
#[derive(Clone)]
pub struct MatchEngine {
    pub vocabulary: Arc<SkillVocabulary>,
    /// Pluggable experience scorer. Default: LexicalScorer. Swap via EXPERIENCE_SCORER env.
    pub scorer: Arc<dyn ExperienceScorer>,
    pub skill_threshold: f64,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(
            Arc::new(SkillVocabulary::builtin()),
            ScorerKind::Lexical.build(),
            DEFAULT_SKILL_THRESHOLD,
        )
    }
}

impl MatchEngine {
    pub fn new(
        vocabulary: Arc<SkillVocabulary>,
        scorer: Arc<dyn ExperienceScorer>,
        skill_threshold: f64,
    ) -> Self {
        Self {
            vocabulary,
            scorer,
            skill_threshold,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let vocabulary = match &config.skills_vocabulary_path {
            Some(path) => SkillVocabulary::from_json_file(path).with_context(|| {
                format!("failed to load skills vocabulary from {}", path.display())
            })?,
            None => SkillVocabulary::builtin(),
        };
        let scorer = config.experience_scorer.build();

        info!(
            skills = vocabulary.len(),
            scorer = scorer.name(),
            threshold = config.skill_match_threshold,
            "Match engine initialized"
        );

        Ok(Self::new(
            Arc::new(vocabulary),
            scorer,
            config.skill_match_threshold,
        ))
    }

    pub fn analyze_resume(&self, text: &str) -> ResumeRecord {
        parsing::analyze_resume(text)
    }

    pub fn analyze_job(&self, text: &str) -> JobRecord {
        job::analyze_job(text, &self.vocabulary)
    }

    pub fn match_records(&self, resume: &ResumeRecord, job: &JobRecord) -> MatchResult {
        scoring::match_resume_to_job(resume, job, self.scorer.as_ref(), self.skill_threshold)
    }

    /// Matches structured maps from callers. Missing fields take their
    /// defaults; a map that cannot be read at all is treated as empty.
    pub fn match_values(&self, resume: &Value, job: &Value) -> MatchResult {
        let resume: ResumeRecord = record_from_value(resume, "résumé");
        let job: JobRecord = record_from_value(job, "job");
        self.match_records(&resume, &job)
    }
}

fn record_from_value<T: DeserializeOwned + Default>(value: &Value, kind: &str) -> T {
    T::deserialize(value).unwrap_or_else(|e| {
        warn!(kind, error = %e, "Malformed {kind} map, matching against an empty record");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    const RESUME: &str = "Jane Roe\njane.roe@example.com\n+1 555-123-4567\n\n\
Skills\nPython, Docker, PostgreSQL\n\n\
Work Experience\nBackend Engineer | Acme Corp | Berlin\nJan 2020 - Present\n\
- Developed REST APIs in Python\n- Deployed services with Docker\n";

    const JOB: &str = "Backend Developer\nWe need Python and Docker skills plus Kubernetes.\n\
3+ years of experience building APIs.\nYou will develop REST APIs and deploy services.";

    #[test]
    fn test_end_to_end_match() {
        let engine = MatchEngine::default();
        let resume = engine.analyze_resume(RESUME);
        let job = engine.analyze_job(JOB);

        let result = engine.match_records(&resume, &job);
        assert!(result.matched_skills.contains("python"));
        assert!(result.matched_skills.contains("docker"));
        assert!(result.missing_skills.contains("kubernetes"));
        assert!(result.experience_match_score > 0.0);
        assert_eq!(result.scorer, "lexical");
    }

    #[test]
    fn test_match_values_accepts_partial_maps() {
        let engine = MatchEngine::default();
        let result = engine.match_values(
            &json!({ "skills": ["Python", "JavaScript"] }),
            &json!({ "skills": ["python", "react"], "description": "" }),
        );
        assert_eq!(result.skill_match_score, 0.5);
        assert_eq!(result.experience_match_score, 0.0);
        assert_eq!(result.overall_score, 0.25);
    }

    #[test]
    fn test_match_values_degrades_malformed_maps() {
        let engine = MatchEngine::default();
        let result = engine.match_values(&json!("not a map"), &json!({ "skills": 42 }));
        assert_eq!(result, MatchResult {
            scorer: "lexical".to_string(),
            ..Default::default()
        });
    }

    #[test]
    fn test_match_values_is_idempotent() {
        let engine = MatchEngine::default();
        let resume = serde_json::to_value(engine.analyze_resume(RESUME)).unwrap();
        let job = serde_json::to_value(engine.analyze_job(JOB)).unwrap();
        assert_eq!(engine.match_values(&resume, &job), engine.match_values(&resume, &job));
    }

    #[test]
    fn test_injected_vocabulary_and_scorer() {
        let vocabulary = SkillVocabulary::new(["Cobol"]).unwrap();
        let engine = MatchEngine::new(Arc::new(vocabulary), ScorerKind::Keyword.build(), 0.8);
        let job = engine.analyze_job("Mainframe Engineer\nCOBOL and Python required");
        // Vocabulary hits are united with the fixed tech tokens.
        assert!(job.skills.contains("cobol"));
        assert!(job.skills.contains("python"));
        assert_eq!(engine.match_records(&ResumeRecord::default(), &job).scorer, "keyword");
    }

    #[test]
    fn test_from_config_loads_vocabulary_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["Fortran"]"#).unwrap();
        let config = Config {
            skills_vocabulary_path: Some(file.path().to_path_buf()),
            experience_scorer: ScorerKind::Embedding,
            ..Default::default()
        };
        let engine = MatchEngine::from_config(&config).unwrap();
        assert_eq!(engine.vocabulary.len(), 1);
        assert_eq!(engine.scorer.name(), "embedding");
    }

    #[test]
    fn test_from_config_reports_bad_vocabulary() {
        let config = Config {
            skills_vocabulary_path: Some("/nonexistent/skills.json".into()),
            ..Default::default()
        };
        let err = MatchEngine::from_config(&config).err().unwrap();
        assert!(err.to_string().contains("skills vocabulary"));
    }

    #[test]
    fn test_degenerate_documents_still_match() {
        let engine = MatchEngine::default();
        let texts = [
            "|||",
            "Key Responsibilities\n\nRequirements",
            "Skills\n\nEducation\nMBA Expected\n\nWork Experience\n- ",
            "Ingénieure données – Jan 2020 – présent, 東京 experience with  ",
            "About the job",
        ];
        for resume_text in texts {
            for job_text in texts {
                let resume = engine.analyze_resume(resume_text);
                let job = engine.analyze_job(job_text);
                let result = engine.match_records(&resume, &job);
                for score in [
                    result.skill_match_score,
                    result.experience_match_score,
                    result.overall_score,
                ] {
                    assert!((0.0..=1.0).contains(&score), "{resume_text:?} vs {job_text:?}: {score}");
                }
                assert_eq!(result, engine.match_records(&resume, &job));
            }
        }
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MatchEngine>();
    }
}
