//! Job posting analyzer — builds a `JobRecord` from raw posting text.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::job::requirements::extract_experience_requirement;
use crate::models::JobRecord;
use crate::parsing::document::RawDocument;
use crate::vocabulary::SkillVocabulary;

static ROLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:developer|engineer|intern|analyst|scientist|designer|manager)s?\b")
        .expect("valid role regex")
});

/// Common tech tokens the vocabulary is not trusted to cover.
static TECH_TOKENS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(excel|sql|nosql|aws|azure|gcp|docker|kubernetes|git|linux|python|java|javascript",
        r"|typescript|react|angular|node\.js|html|css|tableau|power bi|jira|figma|rest api|graphql",
        r"|terraform|spark|pandas|machine learning)\b",
    ))
    .expect("valid tech token regex")
});

/// Degree keywords reported in `JobRecord::education`.
static EDUCATION_KEYWORDS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        ("bachelor", r"(?i)\bbachelor"),
        ("master", r"(?i)\bmaster'?s?\b"),
        ("phd", r"(?i)\bph\.?\s?d\b"),
        ("mba", r"(?i)\bmba\b"),
        ("degree", r"(?i)\bdegrees?\b"),
        ("diploma", r"(?i)\bdiplomas?\b"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).expect("valid education regex")))
    .collect()
});

static RESPONSIBILITIES_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:key\s+)?responsibilities\b[\s:]*$").expect("valid responsibilities regex")
});

/// A non-bullet line opening with one of these ends the responsibilities list.
static NEXT_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:preferred|required|requirements?|qualifications?|minimum qualifications",
        r"|experience|education|skills|nice to have|bonus|what we offer|benefits|perks|about",
        r"|who you are|how to apply)\b",
    ))
    .expect("valid section regex")
});

static LIST_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[-•*●▪◦]|\d{1,2}[.)])\s*").expect("valid list marker regex")
});

/// Analyzes a job posting. Never fails; missing parts stay empty.
pub fn analyze_job(text: &str, vocabulary: &SkillVocabulary) -> JobRecord {
    let doc = RawDocument::new(text);
    let lines: Vec<&str> = doc
        .lines()
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();
    let lower = doc.text().to_lowercase();

    let record = JobRecord {
        title: extract_title(&lines),
        skills: extract_job_skills(&lower, vocabulary),
        experience_requirement: extract_experience_requirement(doc.text()),
        education: extract_education_keywords(doc.text()),
        responsibilities: extract_responsibilities(&lines),
        description: lower.split_whitespace().collect::<Vec<_>>().join(" "),
    };

    debug!(
        title = record.title.as_deref().unwrap_or("-"),
        skills = record.skills.len(),
        responsibilities = record.responsibilities.len(),
        "job analyzed"
    );
    record
}

/// First role-like line after an "About the job" marker, else the first line.
pub fn extract_title(lines: &[&str]) -> Option<String> {
    let marker = lines
        .iter()
        .position(|l| l.to_lowercase().contains("about the job"));

    marker
        .and_then(|idx| lines[idx + 1..].iter().find(|l| ROLE.is_match(l)))
        .or_else(|| lines.first())
        .map(|l| l.to_string())
}

/// Vocabulary phrase hits united with the fixed tech-token list.
pub fn extract_job_skills(lower_text: &str, vocabulary: &SkillVocabulary) -> BTreeSet<String> {
    let mut skills = vocabulary.find_in(lower_text);
    skills.extend(
        TECH_TOKENS
            .find_iter(lower_text)
            .map(|m| m.as_str().to_lowercase()),
    );
    skills
}

pub fn extract_education_keywords(text: &str) -> BTreeSet<String> {
    EDUCATION_KEYWORDS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Lines under a "Key Responsibilities" header up to the next section.
pub fn extract_responsibilities(lines: &[&str]) -> Vec<String> {
    let Some(start) = lines.iter().position(|l| RESPONSIBILITIES_HEADER.is_match(l)) else {
        return Vec::new();
    };

    lines[start + 1..]
        .iter()
        .take_while(|line| LIST_MARKER.is_match(line) || !NEXT_SECTION.is_match(line))
        .map(|line| LIST_MARKER.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTING: &str = "Acme Careers
About the job
We are a friendly team.
Backend Engineer (Python)
Key Responsibilities:
- Design and build REST APIs
• Deploy services to AWS with Docker
3. Mentor junior developers
Requirements
- 3+ years of experience with Python and PostgreSQL
- Bachelor's degree in Computer Science
Benefits
Remote work";

    fn vocab() -> SkillVocabulary {
        SkillVocabulary::new(["Python", "PostgreSQL", "Kubernetes", "REST"]).unwrap()
    }

    #[test]
    fn test_title_after_about_the_job_marker() {
        let job = analyze_job(POSTING, &vocab());
        assert_eq!(job.title.as_deref(), Some("Backend Engineer (Python)"));
    }

    #[test]
    fn test_title_falls_back_to_first_line() {
        let job = analyze_job("Senior Platform Lead\nWe build things.", &vocab());
        assert_eq!(job.title.as_deref(), Some("Senior Platform Lead"));

        let job = analyze_job("Acme\nAbout the job\nNo roles here", &vocab());
        assert_eq!(job.title.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_responsibilities_stop_at_next_section() {
        let job = analyze_job(POSTING, &vocab());
        assert_eq!(
            job.responsibilities,
            vec![
                "Design and build REST APIs",
                "Deploy services to AWS with Docker",
                "Mentor junior developers",
            ]
        );
    }

    #[test]
    fn test_experience_bullet_does_not_end_responsibilities() {
        let lines = ["Responsibilities", "- Experience the thrill of on-call", "Skills"];
        assert_eq!(
            extract_responsibilities(&lines),
            vec!["Experience the thrill of on-call"]
        );
    }

    #[test]
    fn test_plain_requirements_line_ends_responsibilities() {
        let lines = [
            "Key Responsibilities",
            "- Build APIs",
            "Own the on-call rotation",
            "Requirements:",
            "- 5 years of Rust",
        ];
        assert_eq!(
            extract_responsibilities(&lines),
            vec!["Build APIs", "Own the on-call rotation"]
        );
    }

    #[test]
    fn test_skills_union_of_vocabulary_and_tech_tokens() {
        let job = analyze_job(POSTING, &vocab());
        for skill in ["python", "postgresql", "rest", "aws", "docker"] {
            assert!(job.skills.contains(skill), "missing {skill}: {:?}", job.skills);
        }
        assert!(!job.skills.contains("kubernetes"));
    }

    #[test]
    fn test_experience_requirement_and_education() {
        let job = analyze_job(POSTING, &vocab());
        assert_eq!(job.experience_requirement.as_deref(), Some("3+ years"));
        assert_eq!(
            job.education,
            ["bachelor", "degree"].iter().map(|s| s.to_string()).collect()
        );
    }

    #[test]
    fn test_description_is_lowercase_normalized() {
        let job = analyze_job("Data  Analyst\n\nSQL   and Excel", &vocab());
        assert_eq!(job.description, "data analyst sql and excel");
        assert!(job.skills.contains("sql"));
        assert!(job.skills.contains("excel"));
    }

    #[test]
    fn test_no_responsibilities_header() {
        assert!(analyze_job("Engineer\nDo stuff", &vocab()).responsibilities.is_empty());
    }
}
