//! Skills extractor — splits the skills section into short skill tokens.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::parsing::sections::{extract_section, SKILLS_HEADERS};
use crate::parsing::strip_bullet;

/// Pipe, comma, semicolon, colon, bullet dot or a run of 2+ spaces.
static DELIMITER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*(?:[|,;:•]|\s{2,}|\t)\s*").expect("valid skill delimiter regex"));

/// Category labels that show up between skills but are not skills.
const LABEL_STOPLIST: &[&str] = &[
    "languages",
    "programming languages",
    "tools",
    "technical skills",
    "skills",
    "soft skills",
    "frameworks",
    "libraries",
    "technologies",
    "databases",
    "platforms",
    "others",
    "other",
    "tools & technologies",
    "frameworks & libraries",
    "core competencies",
];

const MAX_SKILL_WORDS: usize = 4;

/// Skill tokens from the skills section, in discovery order, not deduplicated.
pub fn extract_skills(text: &str) -> Vec<String> {
    let section = extract_section(text, SKILLS_HEADERS);
    if section.is_empty() {
        return Vec::new();
    }

    // Line breaks are delimiters too; bullets lose their marker.
    let joined = section
        .lines()
        .map(|line| strip_bullet(line).unwrap_or(line).trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    let skills: Vec<String> = DELIMITER
        .split(&joined)
        .map(|token| token.trim().trim_end_matches('.'))
        .filter(|token| is_skill_token(token))
        .map(str::to_string)
        .collect();

    debug!(count = skills.len(), "skills extracted");
    skills
}

fn is_skill_token(token: &str) -> bool {
    let lower = token.to_lowercase();
    token.chars().count() > 2
        && token.split_whitespace().count() <= MAX_SKILL_WORDS
        && !LABEL_STOPLIST.contains(&lower.as_str())
}
