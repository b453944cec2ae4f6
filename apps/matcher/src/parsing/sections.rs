//! Section Segmenter — cuts a document into the block under one header line.

use tracing::debug;

use crate::parsing::document::normalize_text;

/// Lines that close the current section. Matched against the whole line.
pub const SECTION_HEADERS: &[&str] = &[
    "certifications",
    "education",
    "experience",
    "skills",
    "projects",
    "summary",
    "contact",
    "languages",
    "profile",
    "additional information",
    "work experience",
    "professional experience",
    "technical skills",
    "employment history",
];

pub const EDUCATION_HEADERS: &[&str] = &["education"];
pub const SKILLS_HEADERS: &[&str] = &["skills", "technical skills"];
pub const EXPERIENCE_HEADERS: &[&str] =
    &["work experience", "experience", "professional experience"];

/// Canonical form of a would-be header line: trimmed, lowercased, trailing
/// colon dropped, inner whitespace collapsed.
fn header_key(line: &str) -> String {
    let trimmed = line.trim().trim_end_matches(':').trim_end();
    trimmed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// True when the whole line is one of the recognized section headers.
pub fn is_section_header(line: &str) -> bool {
    let key = header_key(line);
    !key.is_empty() && SECTION_HEADERS.contains(&key.as_str())
}

/// Returns the text between the first line equal to any of `names` and the
/// next recognized header (or end of text). Empty when no header matches.
pub fn extract_section(text: &str, names: &[&str]) -> String {
    let normalized = normalize_text(text);
    let lines: Vec<&str> = normalized.lines().collect();

    let Some(start) = lines
        .iter()
        .position(|line| names.contains(&header_key(line).as_str()))
    else {
        debug!(section = ?names, "section header not found");
        return String::new();
    };

    let body: Vec<&str> = lines[start + 1..]
        .iter()
        .take_while(|line| !is_section_header(line))
        .copied()
        .collect();

    body.join("\n").trim_matches('\n').to_string()
}
