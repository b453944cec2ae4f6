//! Résumé Analyzer — composes the field extractors into one record.

use tracing::debug;

use crate::models::ResumeRecord;
use crate::parsing::contact::{extract_email, extract_name, extract_phone};
use crate::parsing::document::RawDocument;
use crate::parsing::education::extract_education;
use crate::parsing::experience::parse_entries;
use crate::parsing::sections::{extract_section, EXPERIENCE_HEADERS};
use crate::parsing::skills::extract_skills;

/// Builds a `ResumeRecord` from extracted résumé text. Never fails; fields
/// the heuristics cannot find are left empty.
pub fn analyze_resume(text: &str) -> ResumeRecord {
    let doc = RawDocument::new(text);
    let text = doc.text();

    let experience_text = extract_section(text, EXPERIENCE_HEADERS);
    let record = ResumeRecord {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        skills: extract_skills(text),
        education: extract_education(text),
        experience: parse_entries(&experience_text),
        experience_text,
    };

    debug!(
        name = record.name_or_sentinel(),
        skills = record.skills.len(),
        education = record.education.len(),
        experience = record.experience.len(),
        "résumé analyzed"
    );
    record
}
