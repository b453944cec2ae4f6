use serde::{Deserialize, Serialize};

use crate::models::NOT_FOUND;

/// Structured résumé produced by `parsing::resume::analyze_resume`.
///
/// Every field defaults, so partially filled maps from callers deserialize
/// cleanly into a record the matcher can use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Discovery order, duplicates allowed; matching dedups.
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    /// Raw text of the experience section, used when no entry has bullets.
    pub experience_text: String,
}

impl ResumeRecord {
    pub fn name_or_sentinel(&self) -> &str {
        self.name.as_deref().unwrap_or(NOT_FOUND)
    }

    pub fn email_or_sentinel(&self) -> &str {
        self.email.as_deref().unwrap_or(NOT_FOUND)
    }

    pub fn phone_or_sentinel(&self) -> &str {
        self.phone.as_deref().unwrap_or(NOT_FOUND)
    }

    /// Experience narrative: all bullets joined in source order, or the raw
    /// section text when the résumé has no bullets at all.
    pub fn experience_narrative(&self) -> String {
        let bullets: Vec<&str> = self
            .experience
            .iter()
            .flat_map(|e| e.bullets.iter().map(String::as_str))
            .collect();

        if bullets.is_empty() {
            self.experience_text.clone()
        } else {
            bullets.join(" ")
        }
    }
}

/// One education paragraph. Dates stay free text ("Jan 2019", "2021", "").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub university: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
}

/// One role. `bullets` keeps source order and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub dates: String,
    pub bullets: Vec<String>,
}
