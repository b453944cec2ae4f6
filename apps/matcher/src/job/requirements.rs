//! Experience requirement — an ordered cascade of (pattern, handler) rules.
//!
//! Rules are tried in list order and the first one that matches anywhere in
//! the text wins. Explicit durations come first, then the fixed qualifier
//! phrasings, then the generic "experience with" forms.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

type Handler = fn(&Captures<'_>) -> String;

struct RequirementRule {
    name: &'static str,
    pattern: Regex,
    handler: Handler,
}

impl RequirementRule {
    fn new(name: &'static str, pattern: &str, handler: Handler) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("valid requirement regex"),
            handler,
        }
    }
}

/// Phrase runs until sentence or line end.
const PHRASE: &str = r"[^.;\n]+";

static RULES: Lazy<Vec<RequirementRule>> = Lazy::new(|| {
    vec![
        RequirementRule::new(
            "explicit_years",
            r"(?i)\b(\d+\s*(?:\+|-\s*\d+|to\s+\d+)?\s*\+?\s*years?)(?:\s+of)?(?:\s+[\w/+#.-]+){0,3}?\s+experience",
            first_group,
        ),
        RequirementRule::new(
            "hands_on",
            &format!(r"(?i)\bhands-on\s+experience\s+(?:with|in|of)\s+{PHRASE}"),
            whole_match,
        ),
        RequirementRule::new(
            "qualified_experience",
            &format!(
                r"(?i)\b(?:proven|preferred|demonstrated|strong|solid)\s+experience\s+(?:with|in)\s+{PHRASE}"
            ),
            whole_match,
        ),
        RequirementRule::new(
            "experience_with",
            &format!(r"(?i)\bexperience\s+(?:with|in|using)\s+{PHRASE}"),
            whole_match,
        ),
        RequirementRule::new(
            "background",
            &format!(r"(?i)\bbackground\s+(?:in|with)\s+{PHRASE}"),
            whole_match,
        ),
        RequirementRule::new(
            "duration_range",
            r"(?i)\b(\d+\s*(?:-|to)\s*\d+\s*(?:months?|weeks?))\b",
            first_group,
        ),
    ]
});

static INTERNSHIP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bintern(?:ship)?s?\b").expect("valid internship regex"));

static DURATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d+\s*(?:months?|weeks?))\b").expect("valid duration regex"));

fn first_group(caps: &Captures<'_>) -> String {
    clean_phrase(caps.get(1).map_or("", |m| m.as_str()))
}

fn whole_match(caps: &Captures<'_>) -> String {
    clean_phrase(caps.get(0).map_or("", |m| m.as_str()))
}

fn clean_phrase(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_end_matches([',', ':', ')'])
        .to_string()
}

/// First matching requirement in priority order; internship postings with
/// only a bare duration fall through to `Internship: <duration>`.
pub fn extract_experience_requirement(text: &str) -> Option<String> {
    RULES
        .iter()
        .find_map(|rule| {
            rule.pattern.captures(text).map(|caps| {
                debug!(rule = rule.name, "experience requirement matched");
                (rule.handler)(&caps)
            })
        })
        .or_else(|| internship_duration(text).map(|d| format!("Internship: {d}")))
}

fn internship_duration(text: &str) -> Option<String> {
    if !INTERNSHIP.is_match(text) {
        return None;
    }
    DURATION
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| clean_phrase(m.as_str()))
}
