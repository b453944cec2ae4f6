//! Contact block extractors: name, email, phone.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::parsing::sections::is_section_header;

/// Names are looked for only in the header block; further down, company and
/// school names look too much like people.
const NAME_SCAN_LINES: usize = 5;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("valid email regex")
});

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\d{1,3}[ \t-]?\(?\d{1,4}\)?(?:[ \t-]?\d{2,4}){2,4}").expect("valid phone regex")
});

/// Words that disqualify a header fragment from being a person's name.
const NON_NAME_WORDS: &[&str] = &[
    "resume", "curriculum", "vitae", "cv", "engineer", "developer", "analyst", "scientist",
    "designer", "manager", "intern", "consultant", "university", "college", "institute", "inc",
    "ltd", "llc", "gmbh", "street", "road", "avenue", "linkedin", "github", "portfolio", "email",
    "phone", "mobile", "address",
];

/// First e-mail address in the text.
pub fn extract_email(text: &str) -> Option<String> {
    let email = EMAIL.find(text).map(|m| m.as_str().to_string());
    if email.is_none() {
        debug!("no email address found");
    }
    email
}

/// First phone-like digit run. No plausibility checks are made.
pub fn extract_phone(text: &str) -> Option<String> {
    let phone = PHONE.find(text).map(|m| m.as_str().trim().to_string());
    if phone.is_none() {
        debug!("no phone number found");
    }
    phone
}

/// Person name from the first lines of the document.
pub fn extract_name(text: &str) -> Option<String> {
    let name = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(NAME_SCAN_LINES)
        .flat_map(|line| line.split(['|', ',', '•', '\t']))
        .map(str::trim)
        .filter(|fragment| looks_like_person(fragment))
        // Phone numbers glued to a name ("John Doe +49 170...") are rejected.
        .find(|candidate| !candidate.chars().any(|c| c.is_ascii_digit() || c == '+'))
        .map(str::to_string);

    if name.is_none() {
        debug!("no person name found in header block");
    }
    name
}

/// Shape test standing in for a person-entity recognizer: two to four words,
/// starting capitalized with at least two capitalized, no contact markup.
fn looks_like_person(fragment: &str) -> bool {
    if fragment.contains('@') || fragment.contains("://") || is_section_header(fragment) {
        return false;
    }

    let words: Vec<&str> = fragment.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) {
        return false;
    }

    let capitalized = |word: &&str| word.chars().next().is_some_and(char::is_uppercase);
    if !words.first().is_some_and(capitalized) || words.iter().filter(|w| capitalized(*w)).count() < 2 {
        return false;
    }

    words.iter().all(|word| {
        let lower = word.to_lowercase();
        let core = lower.trim_matches(|c: char| c == '.' || c == ',');
        word.chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '.' | '\'' | '-' | '+' | '(' | ')'))
            && !NON_NAME_WORDS.contains(&core)
    })
}
