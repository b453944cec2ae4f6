//! Free-text date tokens shared by the education and experience extractors.
//! Nothing is normalized to a calendar type; callers keep the source text.

use once_cell::sync::Lazy;
use regex::Regex;

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?";

/// "Jan 2020", "September 2019", "03/2021" or a bare year.
static DATE: Lazy<String> =
    Lazy::new(|| format!(r"(?:\b{MONTH}\s+|\b\d{{1,2}}/)?\b(?:19|20)\d{{2}}\b"));

static DATE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i){}|\b(?:present|current)\b", *DATE)).expect("valid date token regex")
});

static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i){date}\s*(?:-|to|until)\s*(?:{date}|\bpresent\b|\bcurrent\b|\bnow\b|\btoday\b)",
        date = *DATE
    ))
    .expect("valid date range regex")
});

static EXPECTED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\bexpected\s*:?\s*({})", *DATE)).expect("valid expected regex")
});

/// Position and text of a start/end date range within a line.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRange<'a> {
    pub start: usize,
    pub text: &'a str,
}

/// First date range in `line`, e.g. "Jan 2020 - Present" or "2015 - 2019".
pub fn find_date_range(line: &str) -> Option<DateRange<'_>> {
    DATE_RANGE.find(line).map(|m| DateRange {
        start: m.start(),
        text: m.as_str(),
    })
}

/// The date range opening a line, without trailing notes such as
/// "(3 yrs)" or "| Remote".
pub fn leading_date_range(line: &str) -> Option<&str> {
    find_date_range(line.trim())
        .filter(|r| r.start == 0)
        .map(|r| r.text)
}

/// Every date token in source order, including "Present"/"Current".
pub fn date_tokens(line: &str) -> Vec<&str> {
    DATE_TOKEN.find_iter(line).map(|m| m.as_str()).collect()
}

/// The date following "expected", e.g. "May 2025" from "(Expected May 2025)".
pub fn expected_date(line: &str) -> Option<&str> {
    EXPECTED
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Byte offset of the first real date (not "Present") or "expected" marker.
pub fn first_date_offset(line: &str) -> Option<usize> {
    let date = DATE_TOKEN
        .find_iter(line)
        .find(|m| m.as_str().chars().any(|c| c.is_ascii_digit()))
        .map(|m| m.start());
    let expected = EXPECTED.find(line).map(|m| m.start());
    match (date, expected) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

pub fn is_calendar_date(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_year_range() {
        let r = find_date_range("Berlin Jan 2020 - Present").unwrap();
        assert_eq!(r.text, "Jan 2020 - Present");
        assert_eq!(r.start, 7);
    }

    #[test]
    fn test_year_only_range() {
        assert_eq!(find_date_range("2015 - 2019").unwrap().text, "2015 - 2019");
        assert_eq!(find_date_range("Sept. 2018 to June 2019").unwrap().text, "Sept. 2018 to June 2019");
    }

    #[test]
    fn test_leading_date_range() {
        assert_eq!(leading_date_range("  Jan 2020 - Dec 2021 "), Some("Jan 2020 - Dec 2021"));
        assert_eq!(leading_date_range("Jan 2020 - Present (3 yrs)"), Some("Jan 2020 - Present"));
        assert_eq!(leading_date_range("2018 - 2020 | Remote"), Some("2018 - 2020"));
        assert_eq!(leading_date_range("Berlin, Jan 2020 - Dec 2021"), None);
        assert_eq!(leading_date_range("Developed REST APIs"), None);
    }

    #[test]
    fn test_date_tokens_in_order() {
        assert_eq!(date_tokens("Aug 2016 - Present"), vec!["Aug 2016", "Present"]);
        assert_eq!(date_tokens("Graduated 2019"), vec!["2019"]);
        assert!(date_tokens("Bachelor of Arts").is_empty());
    }

    #[test]
    fn test_expected_date() {
        assert_eq!(expected_date("MSc (Expected May 2025)"), Some("May 2025"));
        assert_eq!(expected_date("Expected: 2026"), Some("2026"));
        assert_eq!(expected_date("May 2025"), None);
    }

    #[test]
    fn test_first_date_offset_skips_present() {
        assert_eq!(first_date_offset("BSc Computing, 2019"), Some(15));
        assert_eq!(first_date_offset("Present role"), None);
        assert_eq!(first_date_offset("MBA Expected 2025"), Some(4));
    }

    #[test]
    fn test_large_numbers_are_not_years() {
        assert!(date_tokens("Served 120345 users").is_empty());
        assert!(!is_calendar_date("Present"));
    }
}
