//! Education extractor — one entry per blank-line separated paragraph that
//! names a degree.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::models::EducationEntry;
use crate::parsing::dates::{date_tokens, expected_date, first_date_offset, is_calendar_date};
use crate::parsing::sections::{extract_section, EDUCATION_HEADERS};

static BLANK_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n[ \t]*\n").expect("valid blank line regex"));

static DEGREE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)\b(?:bachelor|masters?|ph\.?\s?d|doctorate|mba|msc|bsc|m\.?\s?tech|b\.?\s?tech",
        r"|m\.\s?sc|b\.\s?sc|b\.?\s?eng|m\.?\s?eng|b\.?\s?com|diploma|associate\s+degree)\b",
        r"|\b(?:b\.a\.|m\.a\.|b\.s\.|m\.s\.|b\.e\.|m\.e\.)",
    ))
    .expect("valid degree regex")
});

static INSTITUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:university|college|institute|school|academy|polytechnic)\b")
        .expect("valid institution regex")
});

/// Education entries from the education section. Paragraphs without a
/// degree keyword are skipped.
pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let section = extract_section(text, EDUCATION_HEADERS);
    if section.is_empty() {
        return Vec::new();
    }

    BLANK_RUN.split(&section).filter_map(parse_block).collect()
}

fn parse_block(block: &str) -> Option<EducationEntry> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let Some(degree_idx) = lines.iter().position(|l| DEGREE.is_match(l)) else {
        if !lines.is_empty() {
            debug!(first_line = lines[0], "education block without degree keyword skipped");
        }
        return None;
    };
    let degree_line = lines[degree_idx];

    let mut entry = EducationEntry::default();
    let other_lines: Vec<&str> = lines
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != degree_idx)
        .map(|(_, l)| *l)
        .collect();
    let separate_institution = other_lines
        .iter()
        .find(|l| l.contains('|') || l.contains(','))
        .or_else(|| other_lines.iter().find(|l| INSTITUTION.is_match(l)));

    if degree_line.contains('|') || (separate_institution.is_none() && degree_line.contains(',')) {
        // "Degree | Institution | Location | 2015 - 2019" on one line.
        let mut parts = split_parts(degree_line).into_iter();
        entry.degree = parts.next().unwrap_or_default();
        if let Some(institution) = parts.next() {
            entry.university = institution;
            entry.location = parts.collect::<Vec<_>>().join(", ");
        }
    } else {
        entry.degree = strip_dates(degree_line);
        if let Some(line) = separate_institution {
            let mut parts = split_parts(line).into_iter();
            entry.university = parts.next().unwrap_or_default();
            entry.location = parts.collect::<Vec<_>>().join(", ");
        }
    }

    let (start, end) = scan_dates(&lines);
    entry.start_date = start;
    entry.end_date = end;

    Some(entry)
}

/// Splits on `|` and `,`, dropping pure date fragments and trailing dates.
fn split_parts(line: &str) -> Vec<String> {
    line.split(['|', ','])
        .map(strip_dates)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Cuts a trailing date fragment ("..., May 2019", "(Expected 2025)").
fn strip_dates(fragment: &str) -> String {
    let head = match first_date_offset(fragment) {
        Some(offset) => &fragment[..offset],
        None => fragment,
    };
    head.trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '|' | '-' | '(' | ':'))
        .trim()
        .to_string()
}

/// Start/end dates across every line of the block. A line with two tokens is
/// a range; otherwise "expected <date>" beats a single bare date for the end.
fn scan_dates(lines: &[&str]) -> (String, String) {
    let mut range: Option<(String, String)> = None;
    let mut expected: Option<String> = None;
    let mut single: Option<String> = None;

    for line in lines {
        if expected.is_none() {
            expected = expected_date(line).map(str::to_string);
        }
        let tokens = date_tokens(line);
        if tokens.len() >= 2 {
            if range.is_none() {
                range = Some((tokens[0].to_string(), tokens[1].to_string()));
            }
        } else if let Some(token) = tokens.first() {
            if single.is_none() && is_calendar_date(token) {
                single = Some(token.to_string());
            }
        }
    }

    match range {
        Some((start, end)) => (start, end),
        None => (String::new(), expected.or(single).unwrap_or_default()),
    }
}
