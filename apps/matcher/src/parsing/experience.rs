//! Experience extractor — groups the experience section into roles.
//!
//! Each role starts with a header, either delimited on one line
//! (`Title | Company | Location`) or spread positionally over three lines
//! (title, company, location). An optional date line follows, then bullets.

use tracing::debug;

use crate::models::ExperienceEntry;
use crate::parsing::dates::{find_date_range, leading_date_range};
use crate::parsing::sections::{extract_section, EXPERIENCE_HEADERS};
use crate::parsing::strip_bullet;

/// Roles from the experience section, in source order.
pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let section = extract_section(text, EXPERIENCE_HEADERS);
    parse_entries(&section)
}

/// Groups already-segmented experience lines into entries.
pub fn parse_entries(section: &str) -> Vec<ExperienceEntry> {
    let lines: Vec<&str> = section
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut entries = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if strip_bullet(lines[i]).is_some() {
            debug!(line = lines[i], "bullet outside any role skipped");
            i += 1;
            continue;
        }

        let (mut entry, consumed) = if lines[i].matches('|').count() >= 2 {
            (parse_delimited_header(lines[i]), 1)
        } else {
            parse_positional_header(&lines[i..])
        };
        i += consumed;

        if let Some(range) = find_date_range(&entry.location) {
            let dates = range.text.to_string();
            entry.location = trim_separators(&entry.location[..range.start]);
            entry.dates = dates;
        } else if let Some(dates) = lines.get(i).and_then(|l| leading_date_range(l)) {
            entry.dates = dates.to_string();
            i += 1;
        }

        while let Some(bullet) = lines.get(i).and_then(|l| strip_bullet(l)) {
            if !bullet.is_empty() {
                entry.bullets.push(bullet.to_string());
            }
            i += 1;
        }

        entries.push(entry);
    }

    entries
}

/// `Title | Company | Location[ | more]` on a single line.
fn parse_delimited_header(line: &str) -> ExperienceEntry {
    let parts: Vec<&str> = line.split('|').map(str::trim).collect();
    ExperienceEntry {
        title: parts[0].to_string(),
        company: parts.get(1).copied().unwrap_or_default().to_string(),
        location: parts.get(2..).map(|rest| rest.join(" | ")).unwrap_or_default(),
        ..Default::default()
    }
}

/// Fallback when the header has no delimiters: the next two lines are taken
/// as company and location. Bullet lines are never consumed as header lines.
/// Returns the entry and the number of lines consumed.
fn parse_positional_header(lines: &[&str]) -> (ExperienceEntry, usize) {
    let mut entry = ExperienceEntry {
        title: lines[0].to_string(),
        ..Default::default()
    };
    let mut consumed = 1;

    let next_header_line = |consumed: &mut usize| -> Option<String> {
        let line = lines.get(*consumed)?;
        if strip_bullet(line).is_some() {
            return None;
        }
        *consumed += 1;
        Some(line.to_string())
    };

    if let Some(company) = next_header_line(&mut consumed) {
        if leading_date_range(&company).is_some() {
            // Title directly followed by dates: nothing positional to take.
            consumed -= 1;
            return (entry, consumed);
        }
        entry.company = company;
        if let Some(location) = next_header_line(&mut consumed) {
            entry.location = location;
        }
    }

    (entry, consumed)
}

fn trim_separators(s: &str) -> String {
    s.trim_end_matches(|c: char| c.is_whitespace() || matches!(c, ',' | '|' | '-' | '(' | '·'))
        .trim()
        .to_string()
}
