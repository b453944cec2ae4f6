//! String similarity primitives.
//!
//! `sequence_ratio` is the Ratcliff/Obershelp measure: twice the number of
//! elements in matching contiguous blocks over the total length. It works on
//! any token type, so callers pick chars or words.

use std::collections::HashMap;
use std::hash::Hash;

/// Similarity in [0,1]. Two empty sequences are identical (1.0).
pub fn sequence_ratio<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_elements(a, b) as f64 / total as f64
}

/// Total size of the matching blocks found by recursive longest-match.
fn matching_elements<T: Eq + Hash>(a: &[T], b: &[T]) -> usize {
    let mut b_index: HashMap<&T, Vec<usize>> = HashMap::new();
    for (j, item) in b.iter().enumerate() {
        b_index.entry(item).or_default().push(j);
    }

    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, size) = longest_match(a, &b_index, alo, ahi, blo, bhi);
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + size < ahi && j + size < bhi {
            pending.push((i + size, ahi, j + size, bhi));
        }
    }
    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]`; earliest wins ties.
fn longest_match<T: Eq + Hash>(
    a: &[T],
    b_index: &HashMap<&T, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_size) = (alo, blo, 0);
    // run length of the match ending at b[j], for the previous a element
    let mut run_ending_at: HashMap<usize, usize> = HashMap::new();

    for (i, item) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut next_runs = HashMap::new();
        for &j in b_index.get(item).map(Vec::as_slice).unwrap_or_default() {
            if j < blo {
                continue;
            }
            if j >= bhi {
                break;
            }
            let size = j
                .checked_sub(1)
                .and_then(|prev| run_ending_at.get(&prev))
                .copied()
                .unwrap_or(0)
                + 1;
            next_runs.insert(j, size);
            if size > best_size {
                best_i = i + 1 - size;
                best_j = j + 1 - size;
                best_size = size;
            }
        }
        run_ending_at = next_runs;
    }

    (best_i, best_j, best_size)
}

/// Character-level ratio of two strings.
pub fn char_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    sequence_ratio(&a, &b)
}

/// Lowercases, turns punctuation (other than `+` and `#`) into spaces and
/// sorts the tokens, so word order and casing stop mattering.
pub fn sorted_tokens(s: &str) -> String {
    let cleaned: String = s
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '+' || c == '#' { c } else { ' ' })
        .collect();
    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Word-order-insensitive similarity in [0,1]; 0.0 if either side is blank.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    let (a, b) = (sorted_tokens(a), sorted_tokens(b));
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    char_ratio(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_and_disjoint() {
        assert_eq!(char_ratio("python", "python"), 1.0);
        assert_eq!(char_ratio("abc", "xyz"), 0.0);
        assert_eq!(char_ratio("", ""), 1.0);
    }

    #[test]
    fn test_known_ratio() {
        // "abcd" vs "bcde": block "bcd" -> 2*3/8
        assert!((char_ratio("abcd", "bcde") - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_blocks_are_found_on_both_sides_of_the_longest_match() {
        // blocks "ab" and "cd" around the mismatched middle
        assert!((char_ratio("abXcd", "abYcd") - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_word_level_ratio() {
        let a = ["built", "rest", "apis"];
        let b = ["built", "graphql", "apis"];
        assert!((sequence_ratio(&a, &b) - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_token_sort_ignores_order_and_case() {
        assert_eq!(token_sort_ratio("Machine Learning", "learning machine"), 1.0);
        assert_eq!(token_sort_ratio("SQL", "sql"), 1.0);
    }

    #[test]
    fn test_token_sort_tolerates_plural() {
        assert!(token_sort_ratio("api", "apis") >= 0.8);
        assert!(token_sort_ratio("Docker", "dockers") >= 0.8);
    }

    #[test]
    fn test_token_sort_keeps_language_symbols() {
        assert!(token_sort_ratio("c++", "c#") < 0.8);
    }

    #[test]
    fn test_token_sort_blank_is_zero() {
        assert_eq!(token_sort_ratio("", "python"), 0.0);
        assert_eq!(token_sort_ratio("--", "python"), 0.0);
    }
}
