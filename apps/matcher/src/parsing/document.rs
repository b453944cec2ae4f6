/// Dash variants folded to ASCII hyphen before any heuristic runs.
const DASHES: &[char] = &[
    '\u{2010}', // hyphen
    '\u{2011}', // non-breaking hyphen
    '\u{2012}', // figure dash
    '\u{2013}', // en dash
    '\u{2014}', // em dash
    '\u{2015}', // horizontal bar
    '\u{2212}', // minus
    '\u{FE63}', // small hyphen-minus
    '\u{FF0D}', // fullwidth hyphen-minus
];

/// Immutable text blob with a line-split view.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    text: String,
    lines: Vec<String>,
}

impl RawDocument {
    pub fn new(text: &str) -> Self {
        let text = normalize_text(text);
        let lines = text.split('\n').map(str::to_string).collect();
        Self { text, lines }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Unifies line endings and folds Unicode dashes to `-`.
pub fn normalize_text(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .chars()
        .map(|c| if DASHES.contains(&c) { '-' } else { c })
        .collect()
}
