// Document-to-record extraction.
// Segmenter first, then one extractor per field, composed by `resume`.
// Every extractor is total: a miss yields None or an empty collection.

pub mod contact;
pub mod dates;
pub mod document;
pub mod education;
pub mod experience;
pub mod resume;
pub mod sections;
pub mod skills;

pub use document::RawDocument;
pub use resume::analyze_resume;

/// Bullet markers recognized at the start of a line (after dash normalization).
pub(crate) const BULLET_MARKERS: &[char] = &['-', '•', '*', '●', '▪', '◦'];

/// Strips one leading bullet marker and surrounding whitespace.
pub(crate) fn strip_bullet(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let rest = trimmed.strip_prefix(BULLET_MARKERS)?;
    Some(rest.trim())
}
