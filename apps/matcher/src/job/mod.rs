// Job Description Analyzer
// Implements: title, experience requirement cascade, education keywords,
// responsibilities and vocabulary-backed skill detection.

pub mod analyzer;
pub mod requirements;

pub use analyzer::analyze_job;
pub use requirements::extract_experience_requirement;
