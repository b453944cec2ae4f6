pub mod job;
pub mod matching;
pub mod resume;

pub use job::JobRecord;
pub use matching::MatchResult;
pub use resume::{EducationEntry, ExperienceEntry, ResumeRecord};

/// Rendered in place of an absent field in human-facing output.
pub const NOT_FOUND: &str = "not found";
