//! Skills vocabulary — the process-wide, read-only list of known skill names.
//!
//! Loaded once at startup (built-in list or a JSON array file) and shared
//! behind an `Arc` by every analyzer.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use aho_corasick::AhoCorasick;
use tracing::info;

use crate::errors::VocabularyError;

const BUILTIN_SKILLS: &[&str] = &[
    // Languages
    "Python", "Java", "JavaScript", "TypeScript", "C++", "C#", "Go", "Rust", "Ruby", "PHP",
    "Kotlin", "Swift", "Scala", "Perl", "Haskell", "Elixir", "Dart", "Lua", "MATLAB",
    "Objective-C", "Bash", "PowerShell", "SQL", "HTML", "CSS", "Sass", "Solidity", "Julia",
    // Web and backend frameworks
    "React", "Angular", "Vue.js", "Svelte", "Next.js", "Node.js", "Express", "Django", "Flask",
    "FastAPI", "Spring", "Spring Boot", "Ruby on Rails", "Laravel", "ASP.NET", ".NET",
    "jQuery", "Redux", "GraphQL", "REST", "gRPC", "Tailwind CSS", "Bootstrap",
    // Data and ML
    "Pandas", "NumPy", "SciPy", "scikit-learn", "TensorFlow", "PyTorch", "Keras", "Spark",
    "Hadoop", "Airflow", "Kafka", "Tableau", "Power BI", "Excel", "Machine Learning",
    "Deep Learning", "Data Analysis", "Data Science", "Natural Language Processing",
    "Computer Vision", "Statistics", "dbt", "Snowflake", "BigQuery", "Databricks",
    // Databases
    "PostgreSQL", "MySQL", "SQLite", "MongoDB", "Redis", "Elasticsearch", "Cassandra",
    "DynamoDB", "Oracle", "Microsoft SQL Server", "Firebase", "Supabase", "Neo4j",
    // Cloud and ops
    "AWS", "Azure", "Google Cloud", "GCP", "Docker", "Kubernetes", "Terraform", "Ansible",
    "Jenkins", "GitHub Actions", "GitLab CI", "CI/CD", "Linux", "Nginx", "Prometheus",
    "Grafana", "Helm", "Serverless", "Microservices",
    // Tools and practice
    "Git", "Jira", "Figma", "Postman", "Agile", "Scrum", "Unit Testing", "Selenium",
    "Cypress", "Jest", "Pytest", "Webpack", "Vite", "Unity", "Unreal Engine", "Android",
    "iOS", "Flutter", "React Native", "Xamarin", "Photoshop", "Illustrator",
];

/// Ordered list of canonical skill names with a case-insensitive phrase matcher.
pub struct SkillVocabulary {
    skills: Vec<String>,
    matcher: AhoCorasick,
}

impl SkillVocabulary {
    /// Builds a vocabulary. Blank names are dropped and later duplicates
    /// (ignoring case) lose to the first spelling.
    pub fn new<I, S>(skills: I) -> Result<Self, VocabularyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let skills: Vec<String> = skills
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.to_lowercase()))
            .collect();

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&skills)
            .map_err(|e| VocabularyError::Matcher(e.to_string()))?;

        Ok(Self { skills, matcher })
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN_SKILLS).expect("built-in skill list builds a matcher")
    }

    /// Parses a JSON array of strings, the format of a generated skills list.
    pub fn from_json_str(json: &str) -> Result<Self, VocabularyError> {
        let skills: Vec<String> = serde_json::from_str(json)?;
        Self::new(skills)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, VocabularyError> {
        let raw = std::fs::read_to_string(path)?;
        let vocabulary = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            skills = vocabulary.len(),
            "skills vocabulary loaded"
        );
        Ok(vocabulary)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Every vocabulary skill that occurs in `text` as a whole phrase,
    /// lowercased. "Java" is not found inside "JavaScript".
    pub fn find_in(&self, text: &str) -> BTreeSet<String> {
        self.matcher
            .find_overlapping_iter(text)
            .filter(|m| is_phrase_boundary(text, m.start(), m.end()))
            .map(|m| self.skills[m.pattern().as_usize()].to_lowercase())
            .collect()
    }
}

fn is_phrase_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

impl std::fmt::Debug for SkillVocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillVocabulary")
            .field("skills", &self.skills.len())
            .finish()
    }
}
