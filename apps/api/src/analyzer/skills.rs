//! Skill gap analysis: matches a fixed skill vocabulary against the processed
//! job description and resume, then reports the intersection (key strengths)
//! and the JD-only terms (missing skills).
//!
//! In production this could be replaced with a proper NER model; a curated
//! vocabulary keeps the result deterministic and explainable.

use std::collections::HashSet;
use std::path::Path;

use crate::analyzer::preprocess::tokenize;
use crate::errors::AppError;

/// Cap on reported strengths/missing skills, matching the UI.
pub const MAX_SKILLS_DISPLAY: usize = 10;

/// Built-in vocabulary: common languages, frameworks, tools, and practices
/// seen across tech job descriptions. Overridable via `SKILLS_PATH`.
const BUILTIN_SKILLS: &[&str] = &[
    // languages
    "python", "javascript", "typescript", "java", "go", "rust", "ruby", "php",
    "swift", "kotlin", "scala", "sql", "bash", "html", "css", "graphql",
    // frameworks and libraries
    "react", "angular", "vue", "django", "flask", "fastapi", "express", "spring", "rails",
    "laravel", "tensorflow", "pytorch", "scikit-learn", "pandas", "numpy", "spark", "kafka",
    "rabbitmq", "airflow", "tokio", "axum",
    // infrastructure and tools
    "git", "docker", "kubernetes", "helm", "terraform", "ansible", "jenkins", "aws", "azure",
    "gcp", "nginx", "redis", "elasticsearch", "grafana", "prometheus", "mysql", "postgresql",
    "mongodb", "sqlite", "cassandra", "dynamodb", "linux", "webpack", "jest", "cypress",
    "selenium", "pytest",
    // practices and domains
    "machine learning", "deep learning", "natural language processing", "computer vision",
    "data science", "data analysis", "data engineering", "etl", "rest", "microservices",
    "distributed systems", "cloud computing", "serverless", "devops", "ci/cd", "automation",
    "security", "authentication", "caching", "load balancing", "scalability", "monitoring",
    "unit testing", "system design", "api design", "code review", "tdd",
    // soft skills
    "leadership", "communication", "teamwork", "collaboration", "problem solving",
    "critical thinking", "time management", "mentoring", "project management", "agile",
    "scrum", "stakeholder management",
];

/// A vocabulary term: the display label plus its normalized token phrase.
#[derive(Debug, Clone)]
struct SkillTerm {
    label: String,
    tokens: Vec<String>,
}

/// The skill vocabulary matched against processed texts. Terms are
/// preprocessed with the same pipeline as documents so plural and punctuation
/// differences do not break matching.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: Vec<SkillTerm>,
}

impl SkillVocabulary {
    pub fn builtin() -> Self {
        Self::from_terms(BUILTIN_SKILLS.iter().map(|s| s.to_string()))
    }

    /// Loads a newline-separated vocabulary file. Blank lines and `#` comments
    /// are skipped.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let vocab = Self::from_terms(
            content
                .lines()
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        );
        if vocab.is_empty() {
            return Err(AppError::Validation(format!(
                "Skill vocabulary file {} contains no terms",
                path.display()
            )));
        }
        Ok(vocab)
    }

    fn from_terms(labels: impl Iterator<Item = String>) -> Self {
        let mut seen: HashSet<Vec<String>> = HashSet::new();
        let mut terms = Vec::new();
        for label in labels {
            let tokens = tokenize(&label);
            if tokens.is_empty() || !seen.insert(tokens.clone()) {
                continue;
            }
            terms.push(SkillTerm {
                label: label.to_lowercase(),
                tokens,
            });
        }
        SkillVocabulary { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the labels of vocabulary terms present in a processed token
    /// string, in vocabulary order. Multi-word terms must appear as a
    /// contiguous token phrase.
    pub fn matches_in(&self, processed: &str) -> Vec<&str> {
        let tokens: Vec<&str> = processed.split_whitespace().collect();
        self.terms
            .iter()
            .filter(|term| contains_phrase(&tokens, &term.tokens))
            .map(|term| term.label.as_str())
            .collect()
    }
}

fn contains_phrase(tokens: &[&str], phrase: &[String]) -> bool {
    if phrase.is_empty() || phrase.len() > tokens.len() {
        return false;
    }
    tokens
        .windows(phrase.len())
        .any(|w| w.iter().zip(phrase).all(|(a, b)| *a == b))
}

/// Outcome of the skill gap analysis for one resume.
#[derive(Debug, Clone)]
pub struct SkillReport {
    pub key_strengths: Vec<String>,
    pub missing_skills: Vec<String>,
    pub feedback: String,
}

/// Diffs the vocabulary terms found in the job description against those found
/// in the resume. Strengths and gaps are reported in vocabulary order and
/// capped at `MAX_SKILLS_DISPLAY`; the feedback counts refer to the full sets.
pub fn diff_skills(
    vocabulary: &SkillVocabulary,
    jd_processed: &str,
    resume_processed: &str,
) -> SkillReport {
    let jd_skills = vocabulary.matches_in(jd_processed);
    if jd_skills.is_empty() {
        return SkillReport {
            key_strengths: vec![],
            missing_skills: vec![],
            feedback: "Could not extract skills from the job description.".to_string(),
        };
    }

    let resume_skills: HashSet<&str> = vocabulary.matches_in(resume_processed).into_iter().collect();

    let strengths: Vec<String> = jd_skills
        .iter()
        .filter(|s| resume_skills.contains(**s))
        .map(|s| s.to_string())
        .collect();
    let missing: Vec<String> = jd_skills
        .iter()
        .filter(|s| !resume_skills.contains(**s))
        .map(|s| s.to_string())
        .collect();

    let mut feedback = format!("Candidate shows strength in {} key areas. ", strengths.len());
    if missing.is_empty() {
        feedback.push_str("Covers all key skill areas identified.");
    } else {
        let preview: Vec<&str> = missing.iter().take(3).map(String::as_str).collect();
        feedback.push_str(&format!(
            "Potential gaps identified in {} areas like: {}...",
            missing.len(),
            preview.join(", ")
        ));
    }

    SkillReport {
        key_strengths: strengths.into_iter().take(MAX_SKILLS_DISPLAY).collect(),
        missing_skills: missing.into_iter().take(MAX_SKILLS_DISPLAY).collect(),
        feedback,
    }
}
