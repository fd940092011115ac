use serde::{Deserialize, Serialize};

/// A stored resume upload. Created on upload, read during analysis,
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub original_name: String,
    pub stored_name: String,
    pub path: String,
}

/// Reference to a previously uploaded resume, as sent back by clients in the
/// analyze request. Only `stored_name` is trusted; `path` is accepted for
/// compatibility with the upload response shape but resolution always goes
/// through the upload store.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeFileRef {
    #[serde(default)]
    pub original_name: Option<String>,
    pub stored_name: String,
    // Accepted from the client but never used for resolution.
    #[allow(dead_code)]
    #[serde(default)]
    pub path: Option<String>,
}

impl ResumeFileRef {
    /// Display name for results: the original filename when known,
    /// otherwise the stored name.
    pub fn display_name(&self) -> &str {
        self.original_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.stored_name)
    }
}

/// Per-resume analysis outcome. The tagged representation guarantees the
/// success/error invariant: `match_score` exists only on success, `message`
/// only on error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisResult {
    Success {
        resume: String,
        match_score: f64,
        key_strengths: Vec<String>,
        missing_skills: Vec<String>,
        feedback: String,
    },
    Error {
        resume: String,
        message: String,
    },
}

impl AnalysisResult {
    pub fn resume(&self) -> &str {
        match self {
            AnalysisResult::Success { resume, .. } => resume,
            AnalysisResult::Error { resume, .. } => resume,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisResult::Success { .. })
    }
}
