use std::sync::Arc;

use crate::analyzer::extract::TextExtractor;
use crate::analyzer::similarity::SimilarityScorer;
use crate::analyzer::skills::SkillVocabulary;
use crate::storage::UploadStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: UploadStore,
    /// Pluggable PDF text extractor; production uses the pdf-extract backend.
    pub extractor: Arc<dyn TextExtractor>,
    /// Pluggable similarity scorer. Default: TfidfScorer.
    pub scorer: Arc<dyn SimilarityScorer>,
    pub skills: Arc<SkillVocabulary>,
}
