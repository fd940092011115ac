//! The per-resume analysis pipeline: read stored file, extract text,
//! preprocess, score against the job description, diff skills.
//!
//! Resumes are processed sequentially; a failure on one resume becomes an
//! inline error result and the batch continues. Result order always matches
//! input order.

use tracing::warn;

use crate::analyzer::extract::TextExtractor;
use crate::analyzer::preprocess::preprocess;
use crate::analyzer::similarity::SimilarityScorer;
use crate::analyzer::skills::{diff_skills, SkillVocabulary};
use crate::errors::AppError;
use crate::models::analysis::{AnalysisResult, ResumeFileRef};
use crate::storage::UploadStore;

pub struct BatchOutcome {
    pub results: Vec<AnalysisResult>,
    pub succeeded: usize,
}

pub async fn analyze_batch(
    store: &UploadStore,
    extractor: &dyn TextExtractor,
    scorer: &dyn SimilarityScorer,
    vocabulary: &SkillVocabulary,
    job_description: &str,
    files: &[ResumeFileRef],
) -> Result<BatchOutcome, AppError> {
    let jd_processed = preprocess(job_description);
    if jd_processed.is_empty() {
        return Err(AppError::Validation(
            "Could not process the job description".to_string(),
        ));
    }

    let mut results = Vec::with_capacity(files.len());
    let mut succeeded = 0;

    for file in files {
        let resume = file.display_name().to_string();
        match analyze_one(store, extractor, scorer, vocabulary, &jd_processed, file).await {
            Ok(result) => {
                succeeded += 1;
                results.push(result);
            }
            Err(e) => {
                warn!("Analysis failed for {resume}: {e}");
                results.push(AnalysisResult::Error {
                    resume,
                    message: client_message(e),
                });
            }
        }
    }

    Ok(BatchOutcome { results, succeeded })
}

async fn analyze_one(
    store: &UploadStore,
    extractor: &dyn TextExtractor,
    scorer: &dyn SimilarityScorer,
    vocabulary: &SkillVocabulary,
    jd_processed: &str,
    file: &ResumeFileRef,
) -> Result<AnalysisResult, AppError> {
    let data = store.read(&file.stored_name).await?;
    let raw_text = extractor.extract(&data).await?;

    let resume_processed = preprocess(&raw_text);
    if resume_processed.is_empty() {
        return Err(AppError::PdfExtraction(
            "Could not preprocess resume text".to_string(),
        ));
    }

    let match_score = round_to_tenth(scorer.score(jd_processed, &resume_processed).await?);
    let report = diff_skills(vocabulary, jd_processed, &resume_processed);

    Ok(AnalysisResult::Success {
        resume: file.display_name().to_string(),
        match_score,
        key_strengths: report.key_strengths,
        missing_skills: report.missing_skills,
        feedback: report.feedback,
    })
}

fn round_to_tenth(score: f64) -> f64 {
    (score * 10.0).round() / 10.0
}

/// Per-item error text surfaced in results. Domain errors carry their message
/// through; anything else gets a generic line so internals do not leak.
fn client_message(e: AppError) -> String {
    match e {
        AppError::Validation(msg) | AppError::NotFound(msg) | AppError::PdfExtraction(msg) => msg,
        _ => "Could not analyze resume".to_string(),
    }
}
