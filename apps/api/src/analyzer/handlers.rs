use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::analyzer::export::{export_file_name, results_to_csv};
use crate::analyzer::pipeline::analyze_batch;
use crate::analyzer::upload::{collect_resume_fields, is_valid_pdf};
use crate::errors::AppError;
use crate::models::analysis::{AnalysisResult, ResumeFileRef, UploadedFile};
use crate::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub files: Vec<UploadedFile>,
}

/// POST /api/analyzer/upload-resumes
///
/// Multipart upload, field `resumes` (repeatable). Files that are not PDFs
/// are skipped; the request fails only when nothing valid remains.
pub async fn handle_upload_resumes(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let uploads = collect_resume_fields(multipart).await?;
    if uploads.is_empty() {
        return Err(AppError::Validation("No resume files provided".to_string()));
    }

    let mut files = Vec::new();
    for upload in uploads {
        if upload.file_name.is_empty() || !is_valid_pdf(&upload.file_name, &upload.data) {
            debug!("Skipping invalid upload: {:?}", upload.file_name);
            continue;
        }
        files.push(state.store.save(&upload.file_name, &upload.data).await?);
    }

    if files.is_empty() {
        return Err(AppError::Validation(
            "No valid PDF files were uploaded".to_string(),
        ));
    }

    info!("Stored {} resume upload(s)", files.len());
    Ok(Json(UploadResponse { files }))
}

#[derive(Deserialize)]
pub struct SubmitJdRequest {
    #[serde(default)]
    pub job_description: String,
}

#[derive(Serialize)]
pub struct SubmitJdResponse {
    pub jd_id: String,
    pub job_description: String,
}

/// POST /api/analyzer/submit-job-description
///
/// The job description is request-scoped; clients carry it into the analyze
/// call. The returned id exists only so the UI can reference the submission.
pub async fn handle_submit_job_description(
    Json(req): Json<SubmitJdRequest>,
) -> Result<Json<SubmitJdResponse>, AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Job description cannot be empty".to_string(),
        ));
    }

    Ok(Json(SubmitJdResponse {
        jd_id: Uuid::new_v4().simple().to_string(),
        job_description: req.job_description,
    }))
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_files: Vec<ResumeFileRef>,
    #[serde(default)]
    pub job_description: String,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub results: Vec<AnalysisResult>,
}

/// POST /api/analyzer/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if req.resume_files.is_empty() {
        return Err(AppError::Validation(
            "No resume files specified for analysis".to_string(),
        ));
    }
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "No job description provided for analysis".to_string(),
        ));
    }

    let outcome = analyze_batch(
        &state.store,
        state.extractor.as_ref(),
        state.scorer.as_ref(),
        &state.skills,
        &req.job_description,
        &req.resume_files,
    )
    .await?;

    if outcome.succeeded == 0 {
        return Err(AppError::Validation(
            "No valid resumes could be processed".to_string(),
        ));
    }

    info!(
        "Analyzed {} resume(s), {} succeeded",
        outcome.results.len(),
        outcome.succeeded
    );
    Ok(Json(AnalyzeResponse {
        results: outcome.results,
    }))
}

#[derive(Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub results: Vec<AnalysisResult>,
}

/// POST /api/analyzer/export-csv
///
/// Turns a result list back into a CSV download. Accepts the exact shape the
/// analyze endpoint returns.
pub async fn handle_export_csv(Json(req): Json<ExportRequest>) -> Result<Response, AppError> {
    let csv = results_to_csv(&req.results)?;
    let disposition = format!("attachment; filename=\"{}\"", export_file_name());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (header::CONTENT_DISPOSITION, disposition.as_str()),
        ],
        csv,
    )
        .into_response())
}
