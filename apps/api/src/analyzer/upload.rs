//! Multipart parsing and validation for resume uploads.

use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;

/// One file pulled out of the multipart form.
pub struct ResumeUpload {
    pub file_name: String,
    pub data: Bytes,
}

/// Collects every file sent under the `resumes` field. Other fields are
/// drained and ignored. Validation happens separately so the handler can skip
/// bad files without dropping the rest of the batch.
pub async fn collect_resume_fields(
    mut multipart: Multipart,
) -> Result<Vec<ResumeUpload>, AppError> {
    let mut uploads = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        if field.name() != Some("resumes") {
            let _ = field.bytes().await;
            continue;
        }

        let file_name = field.file_name().unwrap_or("").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;

        uploads.push(ResumeUpload { file_name, data });
    }

    Ok(uploads)
}

/// A valid upload has a `.pdf` extension and PDF magic bytes.
pub fn is_valid_pdf(file_name: &str, data: &[u8]) -> bool {
    has_pdf_extension(file_name) && data.starts_with(b"%PDF-")
}

fn has_pdf_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
