//! Raw text extraction from stored PDF resumes.
//!
//! The extractor sits behind a trait so the analysis pipeline can be exercised
//! without real PDF bytes; the production backend is `pdf-extract`.

use async_trait::async_trait;

use crate::errors::AppError;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, data: &[u8]) -> Result<String, AppError>;
}

/// Default backend: `pdf_extract` over the in-memory document.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, data: &[u8]) -> Result<String, AppError> {
        extract_text(data)
    }
}

/// Extracts text from an in-memory PDF. Fails on unparseable documents and on
/// documents whose extracted text is empty (scanned images, encrypted files).
pub fn extract_text(data: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| AppError::PdfExtraction(format!("Could not extract text from PDF: {e}")))?;
    validate_extracted(text)
}

fn validate_extracted(text: String) -> Result<String, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::PdfExtraction(
            "Could not extract text from PDF".to_string(),
        ));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_rejected() {
        let result = extract_text(b"definitely not a pdf");
        assert!(matches!(result, Err(AppError::PdfExtraction(_))));
    }

    #[test]
    fn test_empty_extracted_text_is_rejected() {
        assert!(validate_extracted("   \n\t ".to_string()).is_err());
    }

    #[test]
    fn test_nonempty_extracted_text_passes() {
        let text = validate_extracted("Rust engineer\n".to_string()).unwrap();
        assert_eq!(text, "Rust engineer\n");
    }

    #[tokio::test]
    async fn test_trait_backend_rejects_garbage() {
        let extractor = PdfTextExtractor;
        assert!(extractor.extract(b"not a pdf").await.is_err());
    }
}
