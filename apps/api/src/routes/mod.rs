pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analyzer::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/api/analyzer/upload-resumes",
            post(handlers::handle_upload_resumes),
        )
        .route(
            "/api/analyzer/submit-job-description",
            post(handlers::handle_submit_job_description),
        )
        .route("/api/analyzer/analyze", post(handlers::handle_analyze))
        .route("/api/analyzer/export-csv", post(handlers::handle_export_csv))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::analyzer::extract::PdfTextExtractor;
    use crate::analyzer::similarity::TfidfScorer;
    use crate::analyzer::skills::SkillVocabulary;
    use crate::storage::UploadStore;

    async fn test_app() -> (tempfile::TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::init(dir.path().join("uploads")).await.unwrap();
        let state = AppState {
            store,
            extractor: Arc::new(PdfTextExtractor),
            scorer: Arc::new(TfidfScorer),
            skills: Arc::new(SkillVocabulary::builtin()),
        };
        (dir, build_router(state))
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (_dir, app) = test_app().await;
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.contains("\"status\":\"ok\""));
    }

    #[tokio::test]
    async fn test_submit_empty_job_description_is_400() {
        let (_dir, app) = test_app().await;
        let response = app
            .oneshot(json_post(
                "/api/analyzer/submit-job-description",
                r#"{"job_description": "   "}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response).await.contains("message"));
    }

    #[tokio::test]
    async fn test_submit_job_description_echoes_text() {
        let (_dir, app) = test_app().await;
        let response = app
            .oneshot(json_post(
                "/api/analyzer/submit-job-description",
                r#"{"job_description": "Senior Rust engineer"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Senior Rust engineer"));
        assert!(body.contains("jd_id"));
    }

    #[tokio::test]
    async fn test_analyze_with_empty_job_description_is_400() {
        let (_dir, app) = test_app().await;
        let response = app
            .oneshot(json_post(
                "/api/analyzer/analyze",
                r#"{"resume_files": [{"stored_name": "a.pdf"}], "job_description": ""}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_without_files_is_400() {
        let (_dir, app) = test_app().await;
        let response = app
            .oneshot(json_post(
                "/api/analyzer/analyze",
                r#"{"resume_files": [], "job_description": "Rust engineer"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_where_every_resume_fails_is_400() {
        let (_dir, app) = test_app().await;
        let response = app
            .oneshot(json_post(
                "/api/analyzer/analyze",
                r#"{"resume_files": [{"stored_name": "ghost.pdf"}],
                    "job_description": "Rust engineer with Docker"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response)
            .await
            .contains("No valid resumes could be processed"));
    }

    #[tokio::test]
    async fn test_upload_rejects_non_pdf_file() {
        let (_dir, app) = test_app().await;
        let body = concat!(
            "--BOUNDARY\r\n",
            "Content-Disposition: form-data; name=\"resumes\"; filename=\"notes.txt\"\r\n",
            "Content-Type: text/plain\r\n\r\n",
            "plain text, not a pdf\r\n",
            "--BOUNDARY--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/analyzer/upload-resumes")
            .header(
                header::CONTENT_TYPE,
                "multipart/form-data; boundary=BOUNDARY",
            )
            .body(Body::from(body))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response)
            .await
            .contains("No valid PDF files were uploaded"));
    }

    #[tokio::test]
    async fn test_upload_with_no_files_is_400() {
        let (_dir, app) = test_app().await;
        let body = "--BOUNDARY--\r\n";
        let request = Request::builder()
            .method("POST")
            .uri("/api/analyzer/upload-resumes")
            .header(
                header::CONTENT_TYPE,
                "multipart/form-data; boundary=BOUNDARY",
            )
            .body(Body::from(body))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_stores_valid_pdf_and_returns_record() {
        let (_dir, app) = test_app().await;
        let body = concat!(
            "--BOUNDARY\r\n",
            "Content-Disposition: form-data; name=\"resumes\"; filename=\"alice.pdf\"\r\n",
            "Content-Type: application/pdf\r\n\r\n",
            "%PDF-1.4 fake but well-prefixed\r\n",
            "--BOUNDARY--\r\n"
        );
        let request = Request::builder()
            .method("POST")
            .uri("/api/analyzer/upload-resumes")
            .header(
                header::CONTENT_TYPE,
                "multipart/form-data; boundary=BOUNDARY",
            )
            .body(Body::from(body))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("\"original_name\":\"alice.pdf\""));
        assert!(body.contains("stored_name"));
    }

    #[tokio::test]
    async fn test_export_csv_row_count() {
        let (_dir, app) = test_app().await;
        let payload = r#"{"results": [
            {"resume": "a.pdf", "status": "success", "match_score": 50.0,
             "key_strengths": [], "missing_skills": [], "feedback": "ok"},
            {"resume": "b.pdf", "status": "error", "message": "broken"}
        ]}"#;
        let response = app
            .oneshot(json_post("/api/analyzer/export-csv", payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .unwrap()
                .to_str()
                .unwrap(),
            "text/csv"
        );
        let body = body_string(response).await;
        assert_eq!(body.lines().count(), 3);
    }
}
