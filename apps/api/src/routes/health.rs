use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Root status endpoint kept for clients that probe the API base URL.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "Resume Analyzer API is running",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-analyzer-api"
    }))
}
