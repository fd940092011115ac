mod analyzer;
mod config;
mod errors;
mod models;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analyzer::extract::PdfTextExtractor;
use crate::analyzer::similarity::{SimilarityScorer, TfidfScorer};
use crate::analyzer::skills::SkillVocabulary;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::UploadStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the upload store
    let store = UploadStore::init(config.upload_dir.clone()).await?;

    // Load the skill vocabulary (built-in unless SKILLS_PATH points elsewhere)
    let skills = match &config.skills_path {
        Some(path) => SkillVocabulary::from_file(path)?,
        None => SkillVocabulary::builtin(),
    };
    info!("Skill vocabulary loaded ({} terms)", skills.len());

    // Initialize the similarity scorer (TfidfScorer by default)
    let scorer: Arc<dyn SimilarityScorer> = Arc::new(TfidfScorer);
    info!("Similarity scorer initialized (backend: {})", scorer.backend());

    // Build app state
    let state = AppState {
        store,
        extractor: Arc::new(PdfTextExtractor),
        scorer,
        skills: Arc::new(skills),
    };

    // Build router
    let app = build_router(state)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
