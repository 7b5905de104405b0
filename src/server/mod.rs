//! HTTP surface: four analysis endpoints plus a health probe.
//!
//! Handlers are thin adapters over [`AnalysisApi`]; the only failure a
//! client can observe is a 500 with an `{error, details}` body, which under
//! the default fail-hard policy means question generation failed and the
//! same request can be retried as-is.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::analysis::AnalysisApi;
use crate::analysis::types::{
    ComprehensiveAnalysis, GeneratedQuestion, ProfileInit, ProfileRequest, ProfileUpdate,
    QuestionRequest, ReportRequest, UpdateRequest,
};
use crate::error::AnalysisError;

/// Maximum request body size. Report requests carry 20 full answers and
/// stay well under this.
const MAX_BODY_BYTES: usize = 256 * 1024;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub analysis: Arc<dyn AnalysisApi>,
}

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    details: String,
}

struct ApiError {
    operation: &'static str,
    source: AnalysisError,
}

impl ApiError {
    fn new(operation: &'static str, source: AnalysisError) -> Self {
        Self { operation, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(operation = self.operation, error = %self.source, "request failed");
        let body = ErrorBody {
            error: self.operation.to_string(),
            details: self.source.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/ai/initialize-profile", post(initialize_profile_handler))
        .route("/api/ai/generate-question", post(generate_question_handler))
        .route("/api/ai/update-profile", post(update_profile_handler))
        .route(
            "/api/ai/comprehensive-analysis",
            post(comprehensive_analysis_handler),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until ctrl-c.
pub async fn serve(addr: std::net::SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await
}

async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn initialize_profile_handler(
    State(state): State<AppState>,
    Json(req): Json<ProfileRequest>,
) -> Result<Json<ProfileInit>, ApiError> {
    state
        .analysis
        .initialize_profile(req)
        .await
        .map(Json)
        .map_err(|e| ApiError::new("Failed to initialize profile", e))
}

async fn generate_question_handler(
    State(state): State<AppState>,
    Json(req): Json<QuestionRequest>,
) -> Result<Json<GeneratedQuestion>, ApiError> {
    state
        .analysis
        .generate_question(req)
        .await
        .map(Json)
        .map_err(|e| ApiError::new("Failed to generate question", e))
}

async fn update_profile_handler(
    State(state): State<AppState>,
    Json(req): Json<UpdateRequest>,
) -> Result<Json<ProfileUpdate>, ApiError> {
    state
        .analysis
        .update_profile(req)
        .await
        .map(Json)
        .map_err(|e| ApiError::new("Failed to update profile", e))
}

async fn comprehensive_analysis_handler(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> Result<Json<ComprehensiveAnalysis>, ApiError> {
    state
        .analysis
        .comprehensive_analysis(req)
        .await
        .map(Json)
        .map_err(|e| ApiError::new("Failed to generate comprehensive analysis", e))
}
