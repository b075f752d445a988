// Axum application: state, router, JSON handlers, error type
//
// Page and fragment handlers render through Askama and live in
// web/handlers/pages.rs; everything JSON-shaped is here.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::recommend::{build_report, Crop, SoilReport};
use crate::soil::SoilSample;
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    /// Server start time, reported as uptime by the health check.
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started_at: chrono::Utc::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages and HTMX fragments (HTML)
        .route("/", get(pages::home_page))
        .route("/analyze", post(pages::analyze))
        .route("/reset", get(pages::reset))

        // Health check
        .route("/health", get(health_check))

        // Analysis endpoints (JSON API)
        .route("/api/analyze", post(analyze_sample))
        .route("/api/crops", get(list_crops))
        .route("/api/crops/:name", get(get_crop))

        // Stylesheet and other assets
        .nest_service("/static", ServeDir::new("static"))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new()) // gzip + brotli compression
        .layer(CorsLayer::permissive()) // Allow all origins (adjust for production)
        .layer(TraceLayer::new_for_http()) // Request logging
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = chrono::Utc::now() - state.started_at;
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime.num_seconds(),
    }))
}

/// JSON analysis: one sample in, one report out.
async fn analyze_sample(Json(sample): Json<SoilSample>) -> Result<Json<SoilReport>, AppError> {
    sample
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::debug!("Scoring sample from {}", sample.location);
    let report = build_report(sample);

    Ok(Json(report))
}

/// Full crop catalog.
async fn list_crops() -> impl IntoResponse {
    let data: Vec<serde_json::Value> = Crop::ALL.iter().map(crop_json).collect();

    Json(serde_json::json!({
        "rows": data.len(),
        "data": data,
    }))
}

/// Single catalog entry by display name (case-insensitive).
async fn get_crop(Path(name): Path<String>) -> Result<Json<serde_json::Value>, AppError> {
    let crop = Crop::from_name(&name)
        .ok_or_else(|| AppError::NotFound(format!("Crop {} not found", name)))?;

    Ok(Json(crop_json(&crop)))
}

fn crop_json(crop: &Crop) -> serde_json::Value {
    let profile = crop.profile();
    serde_json::json!({
        "name": profile.name,
        "yield": profile.expected_yield,
        "season": profile.season,
        "description": profile.description,
        "tips": profile.tips,
    })
}

// ============================================================================
// Error Handling
// ============================================================================

/// Error responses shared by the JSON API and the form endpoints.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("template error: {0}")]
    Template(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
