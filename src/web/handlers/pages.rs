// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::extract::Form;
use axum::response::{Html, IntoResponse};
use axum_htmx::HxRequest;

use crate::api_server::AppError;
use crate::recommend::{build_report, SoilReport};
use crate::soil::{SoilSample, SoilType};

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub soil_types: &'static [SoilType],
}

pub async fn home_page() -> impl IntoResponse {
    let template = HomeTemplate {
        title: "Harvester".to_string(),
        soil_types: &SoilType::ALL,
    };
    Html(template.render().unwrap_or_else(|e| {
        format!("Template error: {}", e)
    }))
}

// ============================================================================
// Analysis Results
// ============================================================================

/// Results region swapped into the page by HTMX.
#[derive(Template)]
#[template(path = "partials/results.html")]
pub struct ResultsTemplate {
    pub report: SoilReport,
}

/// Full-page fallback for plain (non-HTMX) form posts.
#[derive(Template)]
#[template(path = "pages/results.html")]
pub struct ResultsPageTemplate {
    pub title: String,
    pub report: SoilReport,
}

/// Form submission: validate, evaluate, render.
///
/// HTMX posts get just the results region; anything else gets the full page.
pub async fn analyze(
    HxRequest(hx_request): HxRequest,
    Form(sample): Form<SoilSample>,
) -> Result<Html<String>, AppError> {
    sample
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    tracing::debug!(
        "Analyzing sample from {} ({})",
        sample.location,
        sample.soil_type.label()
    );
    let report = build_report(sample);

    let rendered = if hx_request {
        ResultsTemplate { report }.render()
    } else {
        ResultsPageTemplate {
            title: "Harvester".to_string(),
            report,
        }
        .render()
    };

    rendered
        .map(Html)
        .map_err(|e| AppError::Template(e.to_string()))
}

/// Empty results region. HTMX swaps this in on reset, discarding the
/// rendered report; nothing about the previous sample survives the swap.
pub async fn reset() -> impl IntoResponse {
    Html(String::new())
}
