//! Request handlers.

use crate::server::AppState;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The analyzer form page, embedded at compile time.
const INDEX_HTML: &str = include_str!("index.html");

/// Form body for the analysis endpoint.
#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    pub website_url: Option<String>,
}

/// JSON body returned to the form: score plus flat suggestion strings.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub score: u32,
    pub suggestions: Vec<String>,
}

/// Render the analyzer form.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

/// Run the checklist against the submitted URL.
///
/// A submission without a `website_url` field re-renders the form page. Any
/// analysis failure becomes a zero-score result with a diagnostic suggestion;
/// nothing beyond the error's message text is exposed.
pub async fn analyze(State(state): State<AppState>, Form(form): Form<AnalyzeForm>) -> Response {
    let Some(url) = form.website_url.filter(|u| !u.is_empty()) else {
        return Html(INDEX_HTML).into_response();
    };

    let response = match state.evaluator.evaluate(&url).await {
        Ok(report) => AnalyzeResponse {
            score: report.score,
            suggestions: report.suggestions(),
        },
        Err(e) => {
            warn!("analysis of {url} failed: {e}");
            AnalyzeResponse {
                score: 0,
                suggestions: vec![format!("Error analyzing website: {e}")],
            }
        }
    };

    Json(response).into_response()
}
