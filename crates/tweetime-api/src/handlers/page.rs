//! Page handlers.

use axum::{extract::State, http::Uri, response::Html, Json};
use tracing::info;

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::{ChartResponse, PanelListResponse};

/// GET / - Render the page for a new display session.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let html = state.render_page()?;
    info!(bytes = html.len(), "Rendered display session");
    Ok(Html(html))
}

/// GET /api/chart - The chart spec for the current datasets.
pub async fn chart(State(state): State<AppState>) -> Result<Json<ChartResponse>> {
    let layout = state.layout()?;
    Ok(Json(ChartResponse {
        chart: layout.chart,
    }))
}

/// GET /api/panels - The ranked panels for the current datasets.
pub async fn panels(State(state): State<AppState>) -> Result<Json<PanelListResponse>> {
    let layout = state.layout()?;
    let section = layout
        .sections
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::Internal("page has no ranked section".to_string()))?;
    let total = section.panels.len();

    Ok(Json(PanelListResponse {
        heading: section.heading,
        panels: section.panels,
        total,
    }))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
