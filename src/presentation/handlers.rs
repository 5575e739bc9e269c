// HTTP request handlers
use crate::application::descriptor::GadgetDescriptor;
use crate::application::validation::validate_preferences;
use crate::domain::interval::Interval;
use crate::domain::kpi::KpiTableEntry;
use crate::presentation::app_state::AppState;
use crate::presentation::view;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// Viewport width assumed when the host does not report one.
const DEFAULT_VIEWPORT_WIDTH: u32 = 600;

#[derive(Deserialize)]
pub struct GadgetQuery {
    #[serde(rename = "projectId")]
    pub project_id: Option<String>,
    pub period: Option<String>,
    pub interval: Option<String>,
    pub width: Option<u32>,
}

#[derive(Deserialize)]
pub struct ValidateQuery {
    #[serde(rename = "projectId", default)]
    pub project_id: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub interval: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Rendered gadget view; query parameters override the stored preferences.
pub async fn gadget_view(
    Query(query): Query<GadgetQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let width = query.width.unwrap_or(DEFAULT_VIEWPORT_WIDTH);
    let interval = match query.interval.as_deref() {
        Some(value) => match Interval::parse(value) {
            Some(interval) => Some(interval),
            None => {
                return (
                    StatusCode::BAD_REQUEST,
                    "unknown interval, expected daily, weekly or monthly",
                )
                    .into_response();
            }
        },
        None => None,
    };
    let prefs = state
        .default_prefs
        .with_overrides(query.project_id, query.period, interval);

    match state.gadget_service.render(&prefs, width).await {
        Ok(view_state) => Html(view::render_page(&view_state)).into_response(),
        Err(e) => {
            tracing::error!("Error rendering gadget: {e:#}");
            (StatusCode::BAD_GATEWAY, "KPI data unavailable").into_response()
        }
    }
}

/// Configuration-form descriptor, with picker options fetched fresh.
pub async fn gadget_descriptor(
    Query(query): Query<GadgetQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let width = query.width.unwrap_or(DEFAULT_VIEWPORT_WIDTH);

    let options = match state.repository.list_project_options().await {
        Ok(options) => options,
        Err(e) => {
            // The form still renders; the picker falls back to its ajax options.
            tracing::warn!("Error fetching project options: {e:#}");
            Vec::new()
        }
    };

    Json(GadgetDescriptor::build(&state.default_prefs, options, width))
}

/// Submit action of the configuration form.
pub async fn validate_config(Query(query): Query<ValidateQuery>) -> impl IntoResponse {
    match validate_preferences(&query.project_id, &query.period, &query.interval) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(errors) => (StatusCode::BAD_REQUEST, Json(errors)).into_response(),
    }
}

/// Alternate table rendering of a flat KPI listing.
pub async fn gadget_table(Json(entries): Json<Vec<KpiTableEntry>>) -> impl IntoResponse {
    Html(view::render_table_page(&entries))
}
