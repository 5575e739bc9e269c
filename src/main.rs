// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod error;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::application::gadget_service::{GadgetPreferences, GadgetService};
use crate::infrastructure::config::load_gadget_config;
use crate::infrastructure::rest_repository::RestKpiRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    gadget_descriptor, gadget_table, gadget_view, health_check, validate_config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_gadget_config()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(RestKpiRepository::new(config.jira.base_url));

    // Create service and the stored preference defaults (application layer)
    let gadget_service = GadgetService::new(repository.clone(), config.gadget.title);
    let default_prefs = GadgetPreferences {
        project_id: config.gadget.project_id,
        period: config.gadget.period,
        interval: config.gadget.interval,
    };

    // Create application state
    let state = Arc::new(AppState {
        gadget_service,
        repository,
        default_prefs,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/gadget", get(gadget_view))
        .route("/gadget/descriptor", get(gadget_descriptor))
        .route("/gadget/validate", get(validate_config))
        .route("/gadget/table", post(gadget_table))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = "0.0.0.0:8080".parse()?;
    println!("Starting kpi-gadget service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
