// Application state for HTTP handlers
use crate::application::gadget_service::{GadgetPreferences, GadgetService};
use crate::application::kpi_repository::KpiRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub gadget_service: GadgetService,
    pub repository: Arc<dyn KpiRepository>,
    pub default_prefs: GadgetPreferences,
}
