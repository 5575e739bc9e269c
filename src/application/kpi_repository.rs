// Repository trait for remote gadget data access
use crate::domain::interval::Interval;
use crate::domain::kpi::KpiTimeline;
use async_trait::async_trait;
use serde::Deserialize;

/// One selectable entry of the project/category picker.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectOption {
    pub label: String,
    pub value: String,
}

/// Parameters of one getKpis fetch. The end of the timeline is always
/// "today"; the remote resource accepts nothing else.
#[derive(Debug, Clone)]
pub struct KpiQuery {
    pub project_id: String,
    pub period: String,
    pub interval: Interval,
}

#[async_trait]
pub trait KpiRepository: Send + Sync {
    /// Fetch the KPI timeline for the selected projects and period.
    /// `None` means the resource answered without a payload.
    async fn fetch_kpis(&self, query: &KpiQuery) -> anyhow::Result<Option<KpiTimeline>>;

    /// Options for the project/category picker field.
    async fn list_project_options(&self) -> anyhow::Result<Vec<ProjectOption>>;
}
