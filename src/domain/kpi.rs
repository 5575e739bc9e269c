// KPI timeline domain model
//
// Field names mirror the wire format of the key-performance REST resource,
// which capitalizes some members (`KpisAtTime`, `Time`, `ProjectKPI`,
// `KpiNumber`) and camel-cases the rest.
use serde::Deserialize;

/// Top-level payload of the getKpis resource.
#[derive(Debug, Clone, Deserialize)]
pub struct KpiTimeline {
    #[serde(rename = "KpisAtTime", default)]
    pub kpis_at_time: Option<Vec<KpiSample>>,
}

/// KPI values for all selected projects at one sample date.
#[derive(Debug, Clone, Deserialize)]
pub struct KpiSample {
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "ProjectKPI", default)]
    pub project_kpis: Vec<ProjectKpi>,
}

impl KpiSample {
    pub fn new(time: String, project_kpis: Vec<ProjectKpi>) -> Self {
        Self { time, project_kpis }
    }
}

/// One project's KPI value at a sample.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectKpi {
    #[serde(rename = "projectKey")]
    pub project_key: String,
    #[serde(rename = "projectId", default)]
    pub project_id: Option<i64>,
    #[serde(rename = "KpiNumber")]
    pub kpi_number: f64,
}

impl ProjectKpi {
    pub fn new(project_key: String, project_id: Option<i64>, kpi_number: f64) -> Self {
        Self {
            project_key,
            project_id,
            kpi_number,
        }
    }
}

/// Flat per-project listing consumed only by the table renderer.
///
/// This is a distinct legacy shape, not a flattened [`KpiSample`]: it carries
/// an issue count and a KPI identifier per project with no time axis. The two
/// shapes are kept separate on purpose.
#[derive(Debug, Clone, Deserialize)]
pub struct KpiTableEntry {
    #[serde(rename = "projectKey")]
    pub project_key: String,
    #[serde(rename = "kpiNumber")]
    pub kpi_number: String,
    #[serde(rename = "issueCount")]
    pub issue_count: i64,
}
