// Gadget render use case - fetch the timeline and decide the view state
use crate::application::kpi_repository::{KpiQuery, KpiRepository};
use crate::domain::chart::ChartDataset;
use crate::domain::interval::Interval;
use std::sync::Arc;

/// Chart margin taken off the viewport width.
const VIEWPORT_MARGIN_PX: u32 = 10;

/// Host-managed user preferences backing the configuration form.
/// Defaults come from configuration; per-request parameters override them.
#[derive(Debug, Clone)]
pub struct GadgetPreferences {
    pub project_id: String,
    pub period: String,
    pub interval: Interval,
}

impl GadgetPreferences {
    pub fn with_overrides(
        &self,
        project_id: Option<String>,
        period: Option<String>,
        interval: Option<Interval>,
    ) -> Self {
        Self {
            project_id: project_id.unwrap_or_else(|| self.project_id.clone()),
            period: period.unwrap_or_else(|| self.period.clone()),
            interval: interval.unwrap_or(self.interval),
        }
    }
}

/// Chart sizing derived from the viewport; the chart is drawn at a 3:2
/// aspect ratio inside the available width.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

/// The two render states: a chart when data is present, the fallback
/// message otherwise. There is no caching and no retry between renders.
#[derive(Debug, Clone, PartialEq)]
pub enum GadgetView {
    NoData,
    Chart {
        dataset: ChartDataset,
        options: ChartOptions,
    },
}

#[derive(Clone)]
pub struct GadgetService {
    repository: Arc<dyn KpiRepository>,
    title: String,
}

impl GadgetService {
    pub fn new(repository: Arc<dyn KpiRepository>, title: String) -> Self {
        Self { repository, title }
    }

    /// Fetches the timeline fresh and maps it to a view state.
    ///
    /// An absent payload, a null/empty collection or an empty first project
    /// list all degrade to [`GadgetView::NoData`]. A malformed timeline
    /// aborts the whole render instead of drawing a misaligned chart.
    pub async fn render(
        &self,
        prefs: &GadgetPreferences,
        viewport_width: u32,
    ) -> anyhow::Result<GadgetView> {
        let query = KpiQuery {
            project_id: prefs.project_id.clone(),
            period: prefs.period.clone(),
            interval: prefs.interval,
        };

        let timeline = self.repository.fetch_kpis(&query).await?;
        let samples = match timeline.and_then(|t| t.kpis_at_time) {
            Some(samples) => samples,
            None => return Ok(GadgetView::NoData),
        };
        if samples.is_empty() || samples[0].project_kpis.is_empty() {
            return Ok(GadgetView::NoData);
        }

        let dataset = ChartDataset::from_samples(&samples)?;

        let width = viewport_width.saturating_sub(VIEWPORT_MARGIN_PX);
        let height = width * 2 / 3;
        Ok(GadgetView::Chart {
            dataset,
            options: ChartOptions {
                width,
                height,
                title: self.title.clone(),
            },
        })
    }
}
