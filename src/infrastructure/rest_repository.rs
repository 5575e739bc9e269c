// REST adapter for the remote key-performance resource
use crate::application::descriptor::PROJECT_OPTIONS_RESOURCE;
use crate::application::kpi_repository::{KpiQuery, KpiRepository, ProjectOption};
use crate::domain::kpi::KpiTimeline;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

const GET_KPIS_RESOURCE: &str = "/rest/key-performance/1.0/key-performance/getKpis";
const END_TODAY: &str = "today";

#[derive(Debug, Clone)]
pub struct RestKpiRepository {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ProjectOptionsResponse {
    #[serde(default)]
    options: Vec<ProjectOption>,
}

impl RestKpiRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn kpis_url(&self, query: &KpiQuery) -> String {
        format!(
            "{}{}?projectId={}&period={}&interval={}&end={}",
            self.base_url,
            GET_KPIS_RESOURCE,
            urlencoding::encode(&query.project_id),
            urlencoding::encode(&query.period),
            query.interval,
            END_TODAY,
        )
    }
}

#[async_trait]
impl KpiRepository for RestKpiRepository {
    async fn fetch_kpis(&self, query: &KpiQuery) -> Result<Option<KpiTimeline>> {
        let url = self.kpis_url(query);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to the key-performance resource")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("getKpis failed with status {}: {}", status, body);
        }

        // The resource answers 200 with an empty body when it has no data
        // for the requested projects or period.
        let body = response
            .text()
            .await
            .context("Failed to read getKpis response")?;
        let body = body.trim();
        if body.is_empty() || body == "null" {
            return Ok(None);
        }

        let timeline =
            serde_json::from_str(body).context("Failed to parse getKpis response")?;
        Ok(Some(timeline))
    }

    async fn list_project_options(&self) -> Result<Vec<ProjectOption>> {
        let url = format!("{}{}", self.base_url, PROJECT_OPTIONS_RESOURCE);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to fetch project and category options")?;

        if !response.status().is_success() {
            anyhow::bail!("project options request failed with status {}", response.status());
        }

        let parsed = response
            .json::<ProjectOptionsResponse>()
            .await
            .context("Failed to parse project options response")?;
        Ok(parsed.options)
    }
}
