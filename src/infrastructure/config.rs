use crate::domain::interval::Interval;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct GadgetConfig {
    pub jira: JiraSettings,
    pub gadget: GadgetSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JiraSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GadgetSettings {
    pub title: String,
    #[serde(default = "default_project_id")]
    pub project_id: String,
    #[serde(default = "default_period")]
    pub period: String,
    #[serde(default = "default_interval")]
    pub interval: Interval,
}

fn default_project_id() -> String {
    "allprojects".to_string()
}

fn default_period() -> String {
    "30".to_string()
}

fn default_interval() -> Interval {
    Interval::Daily
}

pub fn load_gadget_config() -> anyhow::Result<GadgetConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/gadget"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings: GadgetSettings =
            serde_json::from_str(r#"{"title": "Key Performance Chart"}"#).unwrap();

        assert_eq!(settings.project_id, "allprojects");
        assert_eq!(settings.period, "30");
        assert_eq!(settings.interval, Interval::Daily);
    }

    #[test]
    fn test_interval_parses_from_config() {
        let settings: GadgetSettings =
            serde_json::from_str(r#"{"title": "t", "interval": "monthly"}"#).unwrap();

        assert_eq!(settings.interval, Interval::Monthly);
    }
}
