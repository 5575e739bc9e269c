// Gadget descriptor - the configuration form definition served to the host
use crate::application::gadget_service::GadgetPreferences;
use crate::application::kpi_repository::ProjectOption;
use crate::domain::interval::Interval;
use serde::Serialize;

/// Relative path of the configuration-form submit action.
pub const VALIDATE_ACTION: &str = "/gadget/validate";

/// Remote resource supplying the project/category picker options.
pub const PROJECT_OPTIONS_RESOURCE: &str = "/rest/gadget/1.0/projectsAndProjectCategories";

/// Below this viewport width the form switches to the stacked-label theme.
pub const NARROW_VIEWPORT_PX: u32 = 450;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GadgetDescriptor {
    pub action: String,
    pub theme: String,
    pub fields: Vec<ConfigField>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigField {
    pub userpref: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ajax_options: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Select,
    Days,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

impl GadgetDescriptor {
    /// Declares the configuration form: project/category picker, days period
    /// picker and the interval select, in that order, plus the submit action
    /// and a theme fitted to the viewport.
    pub fn build(
        prefs: &GadgetPreferences,
        project_options: Vec<ProjectOption>,
        viewport_width: u32,
    ) -> Self {
        let project_picker = ConfigField {
            userpref: "projectId".to_string(),
            label: "Projects or categories".to_string(),
            description: Some("Which projects should be included in the KPI chart?".to_string()),
            kind: FieldKind::Select,
            selected: Some(prefs.project_id.clone()),
            options: project_options
                .into_iter()
                .map(|option| FieldOption {
                    label: option.label,
                    value: option.value,
                })
                .collect(),
            ajax_options: Some(PROJECT_OPTIONS_RESOURCE.to_string()),
        };

        let period_picker = ConfigField {
            userpref: "period".to_string(),
            label: "Days previously".to_string(),
            description: None,
            kind: FieldKind::Days,
            selected: Some(prefs.period.clone()),
            options: Vec::new(),
            ajax_options: None,
        };

        let interval_picker = ConfigField {
            userpref: "interval".to_string(),
            label: "Interval steps".to_string(),
            description: Some(
                "How many interval steps should be shown for the specified period?".to_string(),
            ),
            kind: FieldKind::Select,
            selected: Some(prefs.interval.as_str().to_string()),
            options: Interval::ALL
                .iter()
                .map(|interval| FieldOption {
                    label: interval.as_str().to_string(),
                    value: interval.as_str().to_string(),
                })
                .collect(),
            ajax_options: None,
        };

        Self {
            action: VALIDATE_ACTION.to_string(),
            theme: Self::theme(viewport_width).to_string(),
            fields: vec![project_picker, period_picker, interval_picker],
        }
    }

    /// Form layout theme; narrow viewports stack the labels on top.
    pub fn theme(viewport_width: u32) -> &'static str {
        if viewport_width < NARROW_VIEWPORT_PX {
            "gdt top-label"
        } else {
            "gdt"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs() -> GadgetPreferences {
        GadgetPreferences {
            project_id: "allprojects".to_string(),
            period: "30".to_string(),
            interval: Interval::Weekly,
        }
    }

    #[test]
    fn test_field_order_and_prefs() {
        let descriptor = GadgetDescriptor::build(&prefs(), Vec::new(), 600);

        assert_eq!(descriptor.action, VALIDATE_ACTION);
        let userprefs: Vec<&str> = descriptor.fields.iter().map(|f| f.userpref.as_str()).collect();
        assert_eq!(userprefs, vec!["projectId", "period", "interval"]);
        assert_eq!(descriptor.fields[1].kind, FieldKind::Days);
        assert_eq!(descriptor.fields[2].selected.as_deref(), Some("weekly"));
    }

    #[test]
    fn test_interval_options_are_fixed() {
        let descriptor = GadgetDescriptor::build(&prefs(), Vec::new(), 600);

        let values: Vec<&str> = descriptor.fields[2]
            .options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, vec!["daily", "weekly", "monthly"]);
    }

    #[test]
    fn test_picker_inlines_fetched_options() {
        let options = vec![ProjectOption {
            label: "Demo".to_string(),
            value: "10000".to_string(),
        }];
        let descriptor = GadgetDescriptor::build(&prefs(), options, 600);

        assert_eq!(descriptor.fields[0].options[0].value, "10000");
        assert_eq!(
            descriptor.fields[0].ajax_options.as_deref(),
            Some(PROJECT_OPTIONS_RESOURCE)
        );
    }

    #[test]
    fn test_theme_threshold() {
        assert_eq!(GadgetDescriptor::theme(449), "gdt top-label");
        assert_eq!(GadgetDescriptor::theme(450), "gdt");
        assert_eq!(GadgetDescriptor::theme(1024), "gdt");
    }

    #[test]
    fn test_serializes_camel_case() {
        let descriptor = GadgetDescriptor::build(&prefs(), Vec::new(), 600);
        let json = serde_json::to_value(&descriptor).unwrap();

        assert_eq!(json["fields"][0]["ajaxOptions"], PROJECT_OPTIONS_RESOURCE);
        assert_eq!(json["fields"][2]["type"], "select");
    }
}
