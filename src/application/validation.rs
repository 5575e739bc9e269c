// Configuration-form validation for the gadget's submit action.
//
// All rules are checkable from the request parameters alone, so the action
// is served locally instead of round-tripping to the remote resource.
use crate::domain::interval::{interval_steps, Interval};
use chrono::Utc;
use serde::Serialize;

/// Longest accepted period, in days (20 years).
pub const PERIOD_MAXIMUM_DAYS: i64 = 7300;

/// Upper bound on interval steps x selected projects per request.
pub const MAXIMUM_DATASETS: usize = 5000;

/// Picker sentinel selecting every project.
pub const ALL_PROJECTS: &str = "allprojects";

/// Picker sentinel selecting every project category.
pub const ALL_CATEGORIES: &str = "catallCategories";

/// Field-level error wire shape consumed by the configuration form.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub error: String,
}

impl ValidationError {
    fn new(field: &str, error: &str) -> Self {
        Self {
            field: field.to_string(),
            error: error.to_string(),
        }
    }
}

/// Wrapper for form errors: general messages plus field-specific errors.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorCollection {
    pub error_messages: Vec<String>,
    pub errors: Vec<ValidationError>,
}

impl ErrorCollection {
    fn field_error(field: &str, error: &str) -> Self {
        Self {
            error_messages: Vec::new(),
            errors: vec![ValidationError::new(field, error)],
        }
    }
}

/// Validates the configuration form. `Ok(())` means the form may be saved.
/// Checks stop at the first failing rule, mirroring the form's behavior of
/// highlighting one field at a time.
pub fn validate_preferences(
    project_id: &str,
    period: &str,
    interval: &str,
) -> Result<(), ErrorCollection> {
    if project_id.is_empty() {
        return Err(ErrorCollection::field_error(
            "projectId",
            "Please select at least one project or category",
        ));
    }

    let Ok(days) = period.parse::<i64>() else {
        return Err(ErrorCollection::field_error(
            "period",
            "Please specify the period in days",
        ));
    };
    if days < 1 {
        return Err(ErrorCollection::field_error(
            "period",
            "Please specify a positive number of days",
        ));
    }
    if days > PERIOD_MAXIMUM_DAYS {
        return Err(ErrorCollection::field_error(
            "period",
            "Please do not specify a date more than 20 years ago",
        ));
    }

    let Some(interval) = Interval::parse(interval) else {
        return Err(ErrorCollection::field_error(
            "interval",
            "Please select daily, weekly or monthly interval steps",
        ));
    };

    if let Some(projects) = selected_project_count(project_id) {
        let steps = interval_steps(days, interval, Utc::now()).len();
        if steps * projects > MAXIMUM_DATASETS {
            return Err(ErrorCollection::field_error(
                "interval",
                "You requested too many datasets, please reduce the period, interval or the number of projects",
            ));
        }
    }

    Ok(())
}

/// Number of explicitly selected projects/categories. `None` for the
/// all-projects sentinels, whose expansion only the remote service knows;
/// the dataset bound is skipped for those. Entries are `|`-delimited and
/// category ids carry a `cat` prefix, each counting as one selection here.
fn selected_project_count(project_id: &str) -> Option<usize> {
    if project_id == ALL_PROJECTS || project_id == ALL_CATEGORIES {
        return None;
    }
    Some(project_id.split('|').filter(|entry| !entry.is_empty()).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing_field(result: Result<(), ErrorCollection>) -> String {
        result.unwrap_err().errors[0].field.clone()
    }

    #[test]
    fn test_valid_preferences() {
        assert!(validate_preferences("10000|cat10100", "30", "daily").is_ok());
        assert!(validate_preferences(ALL_PROJECTS, "365", "monthly").is_ok());
    }

    #[test]
    fn test_empty_project_selection() {
        assert_eq!(failing_field(validate_preferences("", "30", "daily")), "projectId");
    }

    #[test]
    fn test_period_must_be_days() {
        assert_eq!(failing_field(validate_preferences("10000", "soon", "daily")), "period");
    }

    #[test]
    fn test_period_maximum() {
        assert_eq!(failing_field(validate_preferences("10000", "7301", "daily")), "period");
        assert!(validate_preferences("10000", "7300", "monthly").is_ok());
    }

    #[test]
    fn test_period_must_be_positive() {
        assert_eq!(failing_field(validate_preferences("10000", "0", "daily")), "period");
        assert_eq!(failing_field(validate_preferences("10000", "-3", "daily")), "period");
        // Magnitudes past chrono's day range must fail the range check, not
        // reach the step computation.
        assert_eq!(
            failing_field(validate_preferences("10000", "-1000000000000000", "daily")),
            "period"
        );
    }

    #[test]
    fn test_unknown_interval() {
        assert_eq!(failing_field(validate_preferences("10000", "30", "hourly")), "interval");
    }

    #[test]
    fn test_dataset_bound() {
        // 7300 daily steps x 2 projects far exceeds the 5000 dataset cap.
        assert_eq!(
            failing_field(validate_preferences("10000|10001", "7300", "daily")),
            "interval"
        );
        // The all-projects sentinel skips the bound; its expansion is unknown here.
        assert!(validate_preferences(ALL_PROJECTS, "7300", "daily").is_ok());
    }

    #[test]
    fn test_error_collection_wire_shape() {
        let errors = validate_preferences("", "30", "daily").unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();

        assert_eq!(json["errorMessages"], serde_json::json!([]));
        assert_eq!(json["errors"][0]["field"], "projectId");
    }
}
