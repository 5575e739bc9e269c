// Interval arithmetic for period/interval requests.
//
// The remote resource samples one KPI value per interval step within the
// requested period; the same step layout bounds the dataset count during
// configuration-form validation.
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Granularity of the KPI timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Daily,
    Weekly,
    Monthly,
}

impl Interval {
    pub const ALL: [Interval; 3] = [Interval::Daily, Interval::Weekly, Interval::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Daily => "daily",
            Interval::Weekly => "weekly",
            Interval::Monthly => "monthly",
        }
    }

    pub fn parse(value: &str) -> Option<Interval> {
        match value {
            "daily" => Some(Interval::Daily),
            "weekly" => Some(Interval::Weekly),
            "monthly" => Some(Interval::Monthly),
            _ => None,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timestamp per interval step covering the period that ends at `end`.
///
/// The period start is normalized (end of day; weekly steps snap to that
/// week's Sunday, monthly steps to the last day of the previous month), then
/// stepped forward until `end` is passed. The final step may lie beyond
/// `end`, closing the last partial interval. Periods shorter than one day
/// have no steps; callers bound the upper end (see
/// [`crate::application::validation::PERIOD_MAXIMUM_DAYS`]).
pub fn interval_steps(period_days: i64, interval: Interval, end: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    if period_days < 1 {
        return Vec::new();
    }
    let mut cursor = normalize(end - Duration::days(period_days), interval);
    let mut stamps = Vec::new();
    while cursor < end {
        let next = next_step(cursor, interval);
        stamps.push(next);
        cursor = next;
    }
    stamps
}

fn normalize(ts: DateTime<Utc>, interval: Interval) -> DateTime<Utc> {
    let date = match interval {
        Interval::Daily => ts.date_naive(),
        Interval::Weekly => {
            let back = ts.weekday().num_days_from_sunday() as i64;
            ts.date_naive() - Duration::days(back)
        }
        Interval::Monthly => {
            let first = ts.date_naive().with_day(1).unwrap_or_else(|| ts.date_naive());
            first - Duration::days(1)
        }
    };
    end_of_day(date)
}

fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    let close = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    Utc.from_utc_datetime(&date.and_time(close))
}

fn next_step(ts: DateTime<Utc>, interval: Interval) -> DateTime<Utc> {
    match interval {
        Interval::Daily => ts + Duration::days(1),
        Interval::Weekly => ts + Duration::days(7),
        Interval::Monthly => ts
            .checked_add_months(Months::new(1))
            .unwrap_or_else(|| ts + Duration::days(31)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn label(ts: &DateTime<Utc>) -> String {
        ts.format("%Y-%m-%d").to_string()
    }

    #[test]
    fn test_parse_round_trip() {
        for interval in Interval::ALL {
            assert_eq!(Interval::parse(interval.as_str()), Some(interval));
        }
        assert_eq!(Interval::parse("hourly"), None);
    }

    #[test]
    fn test_daily_steps_cover_period() {
        let stamps = interval_steps(7, Interval::Daily, at(2024, 3, 10, 12));

        assert_eq!(stamps.len(), 7);
        assert_eq!(label(&stamps[0]), "2024-03-04");
        assert_eq!(label(&stamps[6]), "2024-03-10");
    }

    #[test]
    fn test_weekly_steps_snap_to_sunday() {
        // 2024-03-13 is a Wednesday; the normalized start is Sunday 03-03.
        let stamps = interval_steps(7, Interval::Weekly, at(2024, 3, 13, 12));

        assert_eq!(label(&stamps[0]), "2024-03-10");
        for stamp in &stamps {
            assert_eq!(stamp.weekday(), chrono::Weekday::Sun);
        }
    }

    #[test]
    fn test_monthly_steps() {
        let stamps = interval_steps(60, Interval::Monthly, at(2024, 3, 15, 12));

        let labels: Vec<String> = stamps.iter().map(label).collect();
        assert_eq!(labels, vec!["2024-01-31", "2024-02-29", "2024-03-29"]);
    }

    #[test]
    fn test_non_positive_period_has_no_steps() {
        let end = at(2024, 3, 10, 12);
        assert!(interval_steps(0, Interval::Daily, end).is_empty());
        assert!(interval_steps(-3, Interval::Weekly, end).is_empty());
        // Beyond chrono's day range; must not reach the duration arithmetic.
        assert!(interval_steps(-1_000_000_000_000_000, Interval::Daily, end).is_empty());
    }

    #[test]
    fn test_steps_normalized_to_end_of_day() {
        let stamps = interval_steps(3, Interval::Daily, at(2024, 3, 10, 12));
        for stamp in &stamps {
            assert_eq!(stamp.time(), NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap());
        }
    }
}
