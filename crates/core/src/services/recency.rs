//! Report age classification and relative-time display.
//!
//! Both the priority bucket and the "time ago" string use wall-clock hour
//! arithmetic, not calendar-day arithmetic. They depend on the current
//! instant, so `now` is always a parameter and results are never cached
//! beyond a single invocation.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Visual-emphasis bucket derived from report age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    /// Reported less than 6 hours ago.
    High,
    /// Reported 6 to 24 hours ago.
    Medium,
    /// Reported 24 hours ago or earlier.
    Low,
}

impl Priority {
    /// Badge text, e.g. `High Priority`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Priority",
            Self::Medium => "Medium Priority",
            Self::Low => "Low Priority",
        }
    }
}

/// Whole hours elapsed since `created_at`, floored.
#[must_use]
pub fn hours_since(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - created_at).num_seconds().div_euclid(3600)
}

/// Classify a report's age into a priority bucket.
///
/// Boundaries are half-open on the low end: exactly 6 hours is `Medium`,
/// exactly 24 hours is `Low`.
#[must_use]
pub fn priority(created_at: DateTime<Utc>, now: DateTime<Utc>) -> Priority {
    let hours = hours_since(created_at, now);
    if hours < 6 {
        Priority::High
    } else if hours < 24 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Human display string for a report's age.
///
/// Under an hour reads "Just now"; under a day counts hours; under a week
/// counts days (`floor(hours / 24)`); anything older shows the calendar
/// date.
#[must_use]
pub fn time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = hours_since(created_at, now);
    if hours < 1 {
        return "Just now".to_string();
    }
    if hours < 24 {
        return if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{hours} hours ago")
        };
    }

    let days = hours.div_euclid(24);
    if days < 7 {
        return if days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{days} days ago")
        };
    }

    created_at.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_priority_boundaries() {
        let now = now();
        assert_eq!(
            priority(now - (Duration::hours(5) + Duration::minutes(59)), now),
            Priority::High
        );
        assert_eq!(priority(now - Duration::hours(6), now), Priority::Medium);
        assert_eq!(
            priority(now - (Duration::hours(23) + Duration::minutes(59)), now),
            Priority::Medium
        );
        assert_eq!(priority(now - Duration::hours(24), now), Priority::Low);
    }

    #[test]
    fn test_fresh_reports_are_high_priority() {
        let now = now();
        assert_eq!(priority(now, now), Priority::High);
        assert_eq!(priority(now - Duration::minutes(30), now), Priority::High);
    }

    #[test]
    fn test_time_ago_hours() {
        let now = now();
        assert_eq!(time_ago(now, now), "Just now");
        assert_eq!(time_ago(now - Duration::minutes(59), now), "Just now");
        assert_eq!(time_ago(now - Duration::hours(1), now), "1 hour ago");
        assert_eq!(time_ago(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(time_ago(now - Duration::hours(23), now), "23 hours ago");
    }

    #[test]
    fn test_time_ago_days() {
        let now = now();
        assert_eq!(time_ago(now - Duration::hours(25), now), "1 day ago");
        assert_eq!(time_ago(now - Duration::hours(48), now), "2 days ago");
        assert_eq!(time_ago(now - Duration::days(6), now), "6 days ago");
    }

    #[test]
    fn test_time_ago_falls_back_to_date() {
        let now = now();
        let created = now - Duration::days(7);
        assert_eq!(time_ago(created, now), "6/8/2025");
    }

    #[test]
    fn test_hours_since_floors() {
        let now = now();
        assert_eq!(
            hours_since(now - (Duration::hours(5) + Duration::minutes(59)), now),
            5
        );
        assert_eq!(hours_since(now - Duration::hours(6), now), 6);
        assert_eq!(hours_since(now - Duration::seconds(30), now), 0);
    }
}
