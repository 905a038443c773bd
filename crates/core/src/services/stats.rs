//! Dashboard statistics derived from a report collection.
//!
//! Everything here is a pure reduction over the records currently in hand;
//! nothing is incrementally maintained. Callers recompute on every fetch.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use scamguard_client::models::Report;

/// Statuses that count as resolved.
///
/// Deliberately narrow and case-sensitive: `verified`, `investigating` and
/// other terminal-sounding statuses do not count.
const RESOLVED_STATUSES: [&str; 2] = ["closed", "resolved"];

/// Bucket for reports without a category.
const UNCATEGORIZED: &str = "other";

/// Summary counters over a report collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Number of reports in the collection.
    pub total: usize,
    /// Reports whose status is `closed` or `resolved`.
    pub resolved: usize,
    /// Resolved share as a percentage, rounded to one decimal place.
    /// Zero when the collection is empty.
    pub success_rate: f64,
    /// Distinct submitters seen in the collection.
    pub active_users: usize,
}

/// One aggregated category in the scam type distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScamTypeBucket {
    /// Raw category value, or `other` for uncategorized reports.
    pub scam_type: String,
    /// Reports carrying this category.
    pub count: usize,
    /// Share of the total, rounded to a whole percent. Rounded per bucket,
    /// so the column does not necessarily sum to 100.
    pub percentage: u32,
}

/// Whether a report counts toward the resolved tally.
#[must_use]
pub fn is_resolved(report: &Report) -> bool {
    RESOLVED_STATUSES.contains(&report.status.as_str())
}

/// Reduce a report collection to its summary counters.
#[must_use]
pub fn dashboard_stats(reports: &[Report]) -> DashboardStats {
    let total = reports.len();
    let resolved = reports.iter().filter(|report| is_resolved(report)).count();

    let success_rate = if total == 0 {
        0.0
    } else {
        ((resolved as f64 / total as f64) * 1000.0).round() / 10.0
    };

    let active_users = reports
        .iter()
        .filter_map(|report| report.reporter_id.as_deref())
        .collect::<HashSet<_>>()
        .len();

    DashboardStats {
        total,
        resolved,
        success_rate,
        active_users,
    }
}

/// Group a report collection by category.
///
/// Buckets are sorted descending by count; ties keep first-seen order.
/// Unrecognized categories appear verbatim rather than being coerced.
#[must_use]
pub fn scam_type_distribution(reports: &[Report]) -> Vec<ScamTypeBucket> {
    let total = reports.len();
    if total == 0 {
        return Vec::new();
    }

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for report in reports {
        let key = report.scam_type.as_deref().unwrap_or(UNCATEGORIZED);
        if !counts.contains_key(key) {
            order.push(key);
        }
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut buckets: Vec<ScamTypeBucket> = order
        .into_iter()
        .map(|scam_type| {
            let count = counts[scam_type];
            let percentage = ((count as f64 / total as f64) * 100.0).round() as u32;
            ScamTypeBucket {
                scam_type: scam_type.to_string(),
                count,
                percentage,
            }
        })
        .collect();

    // Vec::sort_by is stable, which is what keeps encounter order on ties.
    buckets.sort_by(|a, b| b.count.cmp(&a.count));
    buckets
}
