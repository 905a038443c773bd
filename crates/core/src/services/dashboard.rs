//! Dashboard overview composition.
//!
//! One page needs several independent fetches; they are issued as a joint
//! fan-out and the combined view model is built only when every fetch
//! succeeds. Any single failure degrades the whole overview to empty
//! defaults, without attributing the failure to a specific fetch.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use scamguard_client::models::Report;

use crate::gateway::ReportsGateway;
use crate::services::recency::{Priority, priority, time_ago};
use crate::services::stats::{DashboardStats, ScamTypeBucket, dashboard_stats, scam_type_distribution};

/// Number of reports surfaced in the recent-activity panel.
const RECENT_LIMIT: usize = 5;

/// A recent report with its derived display labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportHighlight {
    pub id: String,
    pub title: String,
    /// Visual-emphasis bucket derived from age at build time.
    pub priority: Priority,
    /// "2 hours ago"-style label, computed at build time.
    pub reported: String,
}

/// Combined view model for the dashboard landing page.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardOverview {
    pub stats: DashboardStats,
    pub distribution: Vec<ScamTypeBucket>,
    /// Newest reports first, capped at the panel size.
    pub recent: Vec<ReportHighlight>,
    pub trending: Vec<Report>,
}

/// Builds the dashboard view model from a joint fan-out of fetches.
pub struct DashboardService<G> {
    gateway: Arc<G>,
}

impl<G: ReportsGateway> DashboardService<G> {
    #[must_use]
    pub const fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Fetch everything the overview needs and derive its view model at the
    /// current instant. On any failure the overview falls back to empty
    /// defaults; there is no partial render of mismatched data.
    pub async fn load_overview(&self) -> DashboardOverview {
        let fetched = tokio::try_join!(
            self.gateway.list_reports(),
            self.gateway.trending_reports()
        );
        match fetched {
            Ok((reports, trending)) => build_overview(&reports, trending, Utc::now()),
            Err(err) => {
                warn!(error = %err, code = err.error_code(), "dashboard fetch failed");
                DashboardOverview::default()
            }
        }
    }
}

/// Derive the overview from already-fetched collections.
///
/// Split out so the derivation is testable with a fixed instant; the labels
/// depend on `now` and must be recomputed per invocation.
#[must_use]
pub fn build_overview(
    reports: &[Report],
    trending: Vec<Report>,
    now: DateTime<Utc>,
) -> DashboardOverview {
    let mut newest: Vec<&Report> = reports.iter().collect();
    newest.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let recent = newest
        .into_iter()
        .take(RECENT_LIMIT)
        .map(|report| ReportHighlight {
            id: report.id.clone(),
            title: report.title.clone(),
            priority: priority(report.created_at, now),
            reported: time_ago(report.created_at, now),
        })
        .collect();

    DashboardOverview {
        stats: dashboard_stats(reports),
        distribution: scam_type_distribution(reports),
        recent,
        trending,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn report_at(id: &str, created_at: DateTime<Utc>) -> Report {
        Report {
            id: id.to_string(),
            title: format!("report {id}"),
            description: String::new(),
            scam_type: Some("phishing".to_string()),
            status: "open".to_string(),
            created_at,
            reporter_id: None,
        }
    }

    #[test]
    fn test_recent_panel_is_newest_first_and_capped() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let reports: Vec<Report> = (0..8i64)
            .map(|i| report_at(&format!("r{i}"), now - Duration::hours(i)))
            .collect();

        let overview = build_overview(&reports, Vec::new(), now);
        assert_eq!(overview.recent.len(), 5);
        assert_eq!(overview.recent[0].id, "r0");
        assert_eq!(overview.recent[4].id, "r4");
        assert_eq!(overview.recent[0].reported, "Just now");
        assert_eq!(overview.recent[2].reported, "2 hours ago");
        assert_eq!(overview.recent[0].priority, Priority::High);
    }

    #[test]
    fn test_overview_derives_stats_and_distribution() {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let mut reports = vec![
            report_at("r1", now - Duration::hours(30)),
            report_at("r2", now - Duration::hours(7)),
        ];
        reports[0].status = "closed".to_string();

        let overview = build_overview(&reports, Vec::new(), now);
        assert_eq!(overview.stats.total, 2);
        assert_eq!(overview.stats.resolved, 1);
        assert_eq!(overview.stats.success_rate, 50.0);
        assert_eq!(overview.distribution.len(), 1);
        assert_eq!(overview.recent[0].priority, Priority::Medium);
        assert_eq!(overview.recent[1].priority, Priority::Low);
    }

    #[test]
    fn test_default_overview_is_empty() {
        let overview = DashboardOverview::default();
        assert_eq!(overview.stats.total, 0);
        assert!(overview.distribution.is_empty());
        assert!(overview.recent.is_empty());
        assert!(overview.trending.is_empty());
    }
}
