//! Report collection ownership and mutation reconciliation.
//!
//! A board owns the reports one page fetched, for that page's lifetime
//! only; nothing is shared or cached across pages. Mutations go to the
//! remote API first and touch local state only after the acknowledgment, so
//! a failed call leaves the collection exactly as it was.

use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use scamguard_client::models::{NewReport, Report, ReportPatch, VoteKind};
use scamguard_common::AppResult;

use crate::gateway::ReportsGateway;
use crate::services::filter::{ReportFilter, filter_reports};
use crate::services::stats::{DashboardStats, ScamTypeBucket, dashboard_stats, scam_type_distribution};

/// Which slice of the report collection a board shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope {
    /// Every community report.
    All,
    /// Only the authenticated user's own reports.
    Mine,
}

/// View service over one fetched report collection.
pub struct ReportBoard<G> {
    gateway: Arc<G>,
    scope: ReportScope,
    reports: Vec<Report>,
    loading: bool,
    /// Current search/filter selections. Re-applied on every [`visible`]
    /// call rather than stored as a filtered copy.
    ///
    /// [`visible`]: ReportBoard::visible
    pub filter: ReportFilter,
}

impl<G: ReportsGateway> ReportBoard<G> {
    /// Create a board that has not fetched yet.
    #[must_use]
    pub fn new(gateway: Arc<G>, scope: ReportScope) -> Self {
        Self {
            gateway,
            scope,
            reports: Vec::new(),
            loading: true,
            filter: ReportFilter::default(),
        }
    }

    /// Fetch the collection for this board's scope. A failure degrades to
    /// an empty collection and terminates the loading state; no retry.
    pub async fn load(&mut self) {
        let fetched = match self.scope {
            ReportScope::All => self.gateway.list_reports().await,
            ReportScope::Mine => self.gateway.my_reports().await,
        };
        match fetched {
            Ok(reports) => self.reports = reports,
            Err(err) => {
                warn!(error = %err, code = err.error_code(), "failed to fetch reports");
                self.reports.clear();
            }
        }
        self.loading = false;
    }

    /// The owned collection, in fetch order.
    #[must_use]
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Whether the initial fetch is still outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The reports matching the current filter, in fetch order.
    #[must_use]
    pub fn visible(&self) -> Vec<Report> {
        filter_reports(&self.reports, &self.filter)
    }

    /// Summary counters, recomputed from the owned collection.
    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        dashboard_stats(&self.reports)
    }

    /// Category distribution, recomputed from the owned collection.
    #[must_use]
    pub fn distribution(&self) -> Vec<ScamTypeBucket> {
        scam_type_distribution(&self.reports)
    }

    /// Validate and submit a new report. On a `Mine` board the acknowledged
    /// record joins the local collection.
    pub async fn submit(&mut self, input: NewReport) -> AppResult<Report> {
        input.validate()?;
        let created = self.gateway.create_report(&input).await?;
        info!(report_id = %created.id, "report submitted");
        if self.scope == ReportScope::Mine {
            self.reports.push(created.clone());
        }
        Ok(created)
    }

    /// Move a report to a new status, then replace the one matching local
    /// record in place. Collection order is unchanged.
    pub async fn set_status(&mut self, report_id: &str, status: &str) -> AppResult<()> {
        self.gateway.update_report_status(report_id, status).await?;
        if let Some(report) = self.reports.iter_mut().find(|r| r.id == report_id) {
            report.status = status.to_string();
        }
        Ok(())
    }

    /// Edit a report's fields, then merge the acknowledged values into the
    /// one matching local record. Collection order is unchanged.
    pub async fn edit(&mut self, report_id: &str, patch: ReportPatch) -> AppResult<()> {
        self.gateway.edit_report(report_id, &patch).await?;
        if let Some(report) = self.reports.iter_mut().find(|r| r.id == report_id) {
            apply_patch(report, &patch);
        }
        Ok(())
    }

    /// Delete a report, removing exactly the matching local record on
    /// success.
    pub async fn delete(&mut self, report_id: &str) -> AppResult<()> {
        self.gateway.delete_report(report_id).await?;
        self.reports.retain(|r| r.id != report_id);
        Ok(())
    }

    /// Cast a vote. Votes do not change any locally held field.
    pub async fn vote(&self, report_id: &str, vote: VoteKind) -> AppResult<()> {
        self.gateway.vote_on_report(report_id, vote).await
    }
}

/// Merge acknowledged field edits into the locally held record.
fn apply_patch(report: &mut Report, patch: &ReportPatch) {
    if let Some(title) = &patch.title {
        report.title = title.clone();
    }
    if let Some(description) = &patch.description {
        report.description = description.clone();
    }
    if let Some(scam_type) = &patch.scam_type {
        report.scam_type = Some(scam_type.clone());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn report(id: &str, title: &str) -> Report {
        Report {
            id: id.to_string(),
            title: title.to_string(),
            description: "description".to_string(),
            scam_type: Some("phishing".to_string()),
            status: "open".to_string(),
            created_at: Utc::now(),
            reporter_id: None,
        }
    }

    #[test]
    fn test_apply_patch_merges_only_present_fields() {
        let mut record = report("r1", "Old title");
        apply_patch(
            &mut record,
            &ReportPatch {
                title: Some("New title".to_string()),
                ..ReportPatch::default()
            },
        );
        assert_eq!(record.title, "New title");
        assert_eq!(record.description, "description");
        assert_eq!(record.scam_type.as_deref(), Some("phishing"));
    }

    #[test]
    fn test_apply_patch_empty_is_a_no_op() {
        let mut record = report("r1", "Old title");
        let before = record.clone();
        apply_patch(&mut record, &ReportPatch::default());
        assert_eq!(record, before);
    }
}
