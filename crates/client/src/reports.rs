//! Report operations.

use serde_json::json;
use tracing::{debug, info};
use validator::Validate;

use scamguard_common::AppResult;

use crate::http::ApiClient;
use crate::models::{NewReport, Report, ReportPatch, VoteKind};

impl ApiClient {
    /// Fetch every community report.
    pub async fn all_reports(&self) -> AppResult<Vec<Report>> {
        let reports = self.get_results(self.endpoints().all_reports()).await?;
        debug!(count = reports.len(), "fetched community reports");
        Ok(reports)
    }

    /// Fetch the authenticated user's own reports.
    pub async fn my_reports(&self) -> AppResult<Vec<Report>> {
        let reports = self.get_results(self.endpoints().my_reports()).await?;
        debug!(count = reports.len(), "fetched own reports");
        Ok(reports)
    }

    /// Fetch the currently trending reports.
    pub async fn trending_reports(&self) -> AppResult<Vec<Report>> {
        self.get_results(self.endpoints().trending_reports()).await
    }

    /// Fetch a single report by identifier.
    pub async fn report(&self, report_id: &str) -> AppResult<Report> {
        self.get_json(self.endpoints().report(report_id)).await
    }

    /// Submit a new report. Returns the acknowledged record with its
    /// server-assigned identifier.
    pub async fn create_report(&self, input: &NewReport) -> AppResult<Report> {
        input.validate()?;
        let report: Report = self
            .post_json(self.endpoints().create_report(), input)
            .await?;
        info!(report_id = %report.id, scam_type = %report.scam_type.as_deref().unwrap_or("other"), "report created");
        Ok(report)
    }

    /// Move a report to a new workflow status.
    pub async fn update_report_status(&self, report_id: &str, status: &str) -> AppResult<()> {
        self.patch_unit(
            self.endpoints().report(report_id),
            &json!({ "status": status }),
        )
        .await?;
        info!(report_id, status, "report status updated");
        Ok(())
    }

    /// Edit a report's fields.
    pub async fn edit_report(&self, report_id: &str, patch: &ReportPatch) -> AppResult<()> {
        self.patch_unit(self.endpoints().edit_report(report_id), patch)
            .await?;
        info!(report_id, "report edited");
        Ok(())
    }

    /// Delete a report.
    pub async fn delete_report(&self, report_id: &str) -> AppResult<()> {
        self.delete_unit(self.endpoints().report(report_id)).await?;
        info!(report_id, "report deleted");
        Ok(())
    }

    /// Cast a vote on a report.
    pub async fn vote_on_report(&self, report_id: &str, vote: VoteKind) -> AppResult<()> {
        self.post_unit(
            self.endpoints().vote_on_report(report_id),
            &json!({ "vote": vote }),
        )
        .await
    }
}
