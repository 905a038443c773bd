//! Seams between the derived-state services and the remote API.
//!
//! Services consume these traits instead of the concrete HTTP client so
//! tests can substitute in-memory fakes. The production implementations
//! delegate straight to [`ApiClient`].

use async_trait::async_trait;

use scamguard_client::ApiClient;
use scamguard_client::models::{NewReport, Report, ReportPatch, User, UserRole, UserStatus, VoteKind};
use scamguard_common::AppResult;

/// Remote operations over the report collection.
#[async_trait]
pub trait ReportsGateway: Send + Sync {
    /// Fetch every community report.
    async fn list_reports(&self) -> AppResult<Vec<Report>>;

    /// Fetch the authenticated user's own reports.
    async fn my_reports(&self) -> AppResult<Vec<Report>>;

    /// Fetch the currently trending reports.
    async fn trending_reports(&self) -> AppResult<Vec<Report>>;

    /// Create a report and return the acknowledged record.
    async fn create_report(&self, input: &NewReport) -> AppResult<Report>;

    /// Move a report to a new workflow status.
    async fn update_report_status(&self, report_id: &str, status: &str) -> AppResult<()>;

    /// Edit a report's fields.
    async fn edit_report(&self, report_id: &str, patch: &ReportPatch) -> AppResult<()>;

    /// Delete a report.
    async fn delete_report(&self, report_id: &str) -> AppResult<()>;

    /// Cast a vote on a report.
    async fn vote_on_report(&self, report_id: &str, vote: VoteKind) -> AppResult<()>;
}

/// Remote operations over the user directory (admin scope).
#[async_trait]
pub trait UsersGateway: Send + Sync {
    /// Fetch every account.
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Relabel a user's role.
    async fn update_user_role(&self, user_id: &str, role: UserRole) -> AppResult<()>;

    /// Relabel a user's status.
    async fn update_user_status(&self, user_id: &str, status: UserStatus) -> AppResult<()>;
}

#[async_trait]
impl ReportsGateway for ApiClient {
    async fn list_reports(&self) -> AppResult<Vec<Report>> {
        self.all_reports().await
    }

    async fn my_reports(&self) -> AppResult<Vec<Report>> {
        Self::my_reports(self).await
    }

    async fn trending_reports(&self) -> AppResult<Vec<Report>> {
        Self::trending_reports(self).await
    }

    async fn create_report(&self, input: &NewReport) -> AppResult<Report> {
        Self::create_report(self, input).await
    }

    async fn update_report_status(&self, report_id: &str, status: &str) -> AppResult<()> {
        Self::update_report_status(self, report_id, status).await
    }

    async fn edit_report(&self, report_id: &str, patch: &ReportPatch) -> AppResult<()> {
        Self::edit_report(self, report_id, patch).await
    }

    async fn delete_report(&self, report_id: &str) -> AppResult<()> {
        Self::delete_report(self, report_id).await
    }

    async fn vote_on_report(&self, report_id: &str, vote: VoteKind) -> AppResult<()> {
        Self::vote_on_report(self, report_id, vote).await
    }
}

#[async_trait]
impl UsersGateway for ApiClient {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        Self::list_users(self).await
    }

    async fn update_user_role(&self, user_id: &str, role: UserRole) -> AppResult<()> {
        Self::update_user_role(self, user_id, role).await
    }

    async fn update_user_status(&self, user_id: &str, status: UserStatus) -> AppResult<()> {
        Self::update_user_status(self, user_id, status).await
    }
}
