//! Logical operation to URL mapping for the remote API.
//!
//! The backend exposes a fixed table of REST operations; only the base URL
//! varies by environment. Nothing outside this module builds request paths.

use url::Url;

/// URL table rooted at the configured API base.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Build the table from a base URL such as
    /// `https://scammer-backend.vercel.app/v1`.
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        // Reject unparseable bases up front; everything after is format!.
        Url::parse(base_url)?;
        Ok(Self {
            base: base_url.trim_end_matches('/').to_string(),
        })
    }

    // ========== Authentication ==========

    #[must_use]
    pub fn register(&self) -> String {
        format!("{}/auth/register", self.base)
    }

    #[must_use]
    pub fn login(&self) -> String {
        format!("{}/auth/login", self.base)
    }

    #[must_use]
    pub fn refresh_token(&self) -> String {
        format!("{}/auth/refresh-token", self.base)
    }

    #[must_use]
    pub fn logout(&self) -> String {
        format!("{}/auth/logout", self.base)
    }

    #[must_use]
    pub fn forgot_password(&self) -> String {
        format!("{}/auth/forgot-password", self.base)
    }

    #[must_use]
    pub fn reset_password(&self) -> String {
        format!("{}/auth/reset-password", self.base)
    }

    /// A user's own profile, for reads and updates.
    #[must_use]
    pub fn user_profile(&self, user_id: &str) -> String {
        format!("{}/auth/users/{user_id}", self.base)
    }

    // ========== Reports ==========

    #[must_use]
    pub fn create_report(&self) -> String {
        format!("{}/reports/create", self.base)
    }

    #[must_use]
    pub fn all_reports(&self) -> String {
        format!("{}/reports/allReports", self.base)
    }

    #[must_use]
    pub fn my_reports(&self) -> String {
        format!("{}/reports/my-reports", self.base)
    }

    #[must_use]
    pub fn trending_reports(&self) -> String {
        format!("{}/reports/trending", self.base)
    }

    /// A single report, for reads, status updates and deletion.
    #[must_use]
    pub fn report(&self, report_id: &str) -> String {
        format!("{}/reports/{report_id}", self.base)
    }

    /// Field edits go through a dedicated update path.
    #[must_use]
    pub fn edit_report(&self, report_id: &str) -> String {
        format!("{}/reports/{report_id}/update", self.base)
    }

    #[must_use]
    pub fn vote_on_report(&self, report_id: &str) -> String {
        format!("{}/reports/{report_id}/vote", self.base)
    }

    // ========== Users (admin scope) ==========

    #[must_use]
    pub fn users(&self) -> String {
        format!("{}/users", self.base)
    }

    /// A single user record, for role/status relabels.
    #[must_use]
    pub fn user(&self, user_id: &str) -> String {
        format!("{}/users/{user_id}", self.base)
    }

    // ========== Notifications ==========

    #[must_use]
    pub fn user_notifications(&self, user_id: &str) -> String {
        format!("{}/users/{user_id}/notifications", self.base)
    }

    #[must_use]
    pub fn notifications(&self) -> String {
        format!("{}/notifications", self.base)
    }

    #[must_use]
    pub fn notification(&self, notification_id: &str) -> String {
        format!("{}/notifications/{notification_id}", self.base)
    }

    // ========== Analytics & health ==========

    #[must_use]
    pub fn report_analytics(&self) -> String {
        format!("{}/analytics/reports", self.base)
    }

    #[must_use]
    pub fn health(&self) -> String {
        format!("{}/health", self.base)
    }
}
