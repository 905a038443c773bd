//! Aggregate analytics and health probes.

use scamguard_common::AppResult;

use crate::http::ApiClient;
use crate::models::{HealthStatus, ReportAnalytics};

impl ApiClient {
    /// Fetch server-side aggregate analytics over the report collection.
    pub async fn report_analytics(&self) -> AppResult<ReportAnalytics> {
        self.get_json(self.endpoints().report_analytics()).await
    }

    /// Probe backend health.
    pub async fn health(&self) -> AppResult<HealthStatus> {
        self.get_json(self.endpoints().health()).await
    }
}
