//! Notification operations.

use serde_json::json;

use scamguard_common::AppResult;

use crate::http::ApiClient;
use crate::models::Notification;

impl ApiClient {
    /// Fetch the notifications addressed to a user.
    pub async fn user_notifications(&self, user_id: &str) -> AppResult<Vec<Notification>> {
        self.get_results(self.endpoints().user_notifications(user_id))
            .await
    }

    /// Fetch every notification (admin scope).
    pub async fn all_notifications(&self) -> AppResult<Vec<Notification>> {
        self.get_results(self.endpoints().notifications()).await
    }

    /// Mark one notification as read.
    pub async fn mark_notification_read(&self, notification_id: &str) -> AppResult<()> {
        self.patch_unit(
            self.endpoints().notification(notification_id),
            &json!({ "read": true }),
        )
        .await
    }

    /// Mark all of a user's notifications as read.
    pub async fn mark_all_notifications_read(&self, user_id: &str) -> AppResult<()> {
        self.patch_unit(
            self.endpoints().user_notifications(user_id),
            &json!({ "read": true }),
        )
        .await
    }
}
