//! User management operations (admin scope).

use tracing::{debug, info};

use scamguard_common::AppResult;

use crate::http::ApiClient;
use crate::models::{User, UserPatch, UserRole, UserStatus};

impl ApiClient {
    /// Fetch every account.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let users = self.get_results(self.endpoints().users()).await?;
        debug!(count = users.len(), "fetched users");
        Ok(users)
    }

    /// Relabel a user's role. Status is untouched.
    pub async fn update_user_role(&self, user_id: &str, role: UserRole) -> AppResult<()> {
        let patch = UserPatch {
            role: Some(role),
            status: None,
        };
        self.patch_unit(self.endpoints().user(user_id), &patch)
            .await?;
        info!(user_id, role = role.as_str(), "user role updated");
        Ok(())
    }

    /// Relabel a user's status. Role is untouched.
    pub async fn update_user_status(&self, user_id: &str, status: UserStatus) -> AppResult<()> {
        let patch = UserPatch {
            role: None,
            status: Some(status),
        };
        self.patch_unit(self.endpoints().user(user_id), &patch)
            .await?;
        info!(user_id, status = status.as_str(), "user status updated");
        Ok(())
    }
}
