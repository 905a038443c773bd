//! User directory aggregation and administration.
//!
//! Structurally the report filter specialized to account records, plus a
//! view service owning the fetched collection and its role/status relabels.

use std::sync::Arc;

use tracing::{info, warn};

use scamguard_client::models::{User, UserRole, UserStatus};
use scamguard_common::AppResult;

use crate::gateway::UsersGateway;

/// Active predicates over the user directory.
///
/// The free-text query matches name and email case-insensitively; role and
/// status, when set, must match exactly. Predicates are AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub query: String,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

impl UserFilter {
    /// Whether an account satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        let query = self.query.to_lowercase();
        let matches_search = query.is_empty()
            || user.name.to_lowercase().contains(&query)
            || user.email.to_lowercase().contains(&query);

        let matches_role = self.role.is_none_or(|wanted| user.role == wanted);
        let matches_status = self.status.is_none_or(|wanted| user.status == wanted);

        matches_search && matches_role && matches_status
    }
}

/// The matching subsequence, in input order.
#[must_use]
pub fn filter_users(users: &[User], filter: &UserFilter) -> Vec<User> {
    users
        .iter()
        .filter(|user| filter.matches(user))
        .cloned()
        .collect()
}

/// Admin view over the user directory.
///
/// Owns the fetched collection for the lifetime of the page that created
/// it; relabels replace the one matching record in place only after the
/// remote call is acknowledged.
pub struct UserDirectory<G> {
    gateway: Arc<G>,
    users: Vec<User>,
    loading: bool,
}

impl<G: UsersGateway> UserDirectory<G> {
    /// Create a directory that has not fetched yet.
    #[must_use]
    pub const fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            users: Vec::new(),
            loading: true,
        }
    }

    /// Fetch the directory. A failure degrades to an empty collection and
    /// terminates the loading state; there is no automatic retry.
    pub async fn load(&mut self) {
        match self.gateway.list_users().await {
            Ok(users) => self.users = users,
            Err(err) => {
                warn!(error = %err, code = err.error_code(), "failed to fetch users");
                self.users.clear();
            }
        }
        self.loading = false;
    }

    /// The fetched collection, in fetch order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Whether the initial fetch is still outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The accounts matching the given predicates, in fetch order.
    #[must_use]
    pub fn filtered(&self, filter: &UserFilter) -> Vec<User> {
        filter_users(&self.users, filter)
    }

    /// Relabel a user's role, updating the local record after the remote
    /// acknowledgment. Status is untouched.
    pub async fn set_role(&mut self, user_id: &str, role: UserRole) -> AppResult<()> {
        self.gateway.update_user_role(user_id, role).await?;
        if let Some(user) = self.users.iter_mut().find(|user| user.id == user_id) {
            user.role = role;
        }
        info!(user_id, role = role.as_str(), "user role relabeled");
        Ok(())
    }

    /// Relabel a user's status, updating the local record after the remote
    /// acknowledgment. Role is untouched.
    pub async fn set_status(&mut self, user_id: &str, status: UserStatus) -> AppResult<()> {
        self.gateway.update_user_status(user_id, status).await?;
        if let Some(user) = self.users.iter_mut().find(|user| user.id == user_id) {
            user.status = status;
        }
        info!(user_id, status = status.as_str(), "user status relabeled");
        Ok(())
    }
}
