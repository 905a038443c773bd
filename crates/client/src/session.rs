//! Authenticated session state.
//!
//! The session is an explicit handle injected into the [`ApiClient`] rather
//! than a process-wide global: whoever constructs the client owns the
//! lifecycle. Login/register establish tokens, refresh rotates them, logout
//! invalidates them, and every authenticated request reads the access token
//! through this handle.
//!
//! [`ApiClient`]: crate::ApiClient

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{TokenInfo, TokenPair};

/// Shared handle to the current authenticated session.
///
/// Cloning is cheap; all clones observe the same tokens.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<Option<TokenPair>>>,
}

impl Session {
    /// An unauthenticated session.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Restore a session from a stored access token (no refresh token).
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        let tokens = TokenPair {
            access: TokenInfo {
                token: token.into(),
                expires: None,
            },
            refresh: None,
        };
        Self {
            inner: Arc::new(RwLock::new(Some(tokens))),
        }
    }

    /// Install the token pair returned by login, register or refresh.
    pub async fn establish(&self, tokens: TokenPair) {
        *self.inner.write().await = Some(tokens);
    }

    /// Drop all tokens. Called on logout.
    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }

    /// The bearer token attached to authenticated requests.
    pub async fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(|tokens| tokens.access.token.clone())
    }

    /// The refresh token, if the backend issued one.
    pub async fn refresh_token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .as_ref()
            .and_then(|tokens| tokens.refresh.as_ref())
            .map(|info| info.token.clone())
    }

    /// Whether any token is currently held.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.is_some()
    }
}
