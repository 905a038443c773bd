//! Authentication operations.
//!
//! Token renewal is not automatic: [`ApiClient::refresh_session`] is a
//! distinct remote call the caller invokes when a request comes back
//! unauthorized.

use serde_json::json;
use tracing::{info, warn};
use validator::Validate;

use scamguard_common::{AppError, AppResult};

use crate::http::ApiClient;
use crate::models::{AuthPayload, Credentials, ProfilePatch, RegisterInput, TokenPair, User};

impl ApiClient {
    /// Register a new account and establish its session.
    pub async fn register(&self, input: &RegisterInput) -> AppResult<AuthPayload> {
        input.validate()?;
        let payload: AuthPayload = self.post_json(self.endpoints().register(), input).await?;
        self.session().establish(payload.tokens.clone()).await;
        info!("account registered");
        Ok(payload)
    }

    /// Log in and establish the session.
    pub async fn login(&self, credentials: &Credentials) -> AppResult<AuthPayload> {
        credentials.validate()?;
        let payload: AuthPayload = self.post_json(self.endpoints().login(), credentials).await?;
        self.session().establish(payload.tokens.clone()).await;
        info!("logged in");
        Ok(payload)
    }

    /// Exchange the held refresh token for a fresh token pair.
    pub async fn refresh_session(&self) -> AppResult<()> {
        let refresh = self
            .session()
            .refresh_token()
            .await
            .ok_or(AppError::Unauthorized)?;
        let tokens: TokenPair = self
            .post_json(
                self.endpoints().refresh_token(),
                &json!({ "refreshToken": refresh }),
            )
            .await?;
        self.session().establish(tokens).await;
        Ok(())
    }

    /// Log out. The local session is invalidated even when the remote call
    /// fails; the token is gone either way.
    pub async fn logout(&self) -> AppResult<()> {
        let refresh = self.session().refresh_token().await;
        let result = self
            .post_unit(
                self.endpoints().logout(),
                &json!({ "refreshToken": refresh }),
            )
            .await;
        if let Err(err) = result {
            warn!(error = %err, "remote logout failed, clearing session anyway");
        }
        self.session().clear().await;
        info!("logged out");
        Ok(())
    }

    /// Start a password reset for the given address.
    pub async fn forgot_password(&self, email: &str) -> AppResult<()> {
        self.post_unit(
            self.endpoints().forgot_password(),
            &json!({ "email": email }),
        )
        .await
    }

    /// Complete a password reset with the emailed token.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> AppResult<()> {
        self.post_unit(
            self.endpoints().reset_password(),
            &json!({ "token": token, "password": new_password }),
        )
        .await
    }

    /// Read a user's own profile.
    pub async fn profile(&self, user_id: &str) -> AppResult<User> {
        self.get_json(self.endpoints().user_profile(user_id)).await
    }

    /// Update a user's own profile.
    pub async fn update_profile(&self, user_id: &str, patch: &ProfilePatch) -> AppResult<()> {
        self.patch_unit(self.endpoints().user_profile(user_id), patch)
            .await
    }
}
