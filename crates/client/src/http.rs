//! HTTP plumbing for the ScamGuard REST client.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use scamguard_common::{ApiConfig, AppError, AppResult};

use crate::endpoints::Endpoints;
use crate::session::Session;

/// Envelope the backend wraps record sequences in.
///
/// An absent `results` field is an empty sequence, not a fault.
#[derive(Debug, serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub(crate) struct ResultsEnvelope<T> {
    #[serde(default)]
    pub results: Vec<T>,
}

/// Typed client for the remote ScamGuard backend.
///
/// One instance per process is enough; cloning shares the connection pool
/// and the injected [`Session`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    endpoints: Endpoints,
    session: Session,
}

impl ApiClient {
    /// Create a client from configuration, seeding the session from a
    /// configured token when one is present.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let session = config
            .token
            .as_ref()
            .map_or_else(Session::anonymous, Session::with_token);
        Self::with_session(config, session)
    }

    /// Create a client around an externally owned session.
    pub fn with_session(config: &ApiConfig, session: Session) -> AppResult<Self> {
        let endpoints = Endpoints::new(&config.base_url)?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        // The backend applies no timeout of its own; only configure one when
        // asked to.
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|err| AppError::Config(err.to_string()))?;

        Ok(Self {
            http,
            endpoints,
            session,
        })
    }

    /// The session this client attaches to requests.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    // ========== Request helpers ==========

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: String) -> AppResult<T> {
        self.send(self.http.get(&url)).await
    }

    /// GET a list endpoint, unwrapping the `results` envelope.
    pub(crate) async fn get_results<T: DeserializeOwned>(&self, url: String) -> AppResult<Vec<T>> {
        let envelope: ResultsEnvelope<T> = self.get_json(url).await?;
        Ok(envelope.results)
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: String,
        body: &B,
    ) -> AppResult<T> {
        self.send(self.http.post(&url).json(body)).await
    }

    pub(crate) async fn post_unit<B: Serialize + ?Sized>(
        &self,
        url: String,
        body: &B,
    ) -> AppResult<()> {
        self.dispatch(self.http.post(&url).json(body)).await.map(drop)
    }

    pub(crate) async fn patch_unit<B: Serialize + ?Sized>(
        &self,
        url: String,
        body: &B,
    ) -> AppResult<()> {
        self.dispatch(self.http.patch(&url).json(body)).await.map(drop)
    }

    pub(crate) async fn delete_unit(&self, url: String) -> AppResult<()> {
        self.dispatch(self.http.delete(&url)).await.map(drop)
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<T> {
        let response = self.dispatch(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Malformed(err.to_string()))
    }

    /// Attach the bearer credential, send, and fold the outcome into the
    /// transport / rejected / unauthorized taxonomy.
    async fn dispatch(&self, mut builder: RequestBuilder) -> AppResult<Response> {
        if let Some(token) = self.session.access_token().await {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| AppError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!(status = %status, url = %response.url(), "request ok");
            return Ok(response);
        }

        let url = response.url().clone();
        if status == StatusCode::UNAUTHORIZED {
            warn!(url = %url, "request unauthorized");
            return Err(AppError::Unauthorized);
        }

        let message = response.text().await.unwrap_or_default();
        warn!(status = %status, url = %url, "request rejected");
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(url.path().to_string()));
        }
        Err(AppError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
