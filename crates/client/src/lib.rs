//! Typed REST client for the ScamGuard backend.
//!
//! This crate is the data-source boundary of scamguard-rs: every remote
//! operation the application consumes lives here as one async method on
//! [`ApiClient`], grouped by concern:
//!
//! - **Authentication**: register, login, refresh, logout, password reset,
//!   profile reads/updates
//! - **Reports**: create, list (all/mine/trending), read, status update,
//!   field edit, delete, vote
//! - **Users**: admin listing and role/status relabels
//! - **Notifications**: per-user and global listings, read marks
//! - **Analytics**: aggregate report analytics and health probes
//!
//! Authenticated calls carry a bearer credential read from the injected
//! [`Session`]; list responses arrive in a `{ "results": [...] }` envelope
//! where an absent field means an empty sequence.
//!
//! # Example
//!
//! ```no_run
//! use scamguard_client::{ApiClient, models::Credentials};
//! use scamguard_common::{AppResult, Config};
//!
//! async fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     let client = ApiClient::new(&config.api)?;
//!     client
//!         .login(&Credentials {
//!             email: "user@example.com".to_string(),
//!             password: "hunter2-but-longer".to_string(),
//!         })
//!         .await?;
//!     let reports = client.all_reports().await?;
//!     println!("{} community reports", reports.len());
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod auth;
pub mod endpoints;
pub mod http;
pub mod models;
pub mod notifications;
pub mod reports;
pub mod session;
pub mod users;

pub use endpoints::Endpoints;
pub use http::ApiClient;
pub use session::Session;
