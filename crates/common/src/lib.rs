//! Common utilities and shared types for scamguard-rs.
//!
//! This crate provides foundational components used across all scamguard-rs
//! crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//!
//! # Example
//!
//! ```no_run
//! use scamguard_common::{AppResult, Config};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     println!("API base URL: {}", config.api.base_url);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;

pub use config::{ApiConfig, Config};
pub use error::{AppError, AppResult};
