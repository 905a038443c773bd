//! Derived-state core for scamguard-rs.
//!
//! Every page of the application reduces the same fetched collections to
//! the same view models; this crate is that shared reduction layer:
//!
//! - **Stats**: summary counters and the scam type distribution
//! - **Recency**: priority buckets and "time ago" labels
//! - **Filtering**: free-text + categorical predicates over reports and
//!   users
//! - **Boards/Directory**: collection-owning view services with
//!   acknowledged-mutation reconciliation
//! - **Dashboard**: joint fan-out fetch composed into one overview
//!
//! Remote access goes through the [`gateway`] traits so tests can run
//! against in-memory fakes.

pub mod gateway;
pub mod services;

pub use gateway::{ReportsGateway, UsersGateway};
pub use services::*;
