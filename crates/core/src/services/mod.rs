//! Derived-state services.

#![allow(missing_docs)]

pub mod board;
pub mod dashboard;
pub mod directory;
pub mod display;
pub mod filter;
pub mod recency;
pub mod stats;

pub use board::{ReportBoard, ReportScope};
pub use dashboard::{DashboardOverview, DashboardService, ReportHighlight, build_overview};
pub use directory::{UserDirectory, UserFilter, filter_users};
pub use display::{
    DESCRIPTION_PREVIEW_CHARS, Tone, priority_tone, role_tone, scam_type_tone, status_label,
    status_tone, truncate_description, user_status_tone,
};
pub use filter::{ReportFilter, filter_reports, selection};
pub use recency::{Priority, hours_since, priority, time_ago};
pub use stats::{
    DashboardStats, ScamTypeBucket, dashboard_stats, is_resolved, scam_type_distribution,
};
