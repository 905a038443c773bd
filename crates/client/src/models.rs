//! Wire models for the ScamGuard REST API.

#![allow(missing_docs)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A community-submitted scam report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Unique identifier, stable for the record's lifetime.
    pub id: String,
    /// Short summary of the scam.
    pub title: String,
    /// Full account of the incident. Unbounded; display code truncates.
    pub description: String,
    /// Scam category, e.g. `investment_scam`. The set is backend-defined and
    /// open to extension; a missing value aggregates under `other`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub scam_type: Option<String>,
    /// Workflow status, e.g. `pending`, `open`, `in-progress`, `closed`.
    /// Backend-defined; unlisted values only ever hit display fallbacks.
    #[serde(default)]
    pub status: String,
    /// When the report was submitted.
    pub created_at: DateTime<Utc>,
    /// The submitting user, when the backend includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter_id: Option<String>,
}

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Moderator,
    Admin,
}

impl UserRole {
    /// Returns the lowercase string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
        }
    }
}

/// Account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
    Pending,
}

impl UserStatus {
    /// Returns the lowercase string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
            Self::Pending => "pending",
        }
    }
}

/// An account record.
///
/// Role and status are independently mutable; a change to one never touches
/// the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
}

/// Input for submitting a new report.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    #[validate(length(min = 1, max = 256))]
    pub title: String,

    #[validate(length(min = 1, max = 10_000))]
    pub description: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub scam_type: String,

    /// Initial workflow status. Submissions always start out `pending`.
    pub status: String,
}

impl NewReport {
    /// Create a submission with the initial `pending` status.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        scam_type: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            scam_type: scam_type.into(),
            status: "pending".to_string(),
        }
    }
}

/// Field edits for an existing report. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scam_type: Option<String>,
}

impl ReportPatch {
    /// Whether the patch carries no edits at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.scam_type.is_none()
    }
}

/// Community vote direction on a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Up,
    Down,
}

/// Login credentials.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct Credentials {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Input for registering a new account.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// A bearer token with its optional expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
}

/// Access/refresh token pair returned by login, register and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: TokenInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<TokenInfo>,
}

/// Response payload of the login and register operations.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    #[serde(default)]
    pub user: Option<User>,
    pub tokens: TokenPair,
}

/// Edits to the caller's own profile. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Role/status relabel for a user record. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

/// A notification addressed to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Server-side aggregate analytics over the report collection.
///
/// Field-tolerant: the backend shape is loosely specified, so everything
/// defaults rather than faulting.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportAnalytics {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub resolved: u64,
    #[serde(default)]
    pub by_type: std::collections::HashMap<String, u64>,
}

/// Backend health probe response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
}
