//! Error types for scamguard-rs.

use thiserror::Error;

/// Application result type.
pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
///
/// Remote calls fail in one of three ways: the request could not complete
/// ([`AppError::Transport`]), the server rejected it
/// ([`AppError::Api`] / [`AppError::Unauthorized`]), or the response body had
/// an unexpected shape ([`AppError::Malformed`]). Callers rarely distinguish
/// the three; every variant collapses into the same "operation failed"
/// outcome and is recoverable by retrying the action manually.
#[derive(Debug, Error)]
pub enum AppError {
    // === Remote call failures ===
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("API rejected request: {status} {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Message extracted from the response body, if any.
        message: String,
    },

    #[error("Unexpected response shape: {0}")]
    Malformed(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    // === Local failures ===
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns the error code used in user-facing notifications and logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Api { .. } => "API_ERROR",
            Self::Malformed(_) => "MALFORMED_RESPONSE",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Whether the failure came from the remote call rather than local input.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::Api { .. } | Self::Malformed(_) | Self::Unauthorized
        )
    }
}

// === From implementations ===

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Malformed(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Transport("connection refused".to_string()).error_code(),
            "TRANSPORT_ERROR"
        );
        assert_eq!(
            AppError::Api {
                status: 500,
                message: "boom".to_string()
            }
            .error_code(),
            "API_ERROR"
        );
        assert_eq!(AppError::Unauthorized.error_code(), "UNAUTHORIZED");
    }

    #[test]
    fn test_is_remote() {
        assert!(AppError::Unauthorized.is_remote());
        assert!(!AppError::Validation("title required".to_string()).is_remote());
    }
}
