//! Error types for the ISM client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during ISM client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed or was not configured.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success HTTP status from the Dashboards server.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The server answered with `{ok: false, error}`.
    ///
    /// The message is shown to the user verbatim.
    #[error("{0}")]
    Server(String),

    /// Response body did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Maximum retries exceeded for a rate-limited request.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Message to show the user for this failure.
    ///
    /// Server-reported failures are surfaced verbatim. Everything else is
    /// reported as `default` with the error detail appended.
    pub fn user_message(&self, default: &str) -> String {
        match self {
            Self::Server(message) => message.clone(),
            other => format!("{default}: {other}"),
        }
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::AuthFailed(_) => true,
            Self::ApiError { status, .. } => matches!(status, 401 | 403),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        Self::InvalidResponse(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_passes_server_text_through() {
        let err = ClientError::Server("index_not_found_exception".to_string());
        assert_eq!(
            err.user_message("There was a problem loading the managed indices"),
            "index_not_found_exception"
        );
    }

    #[test]
    fn test_user_message_appends_detail() {
        let err = ClientError::InvalidResponse("missing field `ok`".to_string());
        let message = err.user_message("There was a problem removing the policies");
        assert!(message.starts_with("There was a problem removing the policies: "));
        assert!(message.contains("missing field `ok`"));
    }

    #[test]
    fn test_is_auth_error() {
        let err = ClientError::ApiError {
            status: 401,
            url: "http://localhost:5601/api/ism/managedIndices".to_string(),
            message: "Unauthorized".to_string(),
        };
        assert!(err.is_auth_error());
        assert!(!ClientError::Server("nope".to_string()).is_auth_error());
    }
}
