//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    ///
    /// `message` is the display message resolved from the response: the
    /// body's `error`/`message` field when present, otherwise the
    /// `"<code> <reason>"` status line.
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Message suitable for rendering to the user
    ///
    /// Prefers the server-supplied message (already resolved body-first by
    /// [`from_status`](Self::from_status)), then the transport error text,
    /// then `fallback` when nothing non-empty is carried.
    pub fn user_message(&self, fallback: &str) -> String {
        let message = match self {
            Self::Request(err) => err.to_string(),
            Self::ServerError { message, .. } => message.clone(),
            Self::AuthenticationFailed(message)
            | Self::NotFound(message)
            | Self::BadRequest(message)
            | Self::Forbidden(message)
            | Self::Configuration(message) => message.clone(),
            Self::Serialization(err) => err.to_string(),
        };

        if message.is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }

    /// Numeric HTTP status, where one is known
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request(err) => err.status().map(|status| status.as_u16()),
            Self::ServerError { status, .. } => Some(*status),
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::BadRequest(_) => Some(400),
            Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn from_status_maps_known_codes() {
        let err = ClientError::from_status(StatusCode::UNAUTHORIZED, "invalid credentials".into());
        assert!(matches!(err, ClientError::AuthenticationFailed(_)));

        let err = ClientError::from_status(StatusCode::BAD_GATEWAY, "upstream down".into());
        assert!(matches!(err, ClientError::ServerError { status: 502, .. }));
    }

    #[test]
    fn user_message_prefers_carried_message() {
        let err = ClientError::from_status(StatusCode::UNAUTHORIZED, "invalid credentials".into());
        assert_eq!(err.user_message("Login failed"), "invalid credentials");
    }

    #[test]
    fn user_message_uses_status_line_when_body_was_empty() {
        // The status line is what execute() resolves for unstructured bodies.
        let err = ClientError::from_status(StatusCode::NOT_FOUND, "404 Not Found".into());
        assert_eq!(err.user_message("Something went wrong"), "404 Not Found");
    }

    #[test]
    fn user_message_passes_plain_messages_through() {
        let err = ClientError::Configuration("boom".into());
        assert_eq!(err.user_message("fallback"), "boom");
    }

    #[test]
    fn user_message_falls_back_on_empty() {
        let err = ClientError::Configuration(String::new());
        assert_eq!(err.user_message("Something went wrong"), "Something went wrong");
    }

    #[test]
    fn status_code_extraction() {
        let err = ClientError::from_status(StatusCode::NOT_FOUND, "404 Not Found".into());
        assert_eq!(err.status_code(), Some(404));

        assert_eq!(ClientError::Configuration("boom".into()).status_code(), None);

        let err = ClientError::ServerError {
            status: 503,
            message: "maintenance".into(),
        };
        assert_eq!(err.status_code(), Some(503));
    }
}
