//! Wire types shared between the dashboard and the bot API

use serde::{Deserialize, Serialize};

/// Credentials for login and registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthRequest {
    /// Account email address
    pub email: String,
    /// Account password
    pub password: String,
}

/// Successful authentication response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Opaque session token
    pub token: String,
}

/// Error response body returned by the API
///
/// The server sends either an `error` or a `message` field depending on the
/// handler; both are optional so unstructured bodies decode to empty.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Server-supplied display message, `error` preferred over `message`
    pub fn into_message(self) -> Option<String> {
        self.error
            .or(self.message)
            .filter(|message| !message.is_empty())
    }
}
