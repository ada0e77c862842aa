//! Authentication API client methods

use super::{LucrumClient, error::ClientError};
use crate::types::{AuthRequest, AuthResponse};

impl LucrumClient {
    /// Authenticate with email and password
    ///
    /// On success the response carries the session token; failures propagate
    /// unmapped for the caller to render.
    pub async fn login(&self, email: String, password: String) -> Result<AuthResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/auth")
            .json(&AuthRequest { email, password });
        self.execute(req).await
    }

    /// Create a new account
    ///
    /// The response body is not interesting to the dashboard and is dropped.
    pub async fn register(&self, email: String, password: String) -> Result<(), ClientError> {
        let req = self
            .request(reqwest::Method::POST, "/users")
            .json(&AuthRequest { email, password });
        self.execute_unit(req).await
    }
}
