//! Authentication API service

use crate::client::api_client;
use lucrum_http::client::error::ClientError;

/// Authentication API service
#[derive(Clone)]
pub struct AuthApiService;

impl AuthApiService {
    /// Create a new auth API service
    pub fn new() -> Self {
        Self
    }

    /// Log in and return the session token
    ///
    /// Failures propagate unmapped; the view renders them with
    /// [`ClientError::user_message`].
    pub async fn login(&self, email: String, password: String) -> Result<String, ClientError> {
        let client = api_client()?;
        let response = client.login(email, password).await?;
        Ok(response.token)
    }

    /// Create a new account
    pub async fn register(&self, email: String, password: String) -> Result<(), ClientError> {
        let client = api_client()?;
        client.register(email, password).await
    }
}

impl Default for AuthApiService {
    fn default() -> Self {
        Self::new()
    }
}
