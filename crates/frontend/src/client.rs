//! Client configuration and initialization

use crate::config::AppConfig;
use lucrum_http::client::{LucrumClient, error::ClientError};
use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Global client instance
static CLIENT: Lazy<Mutex<Option<LucrumClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the shared API client instance
pub fn api_client() -> Result<LucrumClient, ClientError> {
    let mut client_lock = CLIENT.lock().expect("Failed to acquire client lock");

    if let Some(client) = client_lock.as_ref() {
        return Ok(client.clone());
    }

    let mut builder = LucrumClient::builder().base_url(AppConfig::api_base());

    let api_token = AppConfig::api_token();
    if !api_token.is_empty() {
        builder = builder.api_key(api_token);
    }

    let client = builder.build()?;
    *client_lock = Some(client.clone());
    Ok(client)
}
