//! Frontend configuration

/// Application configuration
///
/// URL and token values are baked in at build time from `LUCRUM_*`
/// environment variables so the same bundle can be pointed at different
/// bot deployments.
pub struct AppConfig;

impl AppConfig {
    /// Local storage key for the session token
    pub const AUTH_TOKEN_KEY: &'static str = "auth_token";

    /// Base URL of the bot API
    pub fn api_base() -> &'static str {
        option_env!("LUCRUM_API_BASE").unwrap_or("http://localhost:8080/api")
    }

    /// Static API token attached to every request, empty when unset
    pub fn api_token() -> &'static str {
        option_env!("LUCRUM_API_TOKEN").unwrap_or("")
    }
}
