//! Service modules for API interactions

pub mod auth;

pub use auth::AuthApiService;
