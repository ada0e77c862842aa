//! Shared types and HTTP client for the Lucrum dashboard
//!
//! The dashboard talks to the bot's REST API over two public endpoints
//! (`POST /auth`, `POST /users`). This crate holds the wire types, a typed
//! client, and the error taxonomy the frontend uses to render failures.

pub mod client;
pub mod types;

pub use client::{LucrumClient, LucrumClientBuilder, error::ClientError};
