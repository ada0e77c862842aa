//! Shared UI components

pub mod spinner;

pub use spinner::LoadingSpinner;
