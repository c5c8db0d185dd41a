//! spacex-dash-common — Shared errors and configuration used across all spacex-dash crates.

pub mod error;
pub mod config;

// Re-export commonly used types
pub use config::Config;
pub use error::{ApiError, DashError, Result};
