//! TDP Search Common Library
//!
//! Shared code for the TDP Search client and page server including:
//! - Data model mirroring the search backend's responses
//! - Composite paper identifier parsing
//! - Error types and handling
//! - Configuration management
//! - Metrics

pub mod config;
pub mod errors;
pub mod metrics;
pub mod models;

// Re-export commonly used types
pub use config::{ApiConfig, AppConfig};
pub use errors::{AppError, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
