//! Configuration module
//!
//! This module provides the `SnippetConfig` struct and its builder for
//! configuring snippet retrieval and content generation with validation and
//! sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{ConfigError, SnippetConfigBuilder};
pub use types::{FetchStrategy, SnippetConfig};
