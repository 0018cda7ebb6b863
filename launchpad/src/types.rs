//! Error types for the launchpad session.

use launchpad_agent::LlmError;
use launchpad_core::{CatalogError, CommentError, NavigationError, TradeParamsError};

/// Error types for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid YAML for the schema
    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Trade simulator constants out of range
    #[error("Invalid trading config: {0}")]
    Trading(#[from] TradeParamsError),
}

/// Error types for session operations.
#[derive(Debug, thiserror::Error)]
pub enum LaunchpadError {
    /// Catalog error
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Navigation error
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Comment error
    #[error("Comment error: {0}")]
    Comment(#[from] CommentError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Text-generation backend could not be built
    #[error("Backend error: {0}")]
    Backend(#[from] LlmError),

    /// Request validation error
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, LaunchpadError>;
