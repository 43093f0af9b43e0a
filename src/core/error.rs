//! Custom error types for duostory
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for duostory operations
#[derive(Error, Debug)]
pub enum BotError {
    /// Browser session launch or lifecycle errors
    #[error("Session error: {0}")]
    Session(String),

    /// Login detection or credential submission errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Story navigation errors
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// WebDriver protocol errors
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}

/// Convenience Result type for duostory operations
pub type Result<T> = std::result::Result<T, BotError>;

impl BotError {
    /// Create a session error
    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }

    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    /// Create a navigation error
    pub fn navigation(msg: impl Into<String>) -> Self {
        Self::Navigation(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
