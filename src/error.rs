// src/error.rs

//! Unified error handling for the lookup service.

use std::fmt;

use thiserror::Error;

/// Result type alias for wordbook operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Closed set of error kinds exposed to callers of the lookup service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad request data (empty text, too-short prefix)
    Invalid,
    /// Word absent from the store and from the external source
    NotFound,
    /// Network failure, timeout or cancellation
    Unavailable,
    /// Anything else (storage, configuration, serialization)
    Internal,
}

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Caller supplied unusable input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Word not found for the requested language
    #[error("Word '{word}' not found for language '{language}'")]
    NotFound { word: String, language: String },

    /// No scraper registered for the language
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// The request was cancelled before completion
    #[error("Operation cancelled")]
    Cancelled,

    /// Upstream answered with an unusable status
    #[error("Upstream error for {url}: {message}")]
    Upstream { url: String, message: String },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Persistence collaborator failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create an invalid-input error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a not-found error for a word/language pair.
    pub fn not_found(word: impl Into<String>, language: impl Into<String>) -> Self {
        Self::NotFound {
            word: word.into(),
            language: language.into(),
        }
    }

    /// Create an upstream error with the offending URL.
    pub fn upstream(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Upstream {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a storage error.
    pub fn storage(message: impl fmt::Display) -> Self {
        Self::Storage(message.to_string())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Collapse this error into the public error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::Invalid,
            Self::NotFound { .. } | Self::UnsupportedLanguage(_) => ErrorKind::NotFound,
            Self::Cancelled | Self::Upstream { .. } | Self::Http(_) => ErrorKind::Unavailable,
            Self::Io(_)
            | Self::Json(_)
            | Self::Toml(_)
            | Self::Selector { .. }
            | Self::Storage(_)
            | Self::Config(_)
            | Self::Validation(_) => ErrorKind::Internal,
        }
    }

    /// Whether this error means "nothing to return" rather than a failure.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
