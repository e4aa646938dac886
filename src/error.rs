// src/error.rs

//! Unified error handling for the scraper application.

use std::fmt;

use thiserror::Error;

/// Result type alias for scraper operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// CSV writing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Configuration or usage error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required page could not be fetched
    #[error("Unreachable category resource {url}: {message}")]
    UnreachableCategory { url: String, message: String },

    /// A fetched document is missing an expected structural element
    #[error("Unexpected page structure: {context}")]
    StructureMismatch { context: String },
}

impl AppError {
    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an error for a required page that could not be fetched.
    pub fn unreachable(url: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::UnreachableCategory {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create an error for a document missing an expected element.
    pub fn structure(context: impl Into<String>) -> Self {
        Self::StructureMismatch {
            context: context.into(),
        }
    }
}
