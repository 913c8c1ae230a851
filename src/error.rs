//! Error types for trafikk-client
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Three variants describe a failed query against the service and are
//! terminal for a whole traversal:
//! - [`Error::Transport`] - the server answered with a non-200 status
//! - [`Error::Protocol`] - the body carried a top-level GraphQL `errors` list
//! - [`Error::Shape`] - the expected data path was missing or malformed

use serde_json::Value;
use thiserror::Error;

/// The main error type for trafikk-client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Query Errors
    // ============================================================================
    #[error("HTTP {status}: {body}")]
    Transport { status: u16, body: String },

    #[error("GraphQL errors: {}", summarize_errors(.errors))]
    Protocol { errors: Value },

    #[error("Unexpected response shape: {message}")]
    Shape { message: String, body: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{name}': {message}")]
    InvalidArgument { name: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Template Errors
    // ============================================================================
    #[error("Undefined variable in template: {variable}")]
    UndefinedVariable { variable: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("{0}")]
    Other(String),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-200 HTTP status
    Transport,
    /// GraphQL-level error list in the response
    Protocol,
    /// Response did not have the expected shape
    Shape,
    /// Everything raised on the client side (network, config, arguments, I/O)
    Client,
}

impl Error {
    /// Create a transport error
    pub fn transport(status: u16, body: impl Into<String>) -> Self {
        Self::Transport {
            status,
            body: body.into(),
        }
    }

    /// Create a protocol error from the server's `errors` value
    pub fn protocol(errors: Value) -> Self {
        Self::Protocol { errors }
    }

    /// Create a shape error carrying the full response body
    pub fn shape(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Shape {
            message: message.into(),
            body: body.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an undefined variable error
    pub fn undefined_var(variable: impl Into<String>) -> Self {
        Self::UndefinedVariable {
            variable: variable.into(),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Transport { .. } => ErrorKind::Transport,
            Error::Protocol { .. } => ErrorKind::Protocol,
            Error::Shape { .. } => ErrorKind::Shape,
            _ => ErrorKind::Client,
        }
    }

    /// HTTP status carried by a transport error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, when the error kept one
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Transport { body, .. } | Error::Shape { body, .. } => Some(body),
            _ => None,
        }
    }

    /// The `message` fields of a protocol error's entries
    pub fn protocol_messages(&self) -> Vec<String> {
        match self {
            Error::Protocol { errors } => error_messages(errors),
            _ => Vec::new(),
        }
    }
}

fn error_messages(errors: &Value) -> Vec<String> {
    match errors {
        Value::Array(items) => items
            .iter()
            .map(|item| match item.get("message").and_then(Value::as_str) {
                Some(message) => message.to_string(),
                None => item.to_string(),
            })
            .collect(),
        other => vec![other.to_string()],
    }
}

fn summarize_errors(errors: &Value) -> String {
    let messages = error_messages(errors);
    if messages.is_empty() {
        "[]".to_string()
    } else {
        messages.join("; ")
    }
}

/// Result type alias for trafikk-client
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
