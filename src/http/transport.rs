//! Transport abstraction

use crate::error::Result;
use async_trait::async_trait;

/// Status and body of one response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl TransportResponse {
    /// Create a response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends one GraphQL query and returns whatever the server answered
///
/// Implementations must not interpret the status: a non-200 answer is a
/// successful `send`. Only failures that produce no response at all
/// (connection refused, timeout) are errors here.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `{"query": query}` to `endpoint`
    async fn send(&self, endpoint: &str, query: &str) -> Result<TransportResponse>;
}
