//! HTTP transport module
//!
//! Sends GraphQL query text to the service and hands back the raw status
//! and body.
//!
//! # Features
//!
//! - **Transport seam**: [`Transport`] is the only thing the traversal
//!   talks to, so tests can script responses without a network
//! - **Plain POST**: one request per call, no retries, no rate limiting
//! - **Configurable**: timeout, user agent and default headers

mod client;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use transport::{Transport, TransportResponse};

#[cfg(test)]
mod tests;
