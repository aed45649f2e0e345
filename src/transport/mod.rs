//! Request execution boundary.
//!
//! The operation layer only produces [`RequestDescriptor`] values; a
//! [`RequestExecutor`] owns everything that touches the network:
//! authentication, connection pooling, timeouts and retries.
//! [`HttpExecutor`] is the reqwest-backed implementation used by default.

pub mod http;

use async_trait::async_trait;

use crate::operation::{RequestDescriptor, ResponseEnvelope};
use crate::Result;

pub use http::{ExecutorConfig, HttpExecutor, RetryConfig};

/// Performs one resolved request.
///
/// Implementations must return service failures as errors rather than
/// envelopes; callers receive whatever the executor reports, unchanged.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, request: RequestDescriptor) -> Result<ResponseEnvelope>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Connection and timeout failures are worth another attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            TransportError::Http(e) => e.is_connect() || e.is_timeout(),
            TransportError::Other(_) => false,
        }
    }
}
