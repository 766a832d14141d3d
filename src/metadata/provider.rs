//! Metadata provider contract and its error type.

use std::error::Error;
use std::fmt;

use async_trait::async_trait;
use reqwest::Error as ReqwestError;

use super::models::StreamInfo;

/// Error types for metadata resolution.
#[derive(Debug)]
pub enum ResolveError {
    Network(ReqwestError),
    /// The service rejected or could not handle the URL.
    Service(String),
    InvalidResponse(String),
    Other(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Network(e) => write!(f, "Network error: {}", e),
            ResolveError::Service(msg) => write!(f, "Service error: {}", msg),
            ResolveError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            ResolveError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl Error for ResolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ResolveError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ReqwestError> for ResolveError {
    fn from(err: ReqwestError) -> Self {
        ResolveError::Network(err)
    }
}

/// Turns a (service id, URL) pair into full stream details.
///
/// Implementations are network-bound and may be invoked concurrently for
/// different items. Timeout policy belongs to the implementation, not to
/// callers.
#[async_trait]
pub trait StreamMetadataProvider: Send + Sync {
    async fn fetch(&self, service_id: i32, url: &str) -> Result<StreamInfo, ResolveError>;
}
