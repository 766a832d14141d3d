//! Deep-link routing: mapping an incoming URL to a known service and the
//! kind of content it points at.

use std::error::Error;
use std::fmt;

use url::Url;

/// What a recognized link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Stream,
    Channel,
    Playlist,
}

/// A link recognized by some streaming service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceLink {
    pub service_id: i32,
    pub kind: LinkKind,
}

/// Knows which service (if any) handles a given URL. Implemented over the
/// out-of-scope extraction library.
pub trait ServiceDirectory: Send + Sync {
    fn lookup(&self, url: &Url) -> Option<ServiceLink>;
}

/// A routed open request, ready to be dispatched to the matching surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    pub service_id: i32,
    pub kind: LinkKind,
    pub url: String,
}

/// Error types for navigation and link routing.
#[derive(Debug)]
pub enum NavError {
    InvalidUrl(url::ParseError),
    /// The URL parsed but no known service handles it.
    UnknownDestination { url: String },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::InvalidUrl(e) => write!(f, "Invalid URL: {}", e),
            NavError::UnknownDestination { url } => {
                write!(f, "URL not known to any service: {}", url)
            }
        }
    }
}

impl Error for NavError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NavError::InvalidUrl(e) => Some(e),
            _ => None,
        }
    }
}

impl From<url::ParseError> for NavError {
    fn from(err: url::ParseError) -> Self {
        NavError::InvalidUrl(err)
    }
}
