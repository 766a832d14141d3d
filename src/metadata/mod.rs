//! Stream metadata: the provider contract that turns a (service, URL) pair
//! into full stream details, a reqwest-backed implementation, and the
//! resolver service that fetches details for queue items.

pub mod http_provider;
pub mod models;
pub mod provider;
pub mod resolver;
#[cfg(test)]
mod tests;

pub use http_provider::HttpMetadataProvider;
pub use models::{SearchEntry, StreamInfo};
pub use provider::{ResolveError, StreamMetadataProvider};
pub use resolver::StreamResolver;
