//! Resolver service: fetches full stream details for a queue item just
//! before playback and records failures on the item.

use std::sync::Arc;

use tracing::{error, instrument};

use super::models::StreamInfo;
use super::provider::{ResolveError, StreamMetadataProvider};
use crate::queue::QueueItem;

const METADATA_LOG_TARGET: &str = "playroute::metadata";

/// Resolves queue items through a metadata provider.
///
/// Every call issues a fresh fetch, there is no memoization; retry policy
/// belongs to the caller. Because the item is borrowed mutably for the
/// duration of the call, two resolves for the same item cannot overlap and a
/// stale completion can never overwrite a newer one.
pub struct StreamResolver {
    provider: Arc<dyn StreamMetadataProvider>,
}

impl StreamResolver {
    pub fn new(provider: Arc<dyn StreamMetadataProvider>) -> Self {
        StreamResolver { provider }
    }

    /// Fetches full stream details for `item`.
    ///
    /// On failure the error is recorded on the item (overwriting any
    /// previous one) so later reads can report the last known failure, and
    /// the failure is still returned to the caller. Success leaves any
    /// previously recorded error in place.
    #[instrument(skip(self, item), fields(service_id = item.service_id(), url = item.url()))]
    pub async fn resolve(&self, item: &mut QueueItem) -> Result<StreamInfo, ResolveError> {
        match self.provider.fetch(item.service_id(), item.url()).await {
            Ok(info) => Ok(info),
            Err(e) => {
                error!(target: METADATA_LOG_TARGET, "Failed to resolve stream details: {}", e);
                item.record_error(e.to_string());
                Err(e)
            }
        }
    }
}
