//! A single playable entry: immutable metadata snapshot plus the small
//! mutable playback state (resume position, last error, auto-queued flag).

use serde::{Deserialize, Serialize};

use crate::metadata::{SearchEntry, StreamInfo};

/// Sentinel for "no resume position recorded".
pub const RECOVERY_UNSET: i64 = i64::MIN;

/// Broad classification of a playable stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamKind {
    Live,
    OnDemand,
    AudioOnly,
    Other,
}

impl Default for StreamKind {
    fn default() -> Self {
        StreamKind::Other
    }
}

/// One entry of a [`PlaybackQueue`](crate::queue::PlaybackQueue).
///
/// The metadata snapshot is fixed at construction; only the recovery
/// position, the last resolution error and the auto-queued flag change
/// afterwards, and only through the owning queue or the resolver.
/// Text fields are normalized to `""` when the source had nothing, so
/// readers never see an absent title/url/thumbnail/uploader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueItem {
    title: String,
    url: String,
    service_id: i32,
    /// Duration in seconds; negative when unknown.
    duration_secs: i64,
    thumbnail_url: String,
    uploader: String,
    uploader_url: Option<String>,
    kind: StreamKind,
    /// Free-form provenance tag recording how the item entered the queue.
    pub ingress: String,
    /// Resume position in milliseconds, or [`RECOVERY_UNSET`].
    recovery_position_ms: i64,
    last_error: Option<String>,
    auto_queued: bool,
}

impl QueueItem {
    /// Builds an item from a fully-resolved stream snapshot. A known start
    /// position (> 0 seconds) seeds the resume position.
    pub fn from_stream_info(info: &StreamInfo) -> Self {
        let mut item = Self::from_fields(
            &info.name,
            &info.url,
            info.service_id,
            info.duration_secs,
            info.thumbnail_url.as_deref(),
            info.uploader_name.as_deref(),
            info.uploader_url.clone(),
            info.kind,
        );
        if info.start_position_secs > 0 {
            item.set_recovery_position(info.start_position_secs * 1000);
        }
        item
    }

    /// Builds an item from a lightweight search-result snapshot.
    pub fn from_search_entry(entry: &SearchEntry) -> Self {
        Self::from_fields(
            &entry.name,
            &entry.url,
            entry.service_id,
            entry.duration_secs,
            entry.thumbnail_url.as_deref(),
            entry.uploader_name.as_deref(),
            entry.uploader_url.clone(),
            entry.kind,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn from_fields(
        title: &str,
        url: &str,
        service_id: i32,
        duration_secs: i64,
        thumbnail_url: Option<&str>,
        uploader: Option<&str>,
        uploader_url: Option<String>,
        kind: StreamKind,
    ) -> Self {
        QueueItem {
            title: title.to_string(),
            url: url.to_string(),
            service_id,
            duration_secs,
            thumbnail_url: thumbnail_url.unwrap_or_default().to_string(),
            uploader: uploader.unwrap_or_default().to_string(),
            uploader_url,
            kind,
            ingress: "unknown".to_string(),
            recovery_position_ms: RECOVERY_UNSET,
            last_error: None,
            auto_queued: false,
        }
    }

    /// Best-effort provenance tag for a search entry whose title is a
    /// path-like string: everything after the last `'/'`. Not a URL parser.
    pub fn ingress_from_entry(entry: &SearchEntry) -> String {
        match entry.name.rfind('/') {
            Some(idx) => entry.name[idx + 1..].to_string(),
            None => entry.name.clone(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn service_id(&self) -> i32 {
        self.service_id
    }

    pub fn duration_secs(&self) -> i64 {
        self.duration_secs
    }

    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    pub fn uploader(&self) -> &str {
        &self.uploader
    }

    pub fn uploader_url(&self) -> Option<&str> {
        self.uploader_url.as_deref()
    }

    pub fn kind(&self) -> StreamKind {
        self.kind
    }

    /// Resume position in milliseconds, or [`RECOVERY_UNSET`].
    pub fn recovery_position_ms(&self) -> i64 {
        self.recovery_position_ms
    }

    /// Last recorded resolution failure, if any. Written only by the
    /// resolver; success does not clear it.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_auto_queued(&self) -> bool {
        self.auto_queued
    }

    /// Marks the item as appended by the queue engine rather than the user
    /// (e.g. autoplay-next).
    pub fn set_auto_queued(&mut self, auto_queued: bool) {
        self.auto_queued = auto_queued;
    }

    /// Records playback progress. Owning queue / player only.
    ///
    /// Accepts [`RECOVERY_UNSET`] or a non-negative offset; any other
    /// negative value is a bogus progress report and is ignored, keeping the
    /// recorded position intact.
    pub(crate) fn set_recovery_position(&mut self, position_ms: i64) {
        if position_ms != RECOVERY_UNSET && position_ms < 0 {
            return;
        }
        self.recovery_position_ms = position_ms;
    }

    /// Records a resolution failure, overwriting any previous one.
    pub(crate) fn record_error(&mut self, message: String) {
        self.last_error = Some(message);
    }
}
