//! Data models for stream metadata.

use serde::{Deserialize, Serialize};

use crate::queue::StreamKind;

/// Fully-resolved stream details as returned by a metadata provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamInfo {
    pub name: String,
    pub url: String,
    pub service_id: i32,
    /// Duration in seconds; negative when unknown.
    #[serde(default = "unknown_duration")]
    pub duration_secs: i64,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub uploader_name: Option<String>,
    #[serde(default)]
    pub uploader_url: Option<String>,
    #[serde(default)]
    pub kind: StreamKind,
    /// Start offset in seconds when the link carried one (e.g. `?t=90`).
    #[serde(default)]
    pub start_position_secs: i64,
    /// Playable media URL for the player backend.
    #[serde(default)]
    pub stream_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Lightweight snapshot from a search-result or channel listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEntry {
    pub name: String,
    pub url: String,
    pub service_id: i32,
    #[serde(default = "unknown_duration")]
    pub duration_secs: i64,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub uploader_name: Option<String>,
    #[serde(default)]
    pub uploader_url: Option<String>,
    #[serde(default)]
    pub kind: StreamKind,
}

fn unknown_duration() -> i64 {
    -1
}
