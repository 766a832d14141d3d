//! Playback queue: ordered queue items plus a current-position marker.

pub mod item;
pub mod play_queue;

pub use item::{QueueItem, StreamKind, RECOVERY_UNSET};
pub use play_queue::{PlaybackQueue, QueueError};
