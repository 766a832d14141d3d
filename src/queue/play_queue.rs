//! Ordered, serializable sequence of queue items with a single current
//! position. The queue is the payload type handed through the
//! [`HandoffStore`](crate::handoff::HandoffStore), so it must round-trip
//! through serde with field-exact values and hold no live references.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::item::QueueItem;

const QUEUE_LOG_TARGET: &str = "playroute::queue";

/// Error types for queue mutations.
#[derive(Debug, PartialEq, Eq)]
pub enum QueueError {
    /// Requested index lies outside the queue.
    IndexOutOfBounds { index: usize, len: usize },
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::IndexOutOfBounds { index, len } => {
                write!(f, "queue index {} out of bounds (len {})", index, len)
            }
        }
    }
}

impl Error for QueueError {}

/// Ordered playback queue. Insertion order is playback order.
///
/// Mutation is owner-only; the type is `Clone` so callers can snapshot it
/// for handoff, but it is never shared mutably.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackQueue {
    items: Vec<QueueItem>,
    index: Option<usize>,
}

impl PlaybackQueue {
    pub fn new() -> Self {
        PlaybackQueue { items: Vec::new(), index: None }
    }

    /// Builds a queue from items, positioned at `index` when in bounds.
    pub fn from_items(items: Vec<QueueItem>, index: usize) -> Self {
        let index = if index < items.len() { Some(index) } else { None };
        PlaybackQueue { items, index }
    }

    /// The item at the current position, or `None` when the queue is empty
    /// or no position is set.
    pub fn current(&self) -> Option<&QueueItem> {
        self.index.and_then(|i| self.items.get(i))
    }

    pub fn current_index(&self) -> Option<usize> {
        self.index
    }

    /// Moves the current position. Out-of-range indices are rejected, the
    /// queue is left unchanged.
    pub fn set_index(&mut self, index: usize) -> Result<(), QueueError> {
        if index >= self.items.len() {
            return Err(QueueError::IndexOutOfBounds { index, len: self.items.len() });
        }
        self.index = Some(index);
        Ok(())
    }

    /// Appends to the end of the queue. The first append of an unpositioned
    /// queue sets the position to that item.
    pub fn append(&mut self, item: QueueItem) {
        self.items.push(item);
        if self.index.is_none() {
            self.index = Some(0);
        }
        debug!(target: QUEUE_LOG_TARGET, len = self.items.len(), "Appended item to queue");
    }

    /// Inserts directly after the current position ("enqueue next").
    /// Falls back to a plain append when no position is set.
    pub fn insert_after_current(&mut self, item: QueueItem) {
        match self.index {
            Some(i) if i + 1 < self.items.len() => self.items.insert(i + 1, item),
            _ => {
                self.items.push(item);
                if self.index.is_none() {
                    self.index = Some(0);
                }
            }
        }
        debug!(target: QUEUE_LOG_TARGET, len = self.items.len(), "Inserted item after current");
    }

    /// Removes the item at `index`, shifting the current position so it
    /// keeps pointing at the same item where possible.
    pub fn remove(&mut self, index: usize) -> Result<QueueItem, QueueError> {
        if index >= self.items.len() {
            return Err(QueueError::IndexOutOfBounds { index, len: self.items.len() });
        }
        let removed = self.items.remove(index);
        self.index = match self.index {
            Some(_) if self.items.is_empty() => None,
            Some(cur) if index < cur => Some(cur - 1),
            Some(cur) if cur >= self.items.len() => Some(self.items.len() - 1),
            other => other,
        };
        Ok(removed)
    }

    /// Records playback progress on the item at the current position.
    pub fn set_current_recovery(&mut self, position_ms: i64) {
        if let Some(i) = self.index {
            if let Some(item) = self.items.get_mut(i) {
                item.set_recovery_position(position_ms);
            }
        }
    }

    pub fn items(&self) -> &[QueueItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
