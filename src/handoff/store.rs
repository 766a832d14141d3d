//! Bounded, mutex-guarded store mapping single-use keys to serialized
//! snapshots. One component publishes a value and passes only the opaque key
//! through a primitive-only message; the receiving surface takes the value
//! back out. Absence of a value is a normal race (the consumer may start
//! before, after, or never), never an error.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::queue::PlaybackQueue;

const HANDOFF_LOG_TARGET: &str = "playroute::handoff";

/// Default entry bound; old entries are evicted once exceeded.
pub const DEFAULT_CAPACITY: usize = 5;

struct Envelope {
    key: String,
    type_name: &'static str,
    payload: serde_json::Value,
}

/// Process-wide handoff store.
///
/// Created once at process start and injected into the director and the
/// player surfaces; surface-lifecycle callbacks may call in from arbitrary
/// threads, hence the interior mutex. Values are stored as serialized
/// snapshots, so what comes back out is always a deep copy.
pub struct HandoffStore {
    entries: Mutex<VecDeque<Envelope>>,
    capacity: usize,
}

impl Default for HandoffStore {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HandoffStore {
    pub fn new(capacity: usize) -> Self {
        HandoffStore {
            entries: Mutex::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    /// Stores a snapshot of `value` and returns a fresh single-use key.
    ///
    /// Returns `None` when the value cannot be serialized; callers must
    /// treat that as "could not hand off" and send their message without
    /// queue context rather than fail.
    pub fn put<T: Serialize>(&self, value: &T) -> Option<String> {
        let payload = match serde_json::to_value(value) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(target: HANDOFF_LOG_TARGET, "Could not serialize value for handoff: {}", e);
                return None;
            }
        };

        let key = Uuid::new_v4().to_string();
        let mut entries = self.entries.lock().expect("handoff store lock poisoned");
        entries.push_back(Envelope {
            key: key.clone(),
            type_name: std::any::type_name::<T>(),
            payload,
        });
        while entries.len() > self.capacity {
            let evicted = entries.pop_front();
            if let Some(evicted) = evicted {
                debug!(target: HANDOFF_LOG_TARGET, key = %evicted.key, "Evicted unconsumed handoff entry");
            }
        }
        debug!(target: HANDOFF_LOG_TARGET, key = %key, "Stored handoff value");
        Some(key)
    }

    /// Retrieves and removes the value stored under `key`.
    ///
    /// Unknown or already-consumed keys yield `None` — an expected race,
    /// treated as "no queue to resume".
    ///
    /// # Panics
    ///
    /// Panics when the stored value was put under a different type than the
    /// one requested. That is a caller-side protocol violation, not an
    /// environmental condition, and must fail loudly.
    pub fn take<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let envelope = {
            let mut entries = self.entries.lock().expect("handoff store lock poisoned");
            let pos = entries.iter().position(|e| e.key == key)?;
            entries.remove(pos)
        }?;

        let requested = std::any::type_name::<T>();
        if envelope.type_name != requested {
            panic!(
                "handoff type mismatch for key {}: stored {} but {} was requested",
                key, envelope.type_name, requested
            );
        }

        match serde_json::from_value(envelope.payload) {
            Ok(value) => {
                debug!(target: HANDOFF_LOG_TARGET, key, "Consumed handoff value");
                Some(value)
            }
            Err(e) => {
                // Stored under the right type but no longer decodable; treat
                // like an expired entry.
                warn!(target: HANDOFF_LOG_TARGET, key, "Could not deserialize handoff value: {}", e);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("handoff store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The staging seam the director depends on: hand a queue to the store,
/// get back the key — or `None` when the queue could not be staged, in
/// which case the launch message goes out without queue context.
pub trait QueueStager: Send + Sync {
    fn stage_queue(&self, queue: &PlaybackQueue) -> Option<String>;
}

impl QueueStager for HandoffStore {
    fn stage_queue(&self, queue: &PlaybackQueue) -> Option<String> {
        self.put(queue)
    }
}
