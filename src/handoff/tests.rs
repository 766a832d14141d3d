//! Unit tests for the handoff store.

#[cfg(test)]
mod tests {
    use serde::ser::Error as _;
    use serde::{Serialize, Serializer};

    use crate::handoff::HandoffStore;
    use crate::metadata::SearchEntry;
    use crate::queue::{PlaybackQueue, QueueItem, StreamKind};

    fn queue_of(n: usize) -> PlaybackQueue {
        let items = (0..n)
            .map(|i| {
                QueueItem::from_search_entry(&SearchEntry {
                    name: format!("item {}", i),
                    url: format!("https://example.org/watch?v={}", i),
                    service_id: 0,
                    duration_secs: 60,
                    thumbnail_url: None,
                    uploader_name: None,
                    uploader_url: None,
                    kind: StreamKind::OnDemand,
                })
            })
            .collect();
        PlaybackQueue::from_items(items, 0)
    }

    struct NotSerializable;

    impl Serialize for NotSerializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("cannot serialize"))
        }
    }

    #[test]
    fn test_put_then_take_returns_deep_copy() {
        let store = HandoffStore::default();
        let mut items = queue_of(3).items().to_vec();
        // Mutable playback state must survive the handoff too.
        items[2].set_auto_queued(true);
        items[1].record_error("resolution failed earlier".to_string());
        let mut queue = PlaybackQueue::from_items(items, 1);
        queue.set_current_recovery(12_000);

        let key = store.put(&queue).expect("put should produce a key");
        let restored: PlaybackQueue = store.take(&key).expect("value should be present");

        // Full field equality: snapshot and mutable state alike.
        assert_eq!(restored, queue);
        assert_eq!(restored.current_index(), queue.current_index());
        assert_eq!(restored.items()[1].recovery_position_ms(), 12_000);
        assert_eq!(
            restored.items()[1].last_error(),
            Some("resolution failed earlier")
        );
        assert!(restored.items()[2].is_auto_queued());
    }

    #[test]
    fn test_unknown_key_is_absent_not_an_error() {
        let store = HandoffStore::default();
        let value: Option<PlaybackQueue> = store.take("no-such-key");
        assert!(value.is_none());
    }

    #[test]
    fn test_keys_are_single_use() {
        let store = HandoffStore::default();
        let key = store.put(&queue_of(1)).unwrap();

        let first: Option<PlaybackQueue> = store.take(&key);
        assert!(first.is_some());
        let second: Option<PlaybackQueue> = store.take(&key);
        assert!(second.is_none());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let store = HandoffStore::new(2);
        let first = store.put(&queue_of(1)).unwrap();
        let second = store.put(&queue_of(2)).unwrap();
        let third = store.put(&queue_of(3)).unwrap();

        assert_eq!(store.len(), 2);
        assert!(store.take::<PlaybackQueue>(&first).is_none());
        assert!(store.take::<PlaybackQueue>(&second).is_some());
        assert!(store.take::<PlaybackQueue>(&third).is_some());
    }

    #[test]
    fn test_serialization_failure_is_soft() {
        let store = HandoffStore::default();
        assert!(store.put(&NotSerializable).is_none());
        assert!(store.is_empty());
    }

    #[test]
    #[should_panic(expected = "handoff type mismatch")]
    fn test_type_mismatch_fails_loudly() {
        let store = HandoffStore::default();
        let key = store.put(&queue_of(1)).unwrap();
        let _: Option<String> = store.take(&key);
    }

    #[test]
    fn test_fresh_keys_per_put() {
        let store = HandoffStore::default();
        let a = store.put(&queue_of(1)).unwrap();
        let b = store.put(&queue_of(1)).unwrap();
        assert_ne!(a, b);
    }
}
