//! Unit tests for the metadata provider contract and the resolver.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::metadata::{
        HttpMetadataProvider, ResolveError, SearchEntry, StreamInfo, StreamMetadataProvider,
        StreamResolver,
    };
    use crate::queue::{QueueItem, StreamKind};

    /// Provider returning a canned response, or failing for unknown URLs.
    struct FakeProvider {
        known_url: String,
    }

    #[async_trait]
    impl StreamMetadataProvider for FakeProvider {
        async fn fetch(&self, service_id: i32, url: &str) -> Result<StreamInfo, ResolveError> {
            if url != self.known_url {
                return Err(ResolveError::Service(format!(
                    "no stream for service {} at {}",
                    service_id, url
                )));
            }
            Ok(StreamInfo {
                name: "Resolved".to_string(),
                url: url.to_string(),
                service_id,
                duration_secs: 120,
                thumbnail_url: None,
                uploader_name: Some("Uploader".to_string()),
                uploader_url: None,
                kind: StreamKind::OnDemand,
                start_position_secs: 0,
                stream_url: "https://cdn.example.org/media".to_string(),
                description: None,
            })
        }
    }

    fn item_for(url: &str) -> QueueItem {
        QueueItem::from_search_entry(&SearchEntry {
            name: "entry".to_string(),
            url: url.to_string(),
            service_id: 0,
            duration_secs: -1,
            thumbnail_url: None,
            uploader_name: None,
            uploader_url: None,
            kind: StreamKind::Other,
        })
    }

    #[tokio::test]
    async fn test_resolve_failure_records_error_on_item() {
        let resolver = StreamResolver::new(Arc::new(FakeProvider {
            known_url: "https://example.org/good".to_string(),
        }));
        let mut item = item_for("https://example.org/bad");

        let result = resolver.resolve(&mut item).await;

        assert!(result.is_err());
        assert!(item.last_error().is_some());
        // The snapshot stays intact.
        assert_eq!(item.title(), "entry");
        assert_eq!(item.url(), "https://example.org/bad");
    }

    #[tokio::test]
    async fn test_resolve_success_does_not_clear_previous_error() {
        let resolver = StreamResolver::new(Arc::new(FakeProvider {
            known_url: "https://example.org/good".to_string(),
        }));
        let mut item = item_for("https://example.org/good");

        // Simulate a provider that failed once and then recovered.
        let failing = StreamResolver::new(Arc::new(FakeProvider {
            known_url: "other".to_string(),
        }));
        let _ = failing.resolve(&mut item).await;
        assert!(item.last_error().is_some());

        let info = resolver.resolve(&mut item).await.expect("should resolve");
        assert_eq!(info.name, "Resolved");
        // Last known failure stays readable.
        assert!(item.last_error().is_some());
    }

    #[tokio::test]
    async fn test_each_resolve_issues_a_fresh_fetch() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        struct CountingProvider(AtomicUsize);

        #[async_trait]
        impl StreamMetadataProvider for CountingProvider {
            async fn fetch(&self, _service_id: i32, url: &str) -> Result<StreamInfo, ResolveError> {
                self.0.fetch_add(1, Ordering::SeqCst);
                Err(ResolveError::Service(format!("always fails: {}", url)))
            }
        }

        let provider = Arc::new(CountingProvider(AtomicUsize::new(0)));
        let resolver = StreamResolver::new(provider.clone());
        let mut item = item_for("https://example.org/x");

        let _ = resolver.resolve(&mut item).await;
        let _ = resolver.resolve(&mut item).await;

        assert_eq!(provider.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_http_provider_normalizes_endpoint() {
        let provider = HttpMetadataProvider::new("https://resolver.example.org/");
        assert_eq!(provider.endpoint(), "https://resolver.example.org");
    }
}
