use reqwest::Client;

use super::{
    api,
    cache::SharedPageCache,
    document::{
        apply_field_update,
        decode_document,
        encode_document,
    },
};
use crate::core::{
    ContentPatch,
    EditableField,
    PageContentRecord,
    PageError,
};

/// Read/write access to the remote page-content store. Kept as a trait seam
/// so the cache and invalidation contract can be exercised without a server.
pub trait PageTransport {
    async fn fetch(&self, page_key: &str) -> Result<PageContentRecord, PageError>;
    async fn update(&self, page_key: &str, patch: &ContentPatch) -> Result<(), PageError>;
}

#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    server_url: String,
}

impl HttpTransport {
    pub fn new(server_url: String) -> Self {
        Self { client: Client::new(), server_url }
    }
}

impl PageTransport for HttpTransport {
    async fn fetch(&self, page_key: &str) -> Result<PageContentRecord, PageError> {
        api::fetch_page_content(&self.client, &self.server_url, page_key).await
    }

    async fn update(&self, page_key: &str, patch: &ContentPatch) -> Result<(), PageError> {
        api::update_page_content(&self.client, &self.server_url, page_key, patch).await
    }
}

/// The content update protocol: cache-first reads, and saves that decode the
/// current payload, merge exactly one field, and write the full document
/// back. The cache entry is invalidated only after the transport confirms
/// the write, so a failed save never poisons the next read.
///
/// At most one in-flight save per page is assumed; overlapping writers are
/// last-write-wins on the transport.
#[derive(Clone)]
pub struct ContentStore<T: PageTransport> {
    transport: T,
    cache: SharedPageCache,
}

impl<T: PageTransport> ContentStore<T> {
    pub fn new(transport: T, cache: SharedPageCache) -> Self {
        Self { transport, cache }
    }

    pub async fn load(&self, page_key: &str) -> Result<PageContentRecord, PageError> {
        if let Some(record) = self.cache.lock().unwrap().get(page_key) {
            return Ok(record);
        }

        let record = self.transport.fetch(page_key).await?;
        self.cache.lock().unwrap().insert(record.clone());

        Ok(record)
    }

    pub async fn save_field(
        &self,
        page_key: &str,
        field: EditableField,
        new_text: &str,
    ) -> Result<(), PageError> {
        let record = self.load(page_key).await?;

        let mut document = decode_document(&record.content)?;
        apply_field_update(&mut document, field, new_text);

        let patch = ContentPatch { content: encode_document(&document)? };
        self.transport.update(page_key, &patch).await?;

        self.cache.lock().unwrap().invalidate(page_key);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        Mutex,
    };

    use super::*;
    use crate::content::cache::PageCache;

    const PAYLOAD: &str = r#"{"intro":{"content":"old","foo":1},"placeholder":"p"}"#;

    fn record(content: &str) -> PageContentRecord {
        PageContentRecord {
            slug: "retrospective".to_string(),
            title: "Retrospective".to_string(),
            content: content.to_string(),
            updated_at: None,
        }
    }

    /// Records every transport call; fails fetches or updates on demand.
    #[derive(Clone)]
    struct MockTransport {
        payload: String,
        fail_fetch: bool,
        fail_update: bool,
        fetches: Arc<Mutex<u32>>,
        updates: Arc<Mutex<Vec<String>>>,
    }

    impl MockTransport {
        fn new(payload: &str) -> Self {
            Self {
                payload: payload.to_string(),
                fail_fetch: false,
                fail_update: false,
                fetches: Arc::new(Mutex::new(0)),
                updates: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn fetch_count(&self) -> u32 {
            *self.fetches.lock().unwrap()
        }
    }

    impl PageTransport for MockTransport {
        async fn fetch(&self, page_key: &str) -> Result<PageContentRecord, PageError> {
            *self.fetches.lock().unwrap() += 1;
            if self.fail_fetch {
                return Err(PageError::PageUnavailable(page_key.to_string()));
            }
            Ok(record(&self.payload))
        }

        async fn update(&self, _page_key: &str, patch: &ContentPatch) -> Result<(), PageError> {
            if self.fail_update {
                return Err(PageError::Custom("connection reset".to_string()));
            }
            self.updates.lock().unwrap().push(patch.content.clone());
            Ok(())
        }
    }

    fn store(transport: MockTransport) -> ContentStore<MockTransport> {
        ContentStore::new(transport, PageCache::shared())
    }

    #[tokio::test]
    async fn load_is_cache_first() {
        let transport = MockTransport::new(PAYLOAD);
        let store = store(transport.clone());

        store.load("retrospective").await.unwrap();
        store.load("retrospective").await.unwrap();

        assert_eq!(transport.fetch_count(), 1);
    }

    #[tokio::test]
    async fn load_failure_leaves_cache_empty() {
        let mut transport = MockTransport::new(PAYLOAD);
        transport.fail_fetch = true;
        let store = store(transport.clone());

        assert!(store.load("retrospective").await.is_err());
        assert!(store.cache.lock().unwrap().get("retrospective").is_none());
    }

    #[tokio::test]
    async fn successful_save_invalidates_once_and_refetches() {
        let transport = MockTransport::new(PAYLOAD);
        let store = store(transport.clone());

        store.load("retrospective").await.unwrap();
        store.save_field("retrospective", EditableField::Intro, "X").await.unwrap();

        assert!(store.cache.lock().unwrap().get("retrospective").is_none());

        // The next read goes back to the transport.
        store.load("retrospective").await.unwrap();
        assert_eq!(transport.fetch_count(), 2);
    }

    #[tokio::test]
    async fn save_transmits_the_merged_document() {
        let transport = MockTransport::new(PAYLOAD);
        let store = store(transport.clone());

        store.save_field("retrospective", EditableField::Intro, "X").await.unwrap();

        let updates = transport.updates.lock().unwrap();
        assert_eq!(updates.len(), 1);

        let sent: serde_json::Value = serde_json::from_str(&updates[0]).unwrap();
        assert_eq!(sent["intro"]["content"], "X");
        assert_eq!(sent["intro"]["foo"], 1);
        assert_eq!(sent["placeholder"], "p");
    }

    #[tokio::test]
    async fn failed_save_leaves_the_cache_entry_live() {
        let mut transport = MockTransport::new(PAYLOAD);
        transport.fail_update = true;
        let store = store(transport.clone());

        store.load("retrospective").await.unwrap();
        assert!(store.save_field("retrospective", EditableField::Intro, "X").await.is_err());

        assert!(store.cache.lock().unwrap().get("retrospective").is_some());
        assert_eq!(transport.fetch_count(), 1);
    }

    #[tokio::test]
    async fn save_aborts_on_undecodable_payload() {
        let transport = MockTransport::new("not json");
        let store = store(transport.clone());

        let err = store.save_field("retrospective", EditableField::Intro, "X").await.unwrap_err();
        assert!(matches!(err, PageError::Json(_)));
        assert!(transport.updates.lock().unwrap().is_empty());
    }
}
