use std::{
    collections::HashMap,
    sync::{
        Arc,
        Mutex,
    },
};

use crate::core::PageContentRecord;

pub type SharedPageCache = Arc<Mutex<PageCache>>;

/// Client-side cache of page records, keyed by page slug. A cached record is
/// read-only until invalidated; invalidation marks it stale by dropping it so
/// the next load goes back to the store.
#[derive(Default)]
pub struct PageCache {
    entries: HashMap<String, PageContentRecord>,
}

impl PageCache {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    pub fn shared() -> SharedPageCache {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn get(&self, page_key: &str) -> Option<PageContentRecord> {
        self.entries.get(page_key).cloned()
    }

    pub fn insert(&mut self, record: PageContentRecord) {
        self.entries.insert(record.slug.clone(), record);
    }

    pub fn invalidate(&mut self, page_key: &str) {
        self.entries.remove(page_key);
    }
}
