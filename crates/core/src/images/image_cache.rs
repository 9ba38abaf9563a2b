//! Image cache trait and the in-process implementation.

use dashmap::DashMap;

/// Trait for an opaque-blob image cache.
///
/// Keys are identifier strings (player id, logo path); values are raw image
/// bytes. A miss is `None`, never an error.
pub trait ImageCacheTrait: Send + Sync {
    /// Returns the cached bytes for `key`, if present.
    fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Stores `bytes` under `key`, replacing any previous value.
    fn put(&self, key: &str, bytes: Vec<u8>);

    /// Removes the entry for `key`. Removing an absent key is a no-op.
    fn delete(&self, key: &str);
}

/// In-process image cache backed by a concurrent map.
#[derive(Default)]
pub struct MemoryImageCache {
    entries: DashMap<String, Vec<u8>>,
}

impl MemoryImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached blobs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ImageCacheTrait for MemoryImageCache {
    fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn put(&self, key: &str, bytes: Vec<u8>) {
        self.entries.insert(key.to_string(), bytes);
    }

    fn delete(&self, key: &str) {
        self.entries.remove(key);
    }
}
