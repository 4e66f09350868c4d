use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::types::DeviceInfo;

/// Unbounded UA → result memo. Entries live until [`Cache::purge`].
#[derive(Debug, Default)]
pub struct Cache {
    entries: RwLock<HashMap<String, Arc<DeviceInfo>>>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, ua: &str) -> Option<Arc<DeviceInfo>> {
        self.entries.read().get(ua).cloned()
    }

    /// Insert `info` unless another thread got there first; returns the
    /// entry that is now cached.
    pub fn add(&self, ua: &str, info: Arc<DeviceInfo>) -> Arc<DeviceInfo> {
        self.entries
            .write()
            .entry(ua.to_owned())
            .or_insert(info)
            .clone()
    }

    pub fn purge(&self) {
        *self.entries.write() = HashMap::new();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
