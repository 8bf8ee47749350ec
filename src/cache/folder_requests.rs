use super::{CacheError, KeyValueStore};
use crate::access::AccessStatus;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

pub const FOLDER_REQUESTS_KEY: &str = "folderRequests";

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CachedRequest {
    pub status: AccessStatus,
}

pub type FolderRequestMap = IndexMap<String, CachedRequest>; // Key = folder id

/* Last known request status per folder, as sent by this client. Only consulted when the backend has no request data
 * for a folder, so stale entries are harmless and nothing is ever deleted.
 * Clones share `write_lock`, which is held from the read to the write in record(). */
#[derive(Clone)]
pub struct FolderRequests<S: KeyValueStore> {
    store: S,
    write_lock: Arc<Mutex<()>>,
}

impl<S: KeyValueStore> FolderRequests<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn load(&self) -> Result<FolderRequestMap, CacheError> {
        match self.store.get(FOLDER_REQUESTS_KEY).await? {
            Some(contents) if !contents.trim().is_empty() => Ok(serde_json::from_str(&contents)?),
            _ => Ok(FolderRequestMap::new()),
        }
    }

    // Read, overwrite the entry for this folder, write everything back. Entries of other folders are left alone.
    pub async fn record(&self, folder_id: &str, status: AccessStatus) -> Result<(), CacheError> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.load().await?;
        map.insert(folder_id.to_string(), CachedRequest { status });
        self.store.set(FOLDER_REQUESTS_KEY, serde_json::to_string(&map)?).await
    }
}
