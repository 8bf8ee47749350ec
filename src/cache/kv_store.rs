use super::CacheError;
use crate::config::{Config, DataPath};

use std::collections::HashMap;
use std::future::Future;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

/* Client-local persistent storage. Values are opaque strings, the caller decides on the encoding.
 * Implementations must be cheap to clone and share their backing storage between clones. */
pub trait KeyValueStore: Clone + Send + Sync + 'static {
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, CacheError>> + Send;

    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<(), CacheError>> + Send;
}

// Suffix for .part files, so that concurrent writers never share one
static PART_COUNTER: AtomicU64 = AtomicU64::new(0);

// One file per key under the profile's data directory
#[derive(Clone)]
pub struct JsonFileStore {
    config: Arc<Config>,
}

impl JsonFileStore {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        DataPath::Store(&self.config, key).into()
    }
}

impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        // Written through a .part file so that readers never see a truncated value
        let mut part_path = path.clone();
        let n = PART_COUNTER.fetch_add(1, Ordering::Relaxed);
        part_path.set_extension(format!("json.{}.{n}.part", std::process::id()));
        let mut file = fs::File::create(&part_path).await?;
        file.write_all(value.as_bytes()).await?;
        file.flush().await?;
        fs::rename(part_path, path).await?;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    map: Arc<RwLock<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.map.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
        self.map.write().await.insert(key.to_string(), value);
        Ok(())
    }
}
