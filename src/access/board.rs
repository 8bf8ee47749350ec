use super::{AccessStatus, Folder};
use crate::api::{AccessRequest, FolderEntry};

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// All access requests as the admin sees them. Never patched locally, always replaced by a fresh fetch.
#[derive(Clone, Default)]
pub struct RequestBoard {
    requests: Arc<RwLock<Vec<AccessRequest>>>,
    pending_only: Arc<AtomicBool>,
    pub has_changed: Arc<AtomicBool>,
}

impl RequestBoard {
    pub async fn replace(&self, requests: Vec<AccessRequest>) {
        *self.requests.write().await = requests;
        self.has_changed.store(true, Ordering::Relaxed);
    }

    pub async fn all(&self) -> Vec<AccessRequest> {
        self.requests.read().await.clone()
    }

    pub async fn visible(&self) -> Vec<AccessRequest> {
        let pending_only = self.pending_only.load(Ordering::Relaxed);
        self.requests.read().await.iter().filter(|r| !pending_only || r.is_pending()).cloned().collect()
    }

    pub async fn get(&self, request_id: &str) -> Option<AccessRequest> {
        self.requests.read().await.iter().find(|r| r.id == request_id).cloned()
    }

    // (id, name) of everyone who has asked for access, first appearance first
    pub async fn employees(&self) -> Vec<(String, String)> {
        let mut seen = HashSet::new();
        self.requests
            .read()
            .await
            .iter()
            .filter_map(|r| Some((r.employee_id()?.to_string(), r.employee_name().to_string())))
            .filter(|(id, _)| seen.insert(id.clone()))
            .collect()
    }

    pub fn is_pending_only(&self) -> bool {
        self.pending_only.load(Ordering::Relaxed)
    }

    pub fn toggle_pending_only(&self) -> bool {
        let pending_only = !self.pending_only.fetch_xor(true, Ordering::Relaxed);
        self.has_changed.store(true, Ordering::Relaxed);
        pending_only
    }
}

// Folders the employee has been approved for, with their contents
#[derive(Clone, Default)]
pub struct Library {
    folders: Arc<RwLock<Vec<Folder>>>,
    pub has_changed: Arc<AtomicBool>,
}

impl Library {
    pub async fn replace(&self, entries: Vec<FolderEntry>) {
        let folders = entries
            .into_iter()
            .filter_map(|entry| {
                let id = entry.id()?.to_string();
                Some(Folder::new(id, entry, AccessStatus::Approved, true))
            })
            .collect();
        *self.folders.write().await = folders;
        self.has_changed.store(true, Ordering::Relaxed);
    }

    pub async fn snapshot(&self) -> Vec<Folder> {
        self.folders.read().await.clone()
    }
}
