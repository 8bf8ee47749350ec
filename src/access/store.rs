use super::{AccessStatus, Folder};
use crate::api::{FolderEntry, RequestPresence};
use crate::cache::FolderRequestMap;

use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct StoreState {
    folders: IndexMap<String, Folder>, // Key = folder id, in backend order
    in_flight: HashSet<String>,
    generation: u64, // Bumped by every settled submission
    loaded_at: u64,  // Generation of the load that produced `folders`
    settled: HashMap<String, Settled>,
}

// What this session learned from a submission. `status` is None for a duplicate, whose status is unknown.
#[derive(Clone, Copy, Debug)]
struct Settled {
    generation: u64,
    status: Option<AccessStatus>,
}

impl Settled {
    fn apply(&self, folder: &mut Folder) {
        if let Some(status) = self.status {
            folder.status = status;
        }
        folder.requested = true;
    }
}

// Taken before a load starts fetching, handed to replace() with the result
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LoadTicket(u64);

// The employee's folder list with derived access status. Only ever replaced wholesale or patched per folder.
#[derive(Clone, Default)]
pub struct AccessStore {
    state: Arc<RwLock<StoreState>>,
    pub has_changed: Arc<AtomicBool>,
}

/* First half of a submission. Created by AccessStore::reserve() before the network call, and must be handed back
 * through commit(), release() or settle_duplicate() once the response is in. */
#[must_use]
#[derive(Debug)]
pub struct Reservation {
    folder_id: String,
}

#[derive(Debug, PartialEq)]
pub enum Refusal {
    UnknownFolder,
    AlreadyRequested,
}

/* Backend data always wins: the first access request's status if there is one, otherwise whatever this client
 * remembers having sent, otherwise nothing. Entries without an id can't be requested and are dropped. */
pub fn reconcile(entries: Vec<FolderEntry>, cached: &FolderRequestMap) -> Vec<Folder> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let id = entry.id()?.to_string();
            let cached_status = cached.get(&id).map(|c| c.status);
            let status = match entry.access_requests() {
                RequestPresence::Entries([first, ..]) => first.status,
                RequestPresence::Entries([]) | RequestPresence::Empty | RequestPresence::Absent => {
                    cached_status.unwrap_or_default()
                }
            };
            let requested = status != AccessStatus::None || cached_status.is_some();
            Some(Folder::new(id, entry, status, requested))
        })
        .collect()
}

impl AccessStore {
    pub async fn load_started(&self) -> LoadTicket {
        LoadTicket(self.state.read().await.generation)
    }

    /* Submissions settled after the ticket was taken are newer than anything the load saw, so they are laid over the
     * loaded folders. Older ones only fill in for folders the load knows no request for. A load that finishes after
     * a newer one is dropped. */
    pub async fn replace(&self, ticket: LoadTicket, folders: Vec<Folder>) {
        let mut lock = self.state.write().await;
        if ticket.0 < lock.loaded_at {
            return;
        }
        let state = &mut *lock;
        state.folders = folders
            .into_iter()
            .map(|mut folder| {
                folder.submitting = state.in_flight.contains(&folder.id);
                if let Some(settled) = state.settled.get(&folder.id) {
                    if settled.generation > ticket.0 || !folder.requested {
                        settled.apply(&mut folder);
                    }
                }
                (folder.id.clone(), folder)
            })
            .collect();
        state.loaded_at = ticket.0;
        self.has_changed.store(true, Ordering::Relaxed);
    }

    pub async fn snapshot(&self) -> Vec<Folder> {
        self.state.read().await.folders.values().cloned().collect()
    }

    pub async fn get(&self, folder_id: &str) -> Option<Folder> {
        self.state.read().await.folders.get(folder_id).cloned()
    }

    pub async fn get_index(&self, index: usize) -> Option<Folder> {
        self.state.read().await.folders.get_index(index).map(|(_id, folder)| folder.clone())
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.folders.len()
    }

    // Check and mark under one write lock, so a second submission for the same folder is refused right away
    pub async fn reserve(&self, folder_id: &str) -> Result<Reservation, Refusal> {
        let mut lock = self.state.write().await;
        let state = &mut *lock;
        let folder = state.folders.get_mut(folder_id).ok_or(Refusal::UnknownFolder)?;
        if !folder.may_request() || state.in_flight.contains(folder_id) {
            return Err(Refusal::AlreadyRequested);
        }
        folder.submitting = true;
        state.in_flight.insert(folder_id.to_string());
        self.has_changed.store(true, Ordering::Relaxed);
        Ok(Reservation {
            folder_id: folder_id.to_string(),
        })
    }

    // The backend accepted the request
    pub async fn commit(&self, reservation: Reservation, status: AccessStatus) {
        self.finish(reservation, Some(Some(status))).await
    }

    // The request failed, put everything back the way the last load left it
    pub async fn release(&self, reservation: Reservation) {
        self.finish(reservation, None).await
    }

    // The backend already has a request for this folder. We don't know its status, only that it exists.
    pub async fn settle_duplicate(&self, reservation: Reservation) {
        self.finish(reservation, Some(None)).await
    }

    // `outcome` is None when nothing was settled
    async fn finish(&self, reservation: Reservation, outcome: Option<Option<AccessStatus>>) {
        let mut lock = self.state.write().await;
        let state = &mut *lock;
        state.in_flight.remove(&reservation.folder_id);
        let settled = outcome.map(|status| {
            state.generation += 1;
            let settled = Settled {
                generation: state.generation,
                status,
            };
            state.settled.insert(reservation.folder_id.clone(), settled);
            settled
        });
        // The folder may have disappeared if the list was reloaded while the request was in flight
        if let Some(folder) = state.folders.get_mut(&reservation.folder_id) {
            folder.submitting = false;
            if let Some(settled) = settled {
                settled.apply(folder);
            }
        }
        self.has_changed.store(true, Ordering::Relaxed);
    }
}
