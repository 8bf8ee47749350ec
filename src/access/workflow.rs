use super::store::{reconcile, Refusal};
use super::{AccessStatus, AccessStore, Decision, Library, RequestBoard, WorkflowError};
use crate::api::{Backend, RequestAccessReply};
use crate::cache::{FolderRequestMap, FolderRequests, KeyValueStore};
use crate::Logger;

const INVALID_IDS: &str = "Invalid employeeId or folderId format";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmitOutcome {
    Submitted(AccessStatus),
    // The backend already had a request for the folder
    AlreadyRequested,
}

/* Drives every access related action. Results end up in the shared collections, which the UI watches through their
 * has_changed flags, and every outcome is also reported to the logger. */
#[derive(Clone)]
pub struct Workflow<B: Backend, S: KeyValueStore> {
    backend: B,
    cache: FolderRequests<S>,
    logger: Logger,
    pub folders: AccessStore,
    pub requests: RequestBoard,
    pub library: Library,
}

impl<B: Backend, S: KeyValueStore> Workflow<B, S> {
    pub fn new(backend: B, store: S, logger: Logger) -> Self {
        Self {
            backend,
            cache: FolderRequests::new(store),
            logger,
            folders: AccessStore::default(),
            requests: RequestBoard::default(),
            library: Library::default(),
        }
    }

    pub async fn load_folders(&self) -> Result<(), WorkflowError> {
        let ticket = self.folders.load_started().await;
        let list = match self.backend.list_folders().await {
            Ok(list) => list,
            Err(e) => {
                self.logger.error(format!("Failed to load folders. {e}"));
                return Err(e.into());
            }
        };
        let cached = self.cache.load().await.unwrap_or_else(|e| {
            self.logger.warn(format!("Unable to read cached request statuses: {e}"));
            FolderRequestMap::new()
        });
        self.folders.replace(ticket, reconcile(list.folders, &cached)).await;
        Ok(())
    }

    pub async fn submit_request(&self, folder_id: &str, reason: &str) -> Result<SubmitOutcome, WorkflowError> {
        let reason = reason.trim();
        if reason.is_empty() {
            self.logger.warn("Please enter a valid reason");
            return Err(WorkflowError::EmptyReason);
        }

        let reservation = match self.folders.reserve(folder_id).await {
            Ok(reservation) => reservation,
            Err(Refusal::AlreadyRequested) => {
                self.logger.info("You have already requested access to this folder.");
                return Err(WorkflowError::AlreadyRequested {
                    folder_id: folder_id.to_string(),
                });
            }
            Err(Refusal::UnknownFolder) => {
                self.logger.error(format!("No folder with id {folder_id}."));
                return Err(WorkflowError::UnknownFolder {
                    folder_id: folder_id.to_string(),
                });
            }
        };

        match self.backend.request_access(folder_id, reason).await {
            Ok(RequestAccessReply {
                request: Some(request),
                ..
            }) => {
                // Cached first, so that a load reading the cache after the commit sees it
                if let Err(e) = self.cache.record(folder_id, request.status).await {
                    self.logger.warn(format!("Unable to remember request status: {e}"));
                }
                self.folders.commit(reservation, request.status).await;
                self.logger.info("Access request sent successfully.");
                Ok(SubmitOutcome::Submitted(request.status))
            }
            Ok(RequestAccessReply { msg, request: None }) => {
                self.folders.release(reservation).await;
                let msg = msg.filter(|m| !m.is_empty()).unwrap_or_else(|| "Failed to submit request.".to_string());
                self.logger.error(&msg);
                Err(WorkflowError::Rejected { msg })
            }
            Err(e) if e.is_duplicate() => {
                self.folders.settle_duplicate(reservation).await;
                self.logger.info("You have already requested access to this folder.");
                Ok(SubmitOutcome::AlreadyRequested)
            }
            Err(e) => {
                self.folders.release(reservation).await;
                self.logger.error(format!("Failed to submit request. {e}"));
                Err(e.into())
            }
        }
    }

    pub async fn load_requests(&self) -> Result<(), WorkflowError> {
        match self.backend.list_requests().await {
            Ok(list) => {
                self.requests.replace(list.requests).await;
                Ok(())
            }
            Err(e) => {
                self.logger.error(format!("Failed to load requests. {e}"));
                Err(e.into())
            }
        }
    }

    // The board is never patched locally, it's always fetched again after a change
    pub async fn set_request_status(&self, request_id: &str, decision: Decision) -> Result<(), WorkflowError> {
        if let Err(e) = self.backend.update_request(request_id, decision.status()).await {
            self.logger.error(format!("Failed to {} request. {e}", decision.verb()));
            return Err(e.into());
        }
        self.logger.info(format!("Request has been {}.", decision.outcome()));
        // Failure is logged by load_requests() and doesn't undo the update
        let _ = self.load_requests().await;
        Ok(())
    }

    pub async fn grant_access(&self, folder_id: &str, employee_id: &str, reason: &str) -> Result<(), WorkflowError> {
        let fields = [
            ("folder id", folder_id.trim()),
            ("instructor id", employee_id.trim()),
            ("reason", reason.trim()),
        ];
        if let Some(&(name, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            self.logger.warn("Please fill in all fields.");
            return Err(WorkflowError::MissingField(name));
        }
        let [(_, folder_id), (_, employee_id), (_, reason)] = fields;

        if let Err(e) = self.backend.grant_access(folder_id, employee_id, reason).await {
            match e.backend_message() {
                Some(INVALID_IDS) => self.logger.error("Please ensure the instructor and folder IDs are valid."),
                Some(msg) if !msg.is_empty() => self.logger.error(msg),
                _ => self.logger.error(format!("Failed to grant access. {e}")),
            }
            return Err(e.into());
        }
        self.logger.info("Access has been granted.");
        let _ = self.load_requests().await;
        Ok(())
    }

    pub async fn load_authorized(&self) -> Result<(), WorkflowError> {
        match self.backend.authorized_folders().await {
            Ok(authorized) => {
                self.library.replace(authorized.folders).await;
                Ok(())
            }
            Err(e) => {
                self.logger.error(format!("Failed to load authorized files. {e}"));
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SubmitOutcome, Workflow};
    use crate::access::{AccessStatus, ControlState, Decision, WorkflowError};
    use crate::cache::{FolderRequests, JsonFileStore, KeyValueStore, MemoryStore, FOLDER_REQUESTS_KEY};
    use crate::config::{ConfigBuilder, DataPath};
    use crate::test::{access_request, folder_entry, MockBackend, Reply};
    use crate::Logger;
    use reqwest::StatusCode;
    use std::path::PathBuf;
    use std::sync::Arc;

    fn workflow(backend: &MockBackend, store: &MemoryStore) -> (Workflow<MockBackend, MemoryStore>, Logger) {
        let logger = Logger::default();
        (Workflow::new(backend.clone(), store.clone(), logger.clone()), logger)
    }

    // A file backed store for the given profile, starting out empty
    async fn file_store(profile: &str) -> JsonFileStore {
        let config = ConfigBuilder::default().profile(profile).build().unwrap();
        let path: PathBuf = DataPath::Store(&config, FOLDER_REQUESTS_KEY).into();
        let _ = tokio::fs::remove_file(path).await;
        JsonFileStore::new(Arc::new(config))
    }

    #[tokio::test]
    async fn backend_status_wins() {
        let backend = MockBackend::default().with_folders(vec![folder_entry(
            "f1",
            "Onboarding",
            Some(vec![AccessStatus::Approved]),
        )]);
        let store = MemoryStore::default();
        FolderRequests::new(store.clone()).record("f1", AccessStatus::Pending).await.unwrap();

        let (workflow, _) = workflow(&backend, &store);
        workflow.load_folders().await.unwrap();
        let folder = workflow.folders.get("f1").await.unwrap();
        assert_eq!(folder.status, AccessStatus::Approved);
        assert_eq!(ControlState::for_folder(&folder), ControlState::AccessApproved);
    }

    #[tokio::test]
    async fn cached_status_fills_in() {
        let backend = MockBackend::default().with_folders(vec![
            folder_entry("f1", "Onboarding", Some(vec![])),
            folder_entry("f2", "Safety", Some(vec![])),
        ]);
        let store = MemoryStore::default();
        FolderRequests::new(store.clone()).record("f1", AccessStatus::Pending).await.unwrap();

        let (workflow, _) = workflow(&backend, &store);
        workflow.load_folders().await.unwrap();
        let cached = workflow.folders.get("f1").await.unwrap();
        assert_eq!(cached.status, AccessStatus::Pending);
        assert_eq!(ControlState::for_folder(&cached), ControlState::PendingApproval);

        let unknown = workflow.folders.get("f2").await.unwrap();
        assert_eq!(unknown.status, AccessStatus::None);
        assert_eq!(ControlState::for_folder(&unknown), ControlState::RequestAccess { enabled: true });
    }

    #[tokio::test]
    async fn unreadable_cache_is_ignored() {
        let backend = MockBackend::default().with_folders(vec![folder_entry("f1", "Onboarding", None)]);
        let store = MemoryStore::default();
        store.set(FOLDER_REQUESTS_KEY, "[broken".to_string()).await.unwrap();

        let (workflow, logger) = workflow(&backend, &store);
        workflow.load_folders().await.unwrap();
        assert_eq!(workflow.folders.get("f1").await.unwrap().status, AccessStatus::None);
        assert!(logger.contains("Warn: Unable to read cached request statuses"));
    }

    #[tokio::test]
    async fn failed_load_keeps_folders() {
        let backend = MockBackend::default().with_folders(vec![folder_entry("f1", "Onboarding", None)]);
        let (workflow, logger) = workflow(&backend, &MemoryStore::default());
        workflow.load_folders().await.unwrap();

        backend.fail_lists(true);
        assert!(workflow.load_folders().await.is_err());
        assert_eq!(workflow.folders.len().await, 1);
        assert!(logger.contains("Failed to load folders."));
    }

    #[tokio::test]
    async fn double_submit_makes_one_call() {
        let backend = MockBackend::default().with_folders(vec![folder_entry("f1", "Onboarding", None)]);
        let (workflow, logger) = workflow(&backend, &MemoryStore::default());
        workflow.load_folders().await.unwrap();

        let (first, second) =
            tokio::join!(workflow.submit_request("f1", "training"), workflow.submit_request("f1", "training"));

        assert_eq!(first.unwrap(), SubmitOutcome::Submitted(AccessStatus::Pending));
        assert!(matches!(second, Err(WorkflowError::AlreadyRequested { .. })));
        assert_eq!(backend.calls("request_access"), 1);
        assert!(logger.contains("You have already requested access to this folder."));
    }

    #[tokio::test]
    async fn submitted_status_survives_reload() {
        let backend = MockBackend::default().with_folders(vec![folder_entry("f1", "Onboarding", Some(vec![]))]);
        let store = MemoryStore::default();
        let (workflow, logger) = workflow(&backend, &store);
        workflow.load_folders().await.unwrap();

        workflow.submit_request("f1", "  need it for training ").await.unwrap();
        assert_eq!(backend.last_reason().as_deref(), Some("need it for training"));
        assert!(logger.contains("Info: Access request sent successfully."));

        workflow.load_folders().await.unwrap();
        assert_eq!(workflow.folders.get("f1").await.unwrap().status, AccessStatus::Pending);

        // A fresh session on the same storage remembers it too
        let (restarted, _) = self::workflow(&backend, &store);
        restarted.load_folders().await.unwrap();
        let folder = restarted.folders.get("f1").await.unwrap();
        assert_eq!(folder.status, AccessStatus::Pending);
        assert!(!folder.may_request());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_submits_are_all_remembered() {
        let ids: Vec<String> = (0..20).map(|i| format!("f{i}")).collect();
        let backend = MockBackend::default()
            .with_folders(ids.iter().map(|id| folder_entry(id, "Folder", Some(vec![]))).collect());
        let store = file_store("concurrent_submits").await;
        let workflow = Workflow::new(backend.clone(), store.clone(), Logger::default());
        workflow.load_folders().await.unwrap();

        let mut handles = vec![];
        for id in ids.clone() {
            let workflow = workflow.clone();
            handles.push(tokio::spawn(async move { workflow.submit_request(&id, "training").await }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), SubmitOutcome::Submitted(AccessStatus::Pending));
        }

        assert_eq!(FolderRequests::new(store.clone()).load().await.unwrap().len(), 20);
        let restarted = Workflow::new(backend, store, Logger::default());
        restarted.load_folders().await.unwrap();
        for folder in restarted.folders.snapshot().await {
            assert_eq!(folder.status, AccessStatus::Pending, "{}", folder.id);
            assert!(!folder.may_request());
        }
    }

    #[tokio::test]
    async fn reload_during_submit_keeps_it() {
        let backend = MockBackend::default().with_folders(vec![folder_entry("f1", "Onboarding", Some(vec![]))]);
        let workflow = Workflow::new(backend.clone(), file_store("reload_during_submit").await, Logger::default());
        workflow.load_folders().await.unwrap();

        let (loaded, submitted) = tokio::join!(workflow.load_folders(), workflow.submit_request("f1", "need"));
        loaded.unwrap();
        assert_eq!(submitted.unwrap(), SubmitOutcome::Submitted(AccessStatus::Pending));

        let folder = workflow.folders.get("f1").await.unwrap();
        assert_eq!(folder.status, AccessStatus::Pending);
        assert!(folder.requested);
        assert!(!folder.may_request());
        assert!(matches!(
            workflow.submit_request("f1", "need").await,
            Err(WorkflowError::AlreadyRequested { .. })
        ));
        assert_eq!(backend.calls("request_access"), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn reloads_racing_submits() {
        let backend = MockBackend::default().with_folders(vec![
            folder_entry("f1", "Onboarding", Some(vec![])),
            folder_entry("f2", "Safety", None),
        ]);
        let workflow = Workflow::new(backend.clone(), file_store("reloads_racing").await, Logger::default());
        workflow.load_folders().await.unwrap();

        let mut handles = vec![];
        for i in 0..10 {
            let workflow = workflow.clone();
            handles.push(tokio::spawn(async move {
                match i {
                    3 => workflow.submit_request("f1", "training").await.map(|_| ()),
                    7 => workflow.submit_request("f2", "training").await.map(|_| ()),
                    _ => workflow.load_folders().await,
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }
        workflow.load_folders().await.unwrap();

        for folder in workflow.folders.snapshot().await {
            assert_eq!(folder.status, AccessStatus::Pending, "{}", folder.id);
            assert!(!folder.may_request());
        }
        assert_eq!(backend.calls("request_access"), 2);
    }

    #[tokio::test]
    async fn empty_reason_is_refused_locally() {
        let backend = MockBackend::default().with_folders(vec![folder_entry("f1", "Onboarding", None)]);
        let (workflow, logger) = workflow(&backend, &MemoryStore::default());
        workflow.load_folders().await.unwrap();

        for reason in ["", "   "] {
            let err = workflow.submit_request("f1", reason).await.unwrap_err();
            assert!(matches!(err, WorkflowError::EmptyReason));
            assert!(err.is_validation());
        }
        assert_eq!(backend.calls("request_access"), 0);
        assert!(logger.contains("Please enter a valid reason"));
        assert!(workflow.folders.get("f1").await.unwrap().may_request());
    }

    #[tokio::test]
    async fn unknown_folder() {
        let (workflow, _) = workflow(&MockBackend::default(), &MemoryStore::default());
        let err = workflow.submit_request("nope", "training").await.unwrap_err();
        assert!(matches!(err, WorkflowError::UnknownFolder { .. }));
    }

    #[tokio::test]
    async fn duplicate_keeps_folder_requested() {
        let backend = MockBackend::default().with_folders(vec![folder_entry("f1", "Onboarding", None)]);
        backend.reply_with(Reply::Duplicate);
        let store = MemoryStore::default();
        let (workflow, logger) = workflow(&backend, &store);
        workflow.load_folders().await.unwrap();

        assert_eq!(workflow.submit_request("f1", "training").await.unwrap(), SubmitOutcome::AlreadyRequested);
        let folder = workflow.folders.get("f1").await.unwrap();
        assert!(folder.requested);
        assert_eq!(folder.status, AccessStatus::None);
        assert!(!ControlState::for_folder(&folder).is_enabled());
        assert!(logger.contains("Info: You have already requested access to this folder."));
        assert_eq!(store.get(FOLDER_REQUESTS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn failed_submit_is_undone() {
        let backend = MockBackend::default().with_folders(vec![folder_entry("f1", "Onboarding", None)]);
        backend.reply_with(Reply::Fail(StatusCode::INTERNAL_SERVER_ERROR, "Server error"));
        let store = MemoryStore::default();
        let (workflow, logger) = workflow(&backend, &store);
        workflow.load_folders().await.unwrap();

        let err = workflow.submit_request("f1", "training").await.unwrap_err();
        assert!(!err.is_validation());
        let folder = workflow.folders.get("f1").await.unwrap();
        assert!(!folder.is_requested());
        assert!(folder.may_request());
        assert!(logger.contains("Error: Failed to submit request."));
        assert_eq!(store.get(FOLDER_REQUESTS_KEY).await.unwrap(), None);

        backend.reply_with(Reply::Transport);
        assert!(workflow.submit_request("f1", "training").await.is_err());
        assert!(workflow.folders.get("f1").await.unwrap().may_request());
    }

    #[tokio::test]
    async fn reply_without_request_shows_message() {
        let backend = MockBackend::default().with_folders(vec![folder_entry("f1", "Onboarding", None)]);
        backend.reply_with(Reply::NoRequest("Folder not found"));
        let (workflow, logger) = workflow(&backend, &MemoryStore::default());
        workflow.load_folders().await.unwrap();

        let err = workflow.submit_request("f1", "training").await.unwrap_err();
        assert_eq!(err.to_string(), "Folder not found");
        assert!(logger.contains("Error: Folder not found"));
        assert!(workflow.folders.get("f1").await.unwrap().may_request());
    }

    #[tokio::test]
    async fn rejected_folder_can_be_requested_again() {
        let backend = MockBackend::default().with_folders(vec![folder_entry(
            "f1",
            "Onboarding",
            Some(vec![AccessStatus::Rejected]),
        )]);
        let store = MemoryStore::default();
        let (workflow, _) = workflow(&backend, &store);
        workflow.load_folders().await.unwrap();
        assert!(ControlState::for_folder(&workflow.folders.get("f1").await.unwrap()).is_enabled());

        workflow.submit_request("f1", "second try").await.unwrap();
        assert_eq!(workflow.folders.get("f1").await.unwrap().status, AccessStatus::Pending);
        let cached = FolderRequests::new(store).load().await.unwrap();
        assert_eq!(cached["f1"].status, AccessStatus::Pending);
    }

    #[tokio::test]
    async fn approve_refreshes_board() {
        let backend = MockBackend::default().with_requests(vec![
            access_request("r1", "f1", AccessStatus::Pending),
            access_request("r2", "f2", AccessStatus::Pending),
            access_request("r3", "f3", AccessStatus::Rejected),
        ]);
        let (workflow, logger) = workflow(&backend, &MemoryStore::default());
        workflow.load_requests().await.unwrap();
        let before = workflow.requests.all().await;

        workflow.set_request_status("r1", Decision::Approve).await.unwrap();
        assert_eq!(backend.calls("list_requests"), 2);
        assert!(logger.contains("Info: Request has been accepted."));

        let after = workflow.requests.all().await;
        assert_eq!(after[0].status, AccessStatus::Approved);
        assert_eq!(after[1..], before[1..]);
    }

    #[tokio::test]
    async fn failed_update_skips_refresh() {
        let backend = MockBackend::default().with_requests(vec![access_request("r1", "f1", AccessStatus::Pending)]);
        backend.fail_updates(true);
        let (workflow, logger) = workflow(&backend, &MemoryStore::default());
        workflow.load_requests().await.unwrap();

        assert!(workflow.set_request_status("r1", Decision::Reject).await.is_err());
        assert_eq!(backend.calls("list_requests"), 1);
        assert!(logger.contains("Failed to reject request."));
        assert!(workflow.requests.get("r1").await.unwrap().is_pending());
    }

    #[tokio::test]
    async fn failed_refresh_is_not_an_error() {
        let backend = MockBackend::default().with_requests(vec![access_request("r1", "f1", AccessStatus::Pending)]);
        let (workflow, logger) = workflow(&backend, &MemoryStore::default());
        workflow.load_requests().await.unwrap();

        backend.fail_lists(true);
        assert!(workflow.set_request_status("r1", Decision::Reject).await.is_ok());
        assert!(logger.contains("Failed to load requests."));
        assert!(workflow.requests.get("r1").await.unwrap().is_pending());
    }

    #[tokio::test]
    async fn grant_access_validation() {
        let backend = MockBackend::default();
        let (workflow, logger) = workflow(&backend, &MemoryStore::default());

        let err = workflow.grant_access("f1", " ", "new hire").await.unwrap_err();
        assert!(matches!(err, WorkflowError::MissingField("instructor id")));
        assert_eq!(backend.calls("grant_access"), 0);
        assert!(logger.contains("Please fill in all fields."));

        backend.grant_fails_with(StatusCode::BAD_REQUEST, "Invalid employeeId or folderId format");
        assert!(workflow.grant_access("f1", "e1", "new hire").await.is_err());
        assert!(logger.contains("Please ensure the instructor and folder IDs are valid."));
    }

    #[tokio::test]
    async fn grant_access_refreshes_board() {
        let backend = MockBackend::default();
        let (workflow, logger) = workflow(&backend, &MemoryStore::default());

        workflow.grant_access(" f1 ", "e1", "new hire").await.unwrap();
        assert_eq!(backend.grants(), vec![("f1".to_string(), "e1".to_string(), "new hire".to_string())]);
        assert_eq!(backend.calls("list_requests"), 1);
        assert!(logger.contains("Access has been granted."));
    }

    #[tokio::test]
    async fn authorized_folders() {
        let backend = MockBackend::default().with_authorized(vec![folder_entry("f1", "Onboarding", None)]);
        let (workflow, logger) = workflow(&backend, &MemoryStore::default());
        workflow.load_authorized().await.unwrap();
        assert_eq!(workflow.library.snapshot().await[0].name, "Onboarding");

        backend.fail_lists(true);
        assert!(workflow.load_authorized().await.is_err());
        assert_eq!(workflow.library.snapshot().await.len(), 1);
        assert!(logger.contains("Failed to load authorized files."));
    }

    #[tokio::test]
    async fn folder_without_subfolders() {
        let backend = MockBackend::default().with_folders(vec![folder_entry("f1", "Empty", None)]);
        let (workflow, _) = workflow(&backend, &MemoryStore::default());
        workflow.load_folders().await.unwrap();
        let folder = workflow.folders.get_index(0).await.unwrap();
        assert_eq!(folder.subfolders.len(), 0);
        assert_eq!(ControlState::for_folder(&folder).label(), "Request Access");
    }
}
