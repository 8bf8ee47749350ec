use super::error::RequestError;
use super::query::{AuthorizedFolders, FolderList, MessageReply, RequestAccessReply, RequestList};
use crate::access::AccessStatus;
use std::future::Future;

/* Every backend call the access workflow makes. `Client` talks to the real server, tests substitute a scripted
 * implementation. */
pub trait Backend: Clone + Send + Sync + 'static {
    fn list_folders(&self) -> impl Future<Output = Result<FolderList, RequestError>> + Send;

    fn request_access(
        &self,
        folder_id: &str,
        reason: &str,
    ) -> impl Future<Output = Result<RequestAccessReply, RequestError>> + Send;

    fn list_requests(&self) -> impl Future<Output = Result<RequestList, RequestError>> + Send;

    fn update_request(
        &self,
        request_id: &str,
        status: AccessStatus,
    ) -> impl Future<Output = Result<MessageReply, RequestError>> + Send;

    fn grant_access(
        &self,
        folder_id: &str,
        employee_id: &str,
        reason: &str,
    ) -> impl Future<Output = Result<MessageReply, RequestError>> + Send;

    fn authorized_folders(&self) -> impl Future<Output = Result<AuthorizedFolders, RequestError>> + Send;
}
