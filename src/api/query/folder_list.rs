use super::Queriable;
use crate::access::AccessStatus;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct FolderList {
    #[serde(default)]
    pub folders: Vec<FolderEntry>,
}

impl Queriable for FolderList {
    const FORMAT_STRING: &'static str = "file/getAllFolders";
}

/* Folders from getAllFolders carry "_id", the ones from employee-files have been seen with "id" instead. Both are kept
 * as separate fields because documents can also contain both. */
#[derive(Clone, Debug, Deserialize)]
pub struct FolderEntry {
    #[serde(rename = "_id", default)]
    pub mongo_id: Option<String>,
    #[serde(rename = "id", default)]
    pub plain_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subfolders: Option<Vec<SubfolderEntry>>,
    #[serde(rename = "accessRequests", default)]
    pub access_requests: Option<Vec<RequestSummary>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SubfolderEntry {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub files: Option<Vec<FileEntry>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FileEntry {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "originalName", default)]
    pub original_name: String,
    #[serde(alias = "mimeType", default)]
    pub mimetype: String,
    #[serde(rename = "secure_url", alias = "downloadUrl", default)]
    pub secure_url: String,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct RequestSummary {
    pub status: AccessStatus,
}

// What the backend told us about the requests of one folder
#[derive(Debug, PartialEq)]
pub enum RequestPresence<'a> {
    Absent,
    Empty,
    Entries(&'a [RequestSummary]),
}

impl FolderEntry {
    pub fn id(&self) -> Option<&str> {
        self.mongo_id.as_deref().or(self.plain_id.as_deref())
    }

    pub fn access_requests(&self) -> RequestPresence<'_> {
        match &self.access_requests {
            None => RequestPresence::Absent,
            Some(requests) if requests.is_empty() => RequestPresence::Empty,
            Some(requests) => RequestPresence::Entries(requests),
        }
    }
}
