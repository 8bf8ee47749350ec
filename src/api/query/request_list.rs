use super::Queriable;
use crate::access::AccessStatus;
use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RequestList {
    #[serde(default)]
    pub requests: Vec<AccessRequest>,
}

impl Queriable for RequestList {
    const FORMAT_STRING: &'static str = "access/get-requests";
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AccessRequest {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "folderId", default)]
    pub folder: Option<FolderRef>,
    #[serde(default)]
    pub employee: Option<EmployeeRef>,
    pub status: AccessStatus,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

// The backend populates references when it can and sends the bare id otherwise
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FolderRef {
    Id(String),
    Populated {
        #[serde(rename = "_id", default)]
        id: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum EmployeeRef {
    Id(String),
    Populated {
        #[serde(rename = "_id", default)]
        id: Option<String>,
        #[serde(default)]
        username: Option<String>,
    },
}

impl AccessRequest {
    pub fn folder_id(&self) -> Option<&str> {
        match &self.folder {
            Some(FolderRef::Id(id)) => Some(id),
            Some(FolderRef::Populated { id, .. }) => id.as_deref(),
            None => None,
        }
    }

    pub fn folder_name(&self) -> &str {
        match &self.folder {
            Some(FolderRef::Populated { name: Some(name), .. }) => name,
            Some(FolderRef::Id(id)) => id,
            _ => "No folder",
        }
    }

    pub fn employee_id(&self) -> Option<&str> {
        match &self.employee {
            Some(EmployeeRef::Id(id)) => Some(id),
            Some(EmployeeRef::Populated { id, .. }) => id.as_deref(),
            None => None,
        }
    }

    pub fn employee_name(&self) -> &str {
        match &self.employee {
            Some(EmployeeRef::Populated { username: Some(name), .. }) => name,
            Some(EmployeeRef::Id(id)) => id,
            _ => "No instructor",
        }
    }

    pub fn reason(&self) -> &str {
        match self.reason.as_deref() {
            Some(reason) if !reason.trim().is_empty() => reason,
            _ => "No reason provided",
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == AccessStatus::Pending
    }
}
