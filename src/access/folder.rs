use super::AccessStatus;
use crate::api::{FileEntry, FolderEntry, SubfolderEntry};

#[derive(Clone, Debug, PartialEq)]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub subfolders: Vec<Subfolder>,
    pub status: AccessStatus,
    // Derived from backend data and the fallback cache, recomputed on every load
    pub requested: bool,
    // A request for this folder has been sent and its response hasn't arrived yet
    pub submitting: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Subfolder {
    pub id: Option<String>,
    pub name: String,
    pub files: Vec<File>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct File {
    pub id: Option<String>,
    pub original_name: String,
    pub mime_type: String,
    pub download_url: String,
}

impl Folder {
    pub fn new(id: String, entry: FolderEntry, status: AccessStatus, requested: bool) -> Self {
        Self {
            id,
            name: entry.name,
            subfolders: entry.subfolders.unwrap_or_default().into_iter().map(Subfolder::from).collect(),
            status,
            requested,
            submitting: false,
        }
    }

    pub fn is_requested(&self) -> bool {
        self.requested || self.submitting
    }

    /* Whether the employee may send a request for this folder right now. Kept in step with
     * ControlState::for_folder(), which decides whether the button is enabled. */
    pub fn may_request(&self) -> bool {
        if self.submitting {
            return false;
        }
        match self.status {
            AccessStatus::None => !self.requested,
            // Rejected requests can be sent again
            AccessStatus::Rejected => true,
            AccessStatus::Pending | AccessStatus::Approved => false,
        }
    }

    pub fn file_count(&self) -> usize {
        self.subfolders.iter().map(|s| s.files.len()).sum()
    }
}

impl From<SubfolderEntry> for Subfolder {
    fn from(entry: SubfolderEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            files: entry.files.unwrap_or_default().into_iter().map(File::from).collect(),
        }
    }
}

impl From<FileEntry> for File {
    fn from(entry: FileEntry) -> Self {
        Self {
            id: entry.id,
            original_name: entry.original_name,
            mime_type: entry.mimetype,
            download_url: entry.secure_url,
        }
    }
}

impl File {
    // "application/pdf" -> "pdf"
    pub fn kind(&self) -> &str {
        match self.mime_type.split_once('/') {
            Some((_, subtype)) if !subtype.is_empty() => subtype,
            _ => self.mime_type.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{File, Folder};
    use crate::access::AccessStatus;
    use crate::test::folder_entry;

    fn folder(status: AccessStatus, requested: bool) -> Folder {
        Folder::new("f1".to_string(), folder_entry("f1", "Onboarding", None), status, requested)
    }

    #[test]
    fn may_request() {
        assert!(folder(AccessStatus::None, false).may_request());
        assert!(!folder(AccessStatus::None, true).may_request());
        assert!(!folder(AccessStatus::Pending, true).may_request());
        assert!(!folder(AccessStatus::Approved, true).may_request());
        assert!(folder(AccessStatus::Rejected, true).may_request());

        let mut submitting = folder(AccessStatus::Rejected, true);
        submitting.submitting = true;
        assert!(!submitting.may_request());
        assert!(submitting.is_requested());
    }

    #[test]
    fn file_kind() {
        let mut file = File {
            id: None,
            original_name: "handbook.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            download_url: String::new(),
        };
        assert_eq!(file.kind(), "pdf");
        file.mime_type = "binary".to_string();
        assert_eq!(file.kind(), "binary");
        file.mime_type = "text/".to_string();
        assert_eq!(file.kind(), "text/");
    }

    #[test]
    fn missing_subfolders_are_empty() {
        let folder = folder(AccessStatus::None, false);
        assert!(folder.subfolders.is_empty());
        assert_eq!(folder.file_count(), 0);
    }
}
