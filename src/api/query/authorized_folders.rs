use super::{FolderEntry, Queriable};
use serde::Deserialize;

// Folders the logged in employee has been given access to, with their files
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthorizedFolders {
    #[serde(default)]
    pub folders: Vec<FolderEntry>,
}

impl Queriable for AuthorizedFolders {
    const FORMAT_STRING: &'static str = "access/employee-files";
}
