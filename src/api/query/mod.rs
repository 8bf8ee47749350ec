pub mod authorized_folders;
pub mod folder_list;
pub mod queriable;
pub mod request_list;
pub mod submission;

pub use self::authorized_folders::*;
pub use self::folder_list::*;
pub use self::queriable::*;
pub use self::request_list::*;
pub use self::submission::*;
