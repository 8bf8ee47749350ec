mod authorized_table;
mod bottom_bar;
pub mod common;
mod confirm_dialog;
mod folder_table;
mod hotkey_bar;
mod log_list;
mod popup_dialog;
mod request_table;
mod tabbar;
pub mod traits;

pub use authorized_table::AuthorizedTable;
pub use bottom_bar::BottomBar;
pub use confirm_dialog::ConfirmDialog;
pub use folder_table::FolderTable;
pub use hotkey_bar::HotkeyBar;
pub use log_list::LogList;
pub use popup_dialog::{DialogPurpose, PopupDialog};
pub use request_table::RequestTable;
pub use tabbar::TabBar;
