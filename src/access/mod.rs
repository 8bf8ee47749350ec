mod board;
mod control;
mod folder;
mod status;
mod store;
mod workflow;
mod workflow_error;

pub use board::{Library, RequestBoard};
pub use control::ControlState;
pub use folder::Folder;
pub use status::{AccessStatus, Decision};
pub use store::AccessStore;
pub use workflow::Workflow;
pub use workflow_error::WorkflowError;
