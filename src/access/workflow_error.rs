use crate::api::RequestError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum WorkflowError {
    EmptyReason,
    MissingField(&'static str),
    AlreadyRequested { folder_id: String },
    UnknownFolder { folder_id: String },
    // The backend answered 2xx but didn't create a request. `msg` is shown to the user as is.
    Rejected { msg: String },
    Request { source: RequestError },
}

impl WorkflowError {
    // Refused locally, without talking to the backend
    pub fn is_validation(&self) -> bool {
        match self {
            WorkflowError::EmptyReason
            | WorkflowError::MissingField(_)
            | WorkflowError::AlreadyRequested { .. }
            | WorkflowError::UnknownFolder { .. } => true,
            WorkflowError::Rejected { .. } | WorkflowError::Request { .. } => false,
        }
    }
}

impl Error for WorkflowError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WorkflowError::Request { ref source } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WorkflowError::EmptyReason => f.write_str("Please enter a valid reason"),
            WorkflowError::MissingField(field) => write!(f, "Please fill in all fields. Missing {field}."),
            WorkflowError::AlreadyRequested { folder_id } => {
                write!(f, "You have already requested access to folder {folder_id}.")
            }
            WorkflowError::UnknownFolder { folder_id } => write!(f, "No folder with id {folder_id}."),
            WorkflowError::Rejected { msg } => f.write_str(msg),
            WorkflowError::Request { source } => source.fmt(f),
        }
    }
}

impl From<RequestError> for WorkflowError {
    fn from(error: RequestError) -> Self {
        WorkflowError::Request { source: error }
    }
}
