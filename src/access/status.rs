use serde::{Deserialize, Serialize};
use std::fmt;

/* Client-observed lifecycle of an access request. `None` is never sent by the backend, it's what a folder without any
 * request data resolves to. */
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessStatus {
    #[default]
    None,
    Pending,
    Approved,
    Rejected,
}

impl AccessStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessStatus::None => "none",
            AccessStatus::Pending => "pending",
            AccessStatus::Approved => "approved",
            AccessStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// The two outcomes an admin can give a pending request
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn status(&self) -> AccessStatus {
        match self {
            Decision::Approve => AccessStatus::Approved,
            Decision::Reject => AccessStatus::Rejected,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Decision::Approve => "approve",
            Decision::Reject => "reject",
        }
    }

    // As the admin is told about it afterwards
    pub fn outcome(&self) -> &'static str {
        match self {
            Decision::Approve => "accepted",
            Decision::Reject => "rejected",
        }
    }
}
