use super::{AccessStatus, Folder};

// The one control a folder row shows, as a function of the folder alone
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ControlState {
    RequestAccess { enabled: bool },
    PendingApproval,
    AccessApproved,
}

impl ControlState {
    pub fn for_folder(folder: &Folder) -> Self {
        match folder.status {
            AccessStatus::None => ControlState::RequestAccess {
                enabled: !folder.is_requested(),
            },
            // Employees may ask again after a rejection, so this looks the same as a folder never asked for
            AccessStatus::Rejected => ControlState::RequestAccess {
                enabled: !folder.submitting,
            },
            AccessStatus::Pending => ControlState::PendingApproval,
            AccessStatus::Approved => ControlState::AccessApproved,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ControlState::RequestAccess { .. } => "Request Access",
            ControlState::PendingApproval => "Pending Approval",
            ControlState::AccessApproved => "Access Approved",
        }
    }

    pub fn is_enabled(&self) -> bool {
        match self {
            ControlState::RequestAccess { enabled } => *enabled,
            ControlState::PendingApproval | ControlState::AccessApproved => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ControlState;
    use crate::access::{AccessStatus, Folder};
    use crate::test::folder_entry;
    use crate::util::format::subfolder_badge;

    fn folder(status: AccessStatus, requested: bool) -> Folder {
        Folder::new("f1".to_string(), folder_entry("f1", "Onboarding", None), status, requested)
    }

    #[test]
    fn one_control_per_status() {
        assert_eq!(
            ControlState::for_folder(&folder(AccessStatus::None, false)),
            ControlState::RequestAccess { enabled: true }
        );
        assert_eq!(ControlState::for_folder(&folder(AccessStatus::Pending, true)), ControlState::PendingApproval);
        assert_eq!(ControlState::for_folder(&folder(AccessStatus::Approved, true)), ControlState::AccessApproved);
        assert_eq!(ControlState::for_folder(&folder(AccessStatus::Approved, true)).label(), "Access Approved");
    }

    #[test]
    fn rejected_looks_like_none() {
        let state = ControlState::for_folder(&folder(AccessStatus::Rejected, true));
        assert_eq!(state, ControlState::RequestAccess { enabled: true });
        assert_eq!(state.label(), "Request Access");
    }

    #[test]
    fn requested_none_is_disabled() {
        let state = ControlState::for_folder(&folder(AccessStatus::None, true));
        assert!(!state.is_enabled());

        let mut submitting = folder(AccessStatus::None, false);
        submitting.submitting = true;
        assert!(!ControlState::for_folder(&submitting).is_enabled());
    }

    #[test]
    fn control_agrees_with_may_request() {
        for status in [AccessStatus::None, AccessStatus::Pending, AccessStatus::Approved, AccessStatus::Rejected] {
            for requested in [false, true] {
                for submitting in [false, true] {
                    let mut f = folder(status, requested);
                    f.submitting = submitting;
                    assert_eq!(ControlState::for_folder(&f).is_enabled(), f.may_request(), "{f:?}");
                }
            }
        }
    }

    #[test]
    fn empty_folder_renders() {
        let folder = folder(AccessStatus::None, false);
        assert!(folder.subfolders.is_empty());
        assert_eq!(subfolder_badge(folder.subfolders.len()), None);
        assert!(ControlState::for_folder(&folder).is_enabled());
    }
}
