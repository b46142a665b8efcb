use crate::models::role::{Capabilities, Capability};

pub struct NavSidebarItem {
    pub label: String,
    pub url: String,
    pub is_active: bool,
}

/// Static menu: (label, url, capability required). `None` means every role.
const MENU: &[(&str, &str, Option<Capability>)] = &[
    ("Dashboard", "/dashboard", None),
    ("Submit Claim", "/claims/new", Some(Capability::SubmitClaims)),
    ("Approvals", "/approvals", Some(Capability::ReviewApprovals)),
    ("Create Coordinator", "/create/coordinator", Some(Capability::CreateCoordinator)),
    ("Create Lecturer", "/create/lecturer", Some(Capability::CreateLecturer)),
];

/// Sidebar items visible for the capability set, with the one matching `current_path` marked active.
pub fn find_navigation(capabilities: &Capabilities, current_path: &str) -> Vec<NavSidebarItem> {
    MENU.iter()
        .filter(|(_, _, required)| required.is_none_or(|c| capabilities.has(c)))
        .map(|(label, url, _)| NavSidebarItem {
            label: label.to_string(),
            url: url.to_string(),
            is_active: current_path == *url || current_path.starts_with(&format!("{url}/")),
        })
        .collect()
}
