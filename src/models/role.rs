use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::claim::StudyCenter;

/// Who is using the portal. Selected by the user; carries no security meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Lecturer,
    Coordinator,
    Registry,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Lecturer, Role::Coordinator, Role::Registry];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Lecturer => "lecturer",
            Role::Coordinator => "coordinator",
            Role::Registry => "registry",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Lecturer => "Lecturer",
            Role::Coordinator => "Coordinator",
            Role::Registry => "Registry",
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::for_role(*self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lecturer" => Ok(Role::Lecturer),
            "coordinator" => Ok(Role::Coordinator),
            "registry" => Ok(Role::Registry),
            other => Err(format!("Unknown role '{other}'")),
        }
    }
}

/// Actions and views a role may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    SubmitClaims,
    ReviewApprovals,
    FilterStudyCenter,
    CreateCoordinator,
    CreateLecturer,
    ViewStaffTotals,
    ViewCenterStaff,
}

impl Capability {
    pub fn code(&self) -> &'static str {
        match self {
            Capability::SubmitClaims => "claims.submit",
            Capability::ReviewApprovals => "approvals.review",
            Capability::FilterStudyCenter => "approvals.filter_center",
            Capability::CreateCoordinator => "staff.create_coordinator",
            Capability::CreateLecturer => "staff.create_lecturer",
            Capability::ViewStaffTotals => "dashboard.staff_totals",
            Capability::ViewCenterStaff => "dashboard.center_staff",
        }
    }
}

/// Capability table row for one role. Plain fields so templates can read them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub submit_claims: bool,
    pub review_approvals: bool,
    pub filter_study_center: bool,
    pub create_coordinator: bool,
    pub create_lecturer: bool,
    pub view_staff_totals: bool,
    pub view_center_staff: bool,
}

impl Capabilities {
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Lecturer => Capabilities {
                submit_claims: true,
                review_approvals: false,
                filter_study_center: false,
                create_coordinator: false,
                create_lecturer: false,
                view_staff_totals: false,
                view_center_staff: false,
            },
            Role::Coordinator => Capabilities {
                submit_claims: false,
                review_approvals: true,
                filter_study_center: false,
                create_coordinator: false,
                create_lecturer: true,
                view_staff_totals: false,
                view_center_staff: true,
            },
            Role::Registry => Capabilities {
                submit_claims: false,
                review_approvals: true,
                filter_study_center: true,
                create_coordinator: true,
                create_lecturer: true,
                view_staff_totals: true,
                view_center_staff: false,
            },
        }
    }

    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::SubmitClaims => self.submit_claims,
            Capability::ReviewApprovals => self.review_approvals,
            Capability::FilterStudyCenter => self.filter_study_center,
            Capability::CreateCoordinator => self.create_coordinator,
            Capability::CreateLecturer => self.create_lecturer,
            Capability::ViewStaffTotals => self.view_staff_totals,
            Capability::ViewCenterStaff => self.view_center_staff,
        }
    }
}

/// The acting user for one request: chosen role plus the center it is tied to.
/// Only coordinators are bound to `study_center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub role: Role,
    pub study_center: StudyCenter,
    pub capabilities: Capabilities,
}

impl Actor {
    pub fn new(role: Role, study_center: StudyCenter) -> Self {
        Actor { role, study_center, capabilities: role.capabilities() }
    }

    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities.has(capability)
    }
}
