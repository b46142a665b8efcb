use crate::models::role::{Actor, Role};

use super::types::{Claim, StudyCenter};

/// Role-derived restriction applied before any user-supplied filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimScope {
    /// Registry: every claim.
    AllCenters,
    /// Coordinator: claims of one study center.
    Center(StudyCenter),
}

impl ClaimScope {
    /// Lecturers have no scope over other people's claims.
    pub fn for_actor(actor: &Actor) -> Option<Self> {
        match actor.role {
            Role::Registry => Some(ClaimScope::AllCenters),
            Role::Coordinator => Some(ClaimScope::Center(actor.study_center)),
            Role::Lecturer => None,
        }
    }

    pub fn contains(&self, claim: &Claim) -> bool {
        match self {
            ClaimScope::AllCenters => true,
            ClaimScope::Center(center) => claim.study_center == *center,
        }
    }

    pub fn apply<'a>(&self, claims: &'a [Claim]) -> Vec<&'a Claim> {
        claims.iter().filter(|c| self.contains(c)).collect()
    }

    pub fn description(&self) -> String {
        match self {
            ClaimScope::AllCenters => "All teaching claims requiring approval".to_string(),
            ClaimScope::Center(center) => {
                format!("Claims from {} awaiting review", center.name())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::claim::test_support::claim;
    use crate::models::claim::types::ClaimStatus;

    fn two_claims() -> Vec<Claim> {
        vec![
            claim("TCL-001", ClaimStatus::Pending, StudyCenter::Accra),
            claim("TCL-002", ClaimStatus::Pending, StudyCenter::Kumasi),
        ]
    }

    #[test]
    fn coordinator_sees_only_own_center() {
        let claims = two_claims();
        let actor = Actor::new(Role::Coordinator, StudyCenter::Accra);
        let scope = ClaimScope::for_actor(&actor).unwrap();
        let ids: Vec<&str> = scope.apply(&claims).iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["TCL-001"]);
    }

    #[test]
    fn registry_sees_everything() {
        let claims = two_claims();
        let actor = Actor::new(Role::Registry, StudyCenter::Accra);
        let scope = ClaimScope::for_actor(&actor).unwrap();
        assert_eq!(scope.apply(&claims).len(), 2);
    }

    #[test]
    fn lecturer_has_no_scope() {
        let actor = Actor::new(Role::Lecturer, StudyCenter::Accra);
        assert_eq!(ClaimScope::for_actor(&actor), None);
    }
}
