//! Claims core tests: role scoping, filtering, aggregation and the
//! approve/reject transition, exercised through the public API.

mod common;

use uew_claims::models::claim::{
    self, decision, Claim, ClaimError, ClaimFilter, ClaimScope, ClaimStatus, Decision, FilterParams,
    StatusCounts, StudyCenter,
};
use uew_claims::models::role::{Actor, Role};
use uew_claims::store::Store;
use common::*;

fn ids(claims: &[&Claim]) -> Vec<String> {
    claims.iter().map(|c| c.id.clone()).collect()
}

fn mixed_statuses() -> Vec<Claim> {
    vec![
        claim("TCL-001", ClaimStatus::Pending, StudyCenter::Accra),
        claim("TCL-002", ClaimStatus::Pending, StudyCenter::Kumasi),
        claim("TCL-003", ClaimStatus::Approved, StudyCenter::Accra),
        claim("TCL-004", ClaimStatus::Rejected, StudyCenter::Mampong),
    ]
}

fn search(q: &str) -> ClaimFilter {
    ClaimFilter::default().with_search(q)
}

#[test]
fn test_coordinator_scope_keeps_own_center() {
    let claims = vec![
        claim("TCL-001", ClaimStatus::Pending, StudyCenter::Accra),
        claim("TCL-002", ClaimStatus::Pending, StudyCenter::Kumasi),
    ];
    let actor = Actor::new(Role::Coordinator, StudyCenter::Accra);
    let scope = ClaimScope::for_actor(&actor).expect("coordinator has a scope");

    assert_eq!(ids(&scope.apply(&claims)), vec!["TCL-001"]);
}

#[test]
fn test_coordinator_scope_equals_center_filter() {
    let claims = mixed_statuses();
    let actor = Actor::new(Role::Coordinator, StudyCenter::Accra);
    let scoped = ClaimScope::for_actor(&actor).unwrap().apply(&claims);

    let params = FilterParams { center: Some("accra".into()), ..FilterParams::default() };
    let by_center = ClaimFilter::from_params(&params, true);
    assert_eq!(ids(&scoped), ids(&by_center.apply(&claims)));
    assert!(scoped.len() <= claims.len());
}

#[test]
fn test_approve_changes_only_target() {
    let mut claims = vec![
        claim("TCL-001", ClaimStatus::Pending, StudyCenter::Accra),
        claim("TCL-002", ClaimStatus::Pending, StudyCenter::Kumasi),
    ];
    let before = claims.clone();

    decision::apply_decision(&mut claims, "TCL-002", Decision::Approve).expect("approve succeeds");

    assert_eq!(claims.len(), 2);
    assert_eq!(claims[0], before[0]);
    assert_eq!(claims[1].status, ClaimStatus::Approved);
    assert_eq!(Claim { status: ClaimStatus::Pending, ..claims[1].clone() }, before[1]);
}

#[test]
fn test_status_filter_leaves_counts_of_original() {
    let claims = mixed_statuses();
    let params = FilterParams { status: Some("approved".into()), ..FilterParams::default() };
    let filtered = ClaimFilter::from_params(&params, false).apply(&claims);

    assert_eq!(ids(&filtered), vec!["TCL-003"]);
    let counts = StatusCounts::tally(&claims);
    assert_eq!((counts.pending, counts.approved, counts.rejected), (2, 1, 1));
    assert_eq!(counts.total(), claims.len());
}

#[test]
fn test_search_is_case_insensitive() {
    let mut claims = mixed_statuses();
    claims[1].course_code = "CS101".into();

    assert_eq!(ids(&search("cs101").apply(&claims)), vec!["TCL-002"]);
}

#[test]
fn test_search_matches_any_listed_field() {
    let claims = mixed_statuses();
    let needle = "tcl-00";
    let found = search(needle).apply(&claims);
    assert_eq!(found.len(), claims.len());

    for c in search("algebra").apply(&claims) {
        let fields = [&c.id, &c.serial_number, &c.lecturer, &c.course_code, &c.course_title];
        assert!(fields.iter().any(|f| f.to_lowercase().contains("algebra")));
    }
    assert!(search("no such course").apply(&claims).is_empty());
}

#[test]
fn test_search_keeps_surrounding_whitespace() {
    let mut claims = mixed_statuses();
    claims[2].lecturer = "Dr. Ama Mensah Boateng".into();
    let needle = "mensah ";

    let found = search(needle).apply(&claims);
    assert_eq!(ids(&found), vec!["TCL-003"]);
    for c in &found {
        let fields = [&c.id, &c.serial_number, &c.lecturer, &c.course_code, &c.course_title];
        assert!(fields.iter().any(|f| f.to_lowercase().contains(needle)));
    }

    let params = FilterParams { q: Some(needle.into()), ..FilterParams::default() };
    assert_eq!(ids(&ClaimFilter::from_params(&params, false).apply(&claims)), vec!["TCL-003"]);
}

#[test]
fn test_empty_search_returns_input_in_order() {
    let claims = mixed_statuses();
    let all: Vec<&Claim> = claims.iter().collect();
    assert_eq!(ids(&search("").apply(&claims)), ids(&all));
}

#[test]
fn test_filter_is_idempotent() {
    let claims = mixed_statuses();
    let params = FilterParams {
        q: Some("tcl".into()),
        status: Some("pending".into()),
        month: Some("October".into()),
        year: Some("2023".into()),
        center: Some("all".into()),
    };
    let filter = ClaimFilter::from_params(&params, true);
    let once = filter.apply(&claims);
    let twice = filter.apply(once.iter().copied());
    assert_eq!(ids(&once), ids(&twice));
    assert_eq!(ids(&once), vec!["TCL-001", "TCL-002"]);
}

#[test]
fn test_malformed_criteria_match_everything() {
    let claims = mixed_statuses();
    let params = FilterParams {
        q: None,
        status: Some("archived".into()),
        month: Some("Smarch".into()),
        year: Some("23".into()),
        center: Some("Tamale".into()),
    };
    let filter = ClaimFilter::from_params(&params, true);
    assert!(filter.is_empty());
    assert_eq!(filter.apply(&claims).len(), claims.len());
}

#[test]
fn test_center_criterion_needs_registry() {
    let claims = mixed_statuses();
    let params = FilterParams { center: Some("kumasi".into()), ..FilterParams::default() };

    assert_eq!(ClaimFilter::from_params(&params, false).apply(&claims).len(), 4);
    assert_eq!(ids(&ClaimFilter::from_params(&params, true).apply(&claims)), vec!["TCL-002"]);
}

#[test]
fn test_second_decision_is_refused() {
    let mut claims = mixed_statuses();
    decision::apply_decision(&mut claims, "TCL-001", Decision::Approve).unwrap();
    let snapshot = claims.clone();

    let err = decision::apply_decision(&mut claims, "TCL-001", Decision::Reject).unwrap_err();
    assert_eq!(
        err,
        ClaimError::AlreadyDecided { id: "TCL-001".into(), status: ClaimStatus::Approved }
    );
    assert_eq!(claims, snapshot);
}

#[test]
fn test_pending_target_and_unknown_id() {
    let mut claims = mixed_statuses();
    assert_eq!(
        decision::set_status(&mut claims, "TCL-001", ClaimStatus::Pending).unwrap_err(),
        ClaimError::InvalidTarget(ClaimStatus::Pending)
    );
    assert_eq!(
        decision::set_status(&mut claims, "TCL-999", ClaimStatus::Approved).unwrap_err(),
        ClaimError::NotFound("TCL-999".into())
    );
    assert_eq!(claims, mixed_statuses());
}

#[test]
fn test_seeded_store_scopes() {
    let store = Store::load(None).expect("seed loads");
    let all = claim::find_all(&store);
    assert_eq!(all.len(), 5);

    let coordinator = Actor::new(Role::Coordinator, StudyCenter::Accra);
    let scoped = ClaimScope::for_actor(&coordinator).unwrap().apply(&all);
    assert_eq!(ids(&scoped), vec!["TCL-2023-001", "TCL-2023-003"]);

    let counts = StatusCounts::tally(&all);
    assert_eq!((counts.pending, counts.approved, counts.rejected), (3, 1, 1));
    assert_eq!(claim::known_years(&store), vec!["2023"]);
}

#[test]
fn test_store_decide_persists() {
    let store = Store::load(None).unwrap();
    let updated = claim::decide(&store, "TCL-2023-002", Decision::Reject).unwrap();
    assert_eq!(updated.status, ClaimStatus::Rejected);
    assert_eq!(
        claim::find_by_id(&store, "TCL-2023-002").map(|c| c.status),
        Some(ClaimStatus::Rejected)
    );
    assert_eq!(claim::find_all(&store).len(), 5);
}
