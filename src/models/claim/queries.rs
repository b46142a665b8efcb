use chrono::{Datelike, Local};

use crate::store::Store;
use super::decision::{apply_decision, ClaimError, Decision};
use super::types::{Claim, ClaimStatus, NewClaim, MONTHS};

/// Snapshot of the whole collection, in stored order.
pub fn find_all(store: &Store) -> Vec<Claim> {
    store.claims().clone()
}

pub fn find_by_id(store: &Store, id: &str) -> Option<Claim> {
    store.claims().iter().find(|c| c.id == id).cloned()
}

pub fn find_by_ids(store: &Store, ids: &[String]) -> Vec<Claim> {
    store
        .claims()
        .iter()
        .filter(|c| ids.contains(&c.id))
        .cloned()
        .collect()
}

/// Distinct years present in the collection, newest first.
pub fn known_years(store: &Store) -> Vec<String> {
    let mut years: Vec<String> = store.claims().iter().map(|c| c.year.clone()).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Approve or reject one pending claim. Returns the updated record.
pub fn decide(store: &Store, id: &str, decision: Decision) -> Result<Claim, ClaimError> {
    let mut claims = store.claims_mut();
    apply_decision(&mut claims, id, decision).cloned()
}

/// Numeric suffix of `SN<nnn>` serials.
fn serial_number(claim: &Claim) -> u32 {
    claim
        .serial_number
        .trim_start_matches("SN")
        .parse()
        .unwrap_or(0)
}

/// Insert a submitted claim with a fresh id and serial. Status always starts at pending.
pub fn create(store: &Store, new: NewClaim) -> Result<Claim, ClaimError> {
    let mut claims = store.claims_mut();
    let highest = claims.iter().map(serial_number).max().unwrap_or(0);
    let mut seq = highest.checked_add(1).ok_or(ClaimError::SerialsExhausted)?;
    let year = new.date.year();
    let id = loop {
        let candidate = format!("TCL-{year}-{seq:03}");
        if !claims.iter().any(|c| c.id == candidate) {
            break candidate;
        }
        seq = seq.checked_add(1).ok_or(ClaimError::SerialsExhausted)?;
    };

    let claim = Claim {
        id,
        serial_number: format!("SN{seq:03}"),
        study_center: new.study_center,
        lecturer: new.lecturer,
        department: new.department,
        month: MONTHS[new.date.month0() as usize].to_string(),
        year: year.to_string(),
        date: new.date,
        course_code: new.course_code,
        course_title: new.course_title,
        start_time: new.start_time,
        end_time: new.end_time,
        hours: new.hours,
        assigned_status: new.assigned_status,
        remarks: new.remarks,
        status: ClaimStatus::Pending,
        venue: new.venue,
        student_count: new.student_count,
        submitted_at: Some(Local::now().naive_local()),
    };
    claims.push(claim.clone());
    Ok(claim)
}
