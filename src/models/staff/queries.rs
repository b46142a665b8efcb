use chrono::Local;

use crate::models::claim::StudyCenter;
use crate::models::role::Role;
use crate::store::Store;
use super::types::{NewStaffMember, StaffCounts, StaffMember};

/// Insert a staff member. Emails are unique, compared case-insensitively.
pub fn create(store: &Store, new: NewStaffMember) -> Result<StaffMember, String> {
    let mut staff = store.staff_mut();
    if staff.iter().any(|s| s.email.eq_ignore_ascii_case(&new.email)) {
        return Err(format!("A staff member with email '{}' already exists", new.email));
    }
    let member = StaffMember {
        first_name: new.first_name,
        last_name: new.last_name,
        email: new.email,
        phone: new.phone,
        role: new.role,
        study_center: new.study_center,
        department: new.department,
        qualification: new.qualification,
        created_at: Some(Local::now().naive_local()),
    };
    staff.push(member.clone());
    Ok(member)
}

pub fn find_by_role(store: &Store, role: Role) -> Vec<StaffMember> {
    store.staff().iter().filter(|s| s.role == role).cloned().collect()
}

pub fn counts(store: &Store) -> StaffCounts {
    let staff = store.staff();
    let lecturers: Vec<&StaffMember> = staff.iter().filter(|s| s.role == Role::Lecturer).collect();
    StaffCounts {
        coordinators: staff.iter().filter(|s| s.role == Role::Coordinator).count(),
        lecturers: lecturers.len(),
        lecturers_by_center: StudyCenter::ALL
            .into_iter()
            .map(|center| (center, lecturers.iter().filter(|s| s.study_center == center).count()))
            .collect(),
    }
}
