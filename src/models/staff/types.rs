use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::claim::StudyCenter;
use crate::models::role::Role;

pub const DEPARTMENTS: [&str; 8] = [
    "Computer Science",
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "English",
    "History",
    "Economics",
];

/// A coordinator or lecturer on record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub study_center: StudyCenter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

impl StaffMember {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Validated request from either create form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStaffMember {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub study_center: StudyCenter,
    pub department: Option<String>,
    pub qualification: Option<String>,
}

/// Head counts shown on dashboards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaffCounts {
    pub coordinators: usize,
    pub lecturers: usize,
    /// Lecturers per center, in `StudyCenter::ALL` order.
    pub lecturers_by_center: Vec<(StudyCenter, usize)>,
}

impl StaffCounts {
    pub fn lecturers_in(&self, center: StudyCenter) -> usize {
        self.lecturers_by_center
            .iter()
            .find(|(c, _)| *c == center)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}
