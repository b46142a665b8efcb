use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

pub fn is_known_month(value: &str) -> bool {
    MONTHS.contains(&value)
}

/// Approval state of a claim. `Pending` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 3] = [ClaimStatus::Pending, ClaimStatus::Approved, ClaimStatus::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        }
    }

    pub fn is_pending(&self) -> bool {
        *self == ClaimStatus::Pending
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(ClaimStatus::Pending),
            "approved" => Ok(ClaimStatus::Approved),
            "rejected" => Ok(ClaimStatus::Rejected),
            other => Err(format!("Unknown claim status '{other}'")),
        }
    }
}

/// Teaching-assignment state, independent of approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignedStatus {
    Assigned,
    Unassigned,
    Completed,
}

impl AssignedStatus {
    pub const ALL: [AssignedStatus; 3] = [
        AssignedStatus::Assigned,
        AssignedStatus::Unassigned,
        AssignedStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignedStatus::Assigned => "assigned",
            AssignedStatus::Unassigned => "unassigned",
            AssignedStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssignedStatus::Assigned => "Assigned",
            AssignedStatus::Unassigned => "Unassigned",
            AssignedStatus::Completed => "Completed",
        }
    }
}

impl FromStr for AssignedStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "assigned" => Ok(AssignedStatus::Assigned),
            "unassigned" => Ok(AssignedStatus::Unassigned),
            "completed" => Ok(AssignedStatus::Completed),
            other => Err(format!("Unknown assigned status '{other}'")),
        }
    }
}

/// The four campus locations claims are scoped to.
/// Serialized by display name; forms may also submit the short slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudyCenter {
    #[serde(rename = "Accra Main Campus")]
    Accra,
    #[serde(rename = "Kumasi Campus")]
    Kumasi,
    #[serde(rename = "Mampong Campus")]
    Mampong,
    #[serde(rename = "Winneba Campus")]
    Winneba,
}

impl StudyCenter {
    pub const ALL: [StudyCenter; 4] = [
        StudyCenter::Accra,
        StudyCenter::Kumasi,
        StudyCenter::Mampong,
        StudyCenter::Winneba,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StudyCenter::Accra => "Accra Main Campus",
            StudyCenter::Kumasi => "Kumasi Campus",
            StudyCenter::Mampong => "Mampong Campus",
            StudyCenter::Winneba => "Winneba Campus",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            StudyCenter::Accra => "accra",
            StudyCenter::Kumasi => "kumasi",
            StudyCenter::Mampong => "mampong",
            StudyCenter::Winneba => "winneba",
        }
    }
}

impl fmt::Display for StudyCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StudyCenter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        StudyCenter::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(needle) || c.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("Unknown study center '{needle}'"))
    }
}

/// One teaching claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: String,
    pub serial_number: String,
    pub study_center: StudyCenter,
    pub lecturer: String,
    pub department: String,
    pub month: String,
    pub year: String,
    pub date: NaiveDate,
    pub course_code: String,
    pub course_title: String,
    pub start_time: String,
    pub end_time: String,
    pub hours: f64,
    pub assigned_status: AssignedStatus,
    pub remarks: String,
    pub status: ClaimStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<NaiveDateTime>,
}

impl Claim {
    /// `15 Oct 2023`
    pub fn date_label(&self) -> String {
        self.date.format("%d %b %Y").to_string()
    }

    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }

    pub fn hours_label(&self) -> String {
        format_hours(self.hours)
    }

    pub fn submitted_label(&self) -> String {
        self.submitted_at
            .map(|at| at.format("%d %b %Y, %H:%M").to_string())
            .unwrap_or_else(|| "Not recorded".to_string())
    }
}

/// `2`, `1.5`, never `2.0`.
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{}", hours as i64)
    } else {
        format!("{hours:.1}")
    }
}

/// Claim fields supplied by the submission form; id, serial and status are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClaim {
    pub study_center: StudyCenter,
    pub lecturer: String,
    pub department: String,
    pub date: NaiveDate,
    pub course_code: String,
    pub course_title: String,
    pub start_time: String,
    pub end_time: String,
    pub hours: f64,
    pub assigned_status: AssignedStatus,
    pub remarks: String,
    pub venue: Option<String>,
    pub student_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Approved".parse::<ClaimStatus>(), Ok(ClaimStatus::Approved));
        assert!("all".parse::<ClaimStatus>().is_err());
    }

    #[test]
    fn study_center_accepts_slug_and_name() {
        assert_eq!("kumasi".parse::<StudyCenter>(), Ok(StudyCenter::Kumasi));
        assert_eq!("Accra Main Campus".parse::<StudyCenter>(), Ok(StudyCenter::Accra));
        assert!("Tamale Campus".parse::<StudyCenter>().is_err());
    }

    #[test]
    fn study_center_serializes_by_name() {
        let json = serde_json::to_string(&StudyCenter::Winneba).unwrap();
        assert_eq!(json, "\"Winneba Campus\"");
    }

    #[test]
    fn claim_deserializes_from_camel_case() {
        let json = r#"{
            "id": "TCL-2023-001", "serialNumber": "SN001", "studyCenter": "Accra Main Campus",
            "lecturer": "Dr. Kwame Mensah", "department": "Computer Science",
            "month": "October", "year": "2023", "date": "2023-10-15",
            "courseCode": "CS101", "courseTitle": "Introduction to Programming",
            "startTime": "08:00", "endTime": "10:00", "hours": 2,
            "assignedStatus": "assigned", "remarks": "Regular teaching hours", "status": "pending"
        }"#;
        let claim: Claim = serde_json::from_str(json).unwrap();
        assert_eq!(claim.study_center, StudyCenter::Accra);
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(claim.venue, None);
        assert_eq!(claim.date_label(), "15 Oct 2023");
    }

    #[test]
    fn hours_label_drops_trailing_zero() {
        assert_eq!(format_hours(2.0), "2");
        assert_eq!(format_hours(1.5), "1.5");
    }
}
