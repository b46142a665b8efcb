use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::validate;
use super::types::{AssignedStatus, NewClaim, StudyCenter};

/// Form input from the claim submission page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClaimForm {
    pub lecturer: String,
    pub department: String,
    pub study_center: String,
    pub date: String,
    pub course_code: String,
    pub course_title: String,
    pub start_time: String,
    pub end_time: String,
    pub assigned_status: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub student_count: String,
    #[serde(default)]
    pub remarks: String,
    pub csrf_token: String,
}

fn parse_time(value: &str, field_name: &str, errors: &mut Vec<String>) -> Option<NaiveTime> {
    match NaiveTime::parse_from_str(value.trim(), "%H:%M") {
        Ok(t) => Some(t),
        Err(_) => {
            errors.push(format!("{field_name} must be a time in HH:MM format"));
            None
        }
    }
}

impl ClaimForm {
    /// Validate every field and build the typed request. All problems are reported together.
    pub fn validate(&self) -> Result<NewClaim, Vec<String>> {
        let mut errors = vec![];
        errors.extend(validate::validate_required(&self.lecturer, "Lecturer name", 100));
        errors.extend(validate::validate_required(&self.department, "Department", 100));
        errors.extend(validate::validate_required(&self.course_code, "Course code", 20));
        errors.extend(validate::validate_required(&self.course_title, "Course title", 150));
        errors.extend(validate::validate_optional(&self.venue, "Venue", 100));
        errors.extend(validate::validate_optional(&self.remarks, "Remarks", 500));

        let study_center = self.study_center.parse::<StudyCenter>().map_err(|e| errors.push(e)).ok();
        let assigned_status = self
            .assigned_status
            .parse::<AssignedStatus>()
            .map_err(|e| errors.push(e))
            .ok();

        let date = match NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d") {
            Ok(d) => Some(d),
            Err(_) => {
                errors.push("Date must be in YYYY-MM-DD format".to_string());
                None
            }
        };

        let start = parse_time(&self.start_time, "Start time", &mut errors);
        let end = parse_time(&self.end_time, "End time", &mut errors);
        let hours = match (start, end) {
            (Some(s), Some(e)) if e > s => Some((e - s).num_minutes() as f64 / 60.0),
            (Some(_), Some(_)) => {
                errors.push("End time must be after start time".to_string());
                None
            }
            _ => None,
        };

        let student_count = match validate::non_empty(&self.student_count) {
            None => None,
            Some(raw) => match raw.parse::<u32>() {
                Ok(n) => Some(n),
                Err(_) => {
                    errors.push("Student count must be a whole number".to_string());
                    None
                }
            },
        };

        match (study_center, assigned_status, date, start, end, hours) {
            (Some(study_center), Some(assigned_status), Some(date), Some(start), Some(end), Some(hours))
                if errors.is_empty() =>
            {
                Ok(NewClaim {
                    study_center,
                    lecturer: self.lecturer.trim().to_string(),
                    department: self.department.trim().to_string(),
                    date,
                    course_code: self.course_code.trim().to_uppercase(),
                    course_title: self.course_title.trim().to_string(),
                    start_time: start.format("%H:%M").to_string(),
                    end_time: end.format("%H:%M").to_string(),
                    hours,
                    assigned_status,
                    remarks: self.remarks.trim().to_string(),
                    venue: validate::non_empty(&self.venue),
                    student_count,
                })
            }
            _ => Err(errors),
        }
    }
}
