use serde::Deserialize;

use crate::models::claim::StudyCenter;
use crate::models::role::{Actor, Role};
use crate::validate;
use super::types::{NewStaffMember, DEPARTMENTS};

/// Form data from the create-coordinator page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoordinatorForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub study_center: String,
    pub csrf_token: String,
}

/// Form data from the create-lecturer page. Coordinators do not submit a center.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LecturerForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub qualification: String,
    #[serde(default)]
    pub study_center: Option<String>,
    pub csrf_token: String,
}

fn validate_person(first: &str, last: &str, email: &str, phone: &str) -> Vec<String> {
    let mut errors = vec![];
    errors.extend(validate::validate_required(first, "First name", 50));
    errors.extend(validate::validate_required(last, "Last name", 50));
    errors.extend(validate::validate_email(email));
    errors.extend(validate::validate_phone(phone));
    errors
}

impl CoordinatorForm {
    pub fn validate(&self) -> Result<NewStaffMember, Vec<String>> {
        let mut errors = validate_person(&self.first_name, &self.last_name, &self.email, &self.phone);
        let center = self.study_center.parse::<StudyCenter>().map_err(|e| errors.push(e)).ok();
        match center {
            Some(study_center) if errors.is_empty() => Ok(NewStaffMember {
                first_name: self.first_name.trim().to_string(),
                last_name: self.last_name.trim().to_string(),
                email: self.email.trim().to_lowercase(),
                phone: self.phone.trim().to_string(),
                role: Role::Coordinator,
                study_center,
                department: None,
                qualification: None,
            }),
            _ => Err(errors),
        }
    }
}

impl LecturerForm {
    /// Registry picks the center; a coordinator always adds to their own.
    pub fn validate(&self, actor: &Actor) -> Result<NewStaffMember, Vec<String>> {
        let mut errors = validate_person(&self.first_name, &self.last_name, &self.email, &self.phone);
        errors.extend(validate::validate_required(&self.qualification, "Qualification", 100));
        if !DEPARTMENTS.contains(&self.department.trim()) {
            errors.push("Please select a department".to_string());
        }

        let center = match actor.role {
            Role::Coordinator => Some(actor.study_center),
            _ => self
                .study_center
                .as_deref()
                .unwrap_or_default()
                .parse::<StudyCenter>()
                .map_err(|_| errors.push("Please select a study center".to_string()))
                .ok(),
        };

        match center {
            Some(study_center) if errors.is_empty() => Ok(NewStaffMember {
                first_name: self.first_name.trim().to_string(),
                last_name: self.last_name.trim().to_string(),
                email: self.email.trim().to_lowercase(),
                phone: self.phone.trim().to_string(),
                role: Role::Lecturer,
                study_center,
                department: Some(self.department.trim().to_string()),
                qualification: Some(self.qualification.trim().to_string()),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lecturer_form(center: Option<&str>) -> LecturerForm {
        LecturerForm {
            first_name: "Ama".into(),
            last_name: "Boateng".into(),
            email: "Ama.Boateng@uew.edu.gh".into(),
            phone: "0244123456".into(),
            department: "Mathematics".into(),
            qualification: "PhD".into(),
            study_center: center.map(String::from),
            csrf_token: "t".into(),
        }
    }

    #[test]
    fn coordinator_adds_to_own_center_regardless_of_input() {
        let actor = Actor::new(Role::Coordinator, StudyCenter::Accra);
        let new = lecturer_form(Some("kumasi")).validate(&actor).unwrap();
        assert_eq!(new.study_center, StudyCenter::Accra);
        assert_eq!(new.role, Role::Lecturer);
        assert_eq!(new.email, "ama.boateng@uew.edu.gh");
    }

    #[test]
    fn registry_must_choose_center() {
        let actor = Actor::new(Role::Registry, StudyCenter::Accra);
        let errors = lecturer_form(None).validate(&actor).unwrap_err();
        assert_eq!(errors, vec!["Please select a study center"]);
        let new = lecturer_form(Some("winneba")).validate(&actor).unwrap();
        assert_eq!(new.study_center, StudyCenter::Winneba);
    }

    #[test]
    fn unknown_department_is_rejected() {
        let actor = Actor::new(Role::Registry, StudyCenter::Accra);
        let form = LecturerForm { department: "Astrology".into(), ..lecturer_form(Some("accra")) };
        assert_eq!(form.validate(&actor).unwrap_err(), vec!["Please select a department"]);
    }

    #[test]
    fn coordinator_form_requires_every_field() {
        let form = CoordinatorForm { csrf_token: "t".into(), ..Default::default() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 5);
    }
}
