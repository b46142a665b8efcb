use askama::Template;

use crate::models::staff::{CoordinatorForm, LecturerForm, StaffMember};

use super::{PageContext, SelectOption};

#[derive(Template)]
#[template(path = "staff/coordinator_form.html")]
pub struct CoordinatorFormTemplate {
    pub ctx: PageContext,
    pub form: CoordinatorForm,
    pub centers: Vec<SelectOption>,
    pub coordinators: Vec<StaffMember>,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "staff/lecturer_form.html")]
pub struct LecturerFormTemplate {
    pub ctx: PageContext,
    pub form: LecturerForm,
    /// Empty for coordinators, who cannot choose.
    pub centers: Vec<SelectOption>,
    pub departments: Vec<SelectOption>,
    pub lecturers: Vec<StaffMember>,
    pub errors: Vec<String>,
}
