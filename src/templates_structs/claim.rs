use askama::Template;

use crate::models::claim::{Claim, ClaimForm};

use super::{PageContext, SelectOption};

#[derive(Template)]
#[template(path = "claims/form.html")]
pub struct ClaimFormTemplate {
    pub ctx: PageContext,
    pub form: ClaimForm,
    pub centers: Vec<SelectOption>,
    pub departments: Vec<SelectOption>,
    pub assigned_statuses: Vec<SelectOption>,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "claims/detail.html")]
pub struct ClaimDetailTemplate {
    pub ctx: PageContext,
    pub claim: Claim,
    /// Reviewer may still approve or reject.
    pub can_decide: bool,
}
