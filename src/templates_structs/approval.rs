use askama::Template;

use crate::models::claim::{Claim, StatusCounts};

use super::{PageContext, SelectOption};

/// Current filter values echoed back into the form.
pub struct FilterForm {
    pub q: String,
    pub statuses: Vec<SelectOption>,
    pub months: Vec<SelectOption>,
    pub years: Vec<SelectOption>,
    pub centers: Vec<SelectOption>,
}

#[derive(Template)]
#[template(path = "approvals/list.html")]
pub struct ApprovalsTemplate {
    pub ctx: PageContext,
    pub scope_description: String,
    pub filter: FilterForm,
    pub claims: Vec<Claim>,
    /// Counts over the role-scoped set, not the filtered rows.
    pub counts: StatusCounts,
    pub show_center: bool,
    pub filtered: bool,
    /// Current URL with its query, so decisions come back to the same filtered view.
    pub return_to: String,
}

#[derive(Template)]
#[template(path = "approvals/print.html")]
pub struct ApprovalsPrintTemplate {
    pub app_name: String,
    pub scope_description: String,
    pub generated_at: String,
    pub criteria: Vec<(String, String)>,
    pub claims: Vec<Claim>,
    /// Counts over the printed rows.
    pub counts: StatusCounts,
    pub show_center: bool,
}
