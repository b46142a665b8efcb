use askama::Template;

use crate::audit::AuditEntry;
use crate::models::claim::{Claim, StatusCounts};
use crate::models::staff::StaffCounts;

use super::PageContext;

/// Shortcut card on the dashboard.
pub struct QuickAction {
    pub label: String,
    pub url: String,
    pub description: String,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub greeting: String,
    pub subtitle: String,
    /// Role-scoped for reviewers; own submissions for lecturers.
    pub counts: StatusCounts,
    pub staff: StaffCounts,
    pub center_lecturers: usize,
    pub quick_actions: Vec<QuickAction>,
    /// Pending claims awaiting review, or the lecturer's own claims.
    pub claims: Vec<Claim>,
    pub recent_activity: Vec<AuditEntry>,
}
