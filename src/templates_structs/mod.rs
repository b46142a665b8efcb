// Template context structures for Askama templates, organized by page.

use actix_session::Session;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::claim::StudyCenter;
use crate::models::nav_item::{self, NavSidebarItem};
use crate::models::role::{Actor, Capabilities, Role};
use crate::session::{self, csrf};

/// Common context shared by every page behind the role selector.
/// Templates access these as `ctx.role_label`, `ctx.caps.review_approvals`, etc.
pub struct PageContext {
    pub app_name: String,
    pub actor: Actor,
    pub role_label: String,
    pub caps: Capabilities,
    pub sidebar_items: Vec<NavSidebarItem>,
    pub role_options: Vec<SelectOption>,
    pub flash: Option<String>,
    pub csrf_token: String,
    pub current_path: String,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig, current_path: &str) -> Result<Self, AppError> {
        let actor = session::get_actor(session, config)?;
        let flash = session::take_flash(session);
        let csrf_token = csrf::get_or_create_token(session);
        Ok(Self {
            app_name: config.app_name.clone(),
            role_label: actor.role.label().to_string(),
            caps: actor.capabilities,
            sidebar_items: nav_item::find_navigation(&actor.capabilities, current_path),
            role_options: role_options(Some(actor.role)),
            actor,
            flash,
            csrf_token,
            current_path: current_path.to_string(),
        })
    }

    /// Center shown in the header for coordinators.
    pub fn center_name(&self) -> &'static str {
        self.actor.study_center.name()
    }
}

/// One `<option>` of a select box.
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: &str, label: &str, selected: bool) -> Self {
        SelectOption { value: value.to_string(), label: label.to_string(), selected }
    }
}

pub fn role_options(current: Option<Role>) -> Vec<SelectOption> {
    Role::ALL
        .into_iter()
        .map(|r| SelectOption::new(r.as_str(), r.label(), current == Some(r)))
        .collect()
}

/// Study center options keyed by slug. `selected` may be a slug or a display name.
pub fn center_options(selected: &str) -> Vec<SelectOption> {
    let selected = selected.parse::<StudyCenter>().ok();
    StudyCenter::ALL
        .into_iter()
        .map(|c| SelectOption::new(c.slug(), c.name(), selected == Some(c)))
        .collect()
}

/// Options for a plain list of strings where value and label coincide.
pub fn string_options<'a, I>(values: I, selected: &str) -> Vec<SelectOption>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .map(|v| SelectOption::new(v, v, v == selected))
        .collect()
}

mod approval;
mod claim;
mod dashboard;
mod landing;
mod staff;

pub use approval::*;
pub use claim::*;
pub use dashboard::*;
pub use landing::*;
pub use staff::*;
