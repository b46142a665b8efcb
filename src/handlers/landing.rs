use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::{AppError, redirect, render};
use crate::models::nav_item;
use crate::models::role::Role;
use crate::session::{self, csrf};
use crate::templates_structs::{LandingTemplate, RoleCard};

#[derive(Deserialize)]
pub struct RoleForm {
    pub role: String,
    #[serde(default)]
    pub return_to: Option<String>,
    pub csrf_token: String,
}

fn role_description(role: Role) -> &'static str {
    match role {
        Role::Lecturer => "Submit teaching claims and track their progress",
        Role::Coordinator => "Review claims from your study center and add lecturers",
        Role::Registry => "Approve claims across all centers and manage staff",
    }
}

pub async fn index(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let current = session::get_role(&session);
    let roles = Role::ALL
        .into_iter()
        .map(|role| RoleCard {
            value: role.as_str().to_string(),
            label: role.label().to_string(),
            description: role_description(role).to_string(),
            current: current == Some(role),
        })
        .collect();

    let tmpl = LandingTemplate {
        app_name: config.app_name.clone(),
        csrf_token: csrf::get_or_create_token(&session),
        flash: session::take_flash(&session),
        roles,
    };
    render(tmpl)
}

/// Store the chosen role and go back to where the switch was made, if the
/// new role can see that page.
pub async fn switch_role(
    session: Session,
    form: web::Form<RoleForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let role = match form.role.parse::<Role>() {
        Ok(role) => role,
        Err(e) => {
            log::warn!("Role switch refused: {e}");
            session::set_flash(&session, "Please choose a valid role");
            return Ok(redirect("/"));
        }
    };
    session::set_role(&session, role)?;
    log::info!("Role switched to {role}");

    let target = super::safe_return_to(form.return_to.as_deref(), "/dashboard");
    let path = target.split('?').next().unwrap_or_default();
    let visible = nav_item::find_navigation(&role.capabilities(), path)
        .iter()
        .any(|item| item.is_active);
    let location = if visible { target.as_str() } else { "/dashboard" };
    Ok(redirect(location))
}
