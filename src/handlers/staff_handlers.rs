use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::audit;
use crate::config::AppConfig;
use crate::errors::{AppError, redirect, render};
use crate::models::role::{Actor, Capability, Role};
use crate::models::staff::{self, CoordinatorForm, LecturerForm, NewStaffMember, DEPARTMENTS};
use crate::session::{self, csrf, require_capability};
use crate::store::Store;
use crate::templates_structs::{
    center_options, string_options, CoordinatorFormTemplate, LecturerFormTemplate, PageContext,
};

const COORDINATOR_PATH: &str = "/create/coordinator";
const LECTURER_PATH: &str = "/create/lecturer";

fn coordinator_template(
    store: &Store,
    ctx: PageContext,
    form: CoordinatorForm,
    errors: Vec<String>,
) -> CoordinatorFormTemplate {
    CoordinatorFormTemplate {
        ctx,
        centers: center_options(&form.study_center),
        coordinators: staff::find_by_role(store, Role::Coordinator),
        form,
        errors,
    }
}

/// Lecturers listed under the form: a coordinator only sees their own center.
fn lecturer_template(
    store: &Store,
    ctx: PageContext,
    form: LecturerForm,
    errors: Vec<String>,
) -> LecturerFormTemplate {
    let actor = ctx.actor;
    let centers = if actor.role == Role::Coordinator {
        vec![]
    } else {
        center_options(form.study_center.as_deref().unwrap_or_default())
    };
    let lecturers = staff::find_by_role(store, Role::Lecturer)
        .into_iter()
        .filter(|s| actor.role != Role::Coordinator || s.study_center == actor.study_center)
        .collect();
    LecturerFormTemplate {
        ctx,
        centers,
        departments: string_options(DEPARTMENTS, &form.department),
        lecturers,
        form,
        errors,
    }
}

/// Insert the new member and record it; a duplicate email comes back as a form error.
fn create_member(store: &Store, actor: &Actor, new: NewStaffMember) -> Result<String, String> {
    let member = staff::create(store, new)?;
    let name = member.full_name();
    log::info!("{} '{}' created for {}", member.role.label(), name, member.study_center);

    let details = serde_json::json!({
        "email": member.email,
        "study_center": member.study_center.name(),
        "summary": format!("Created {} '{}' ({})", member.role.label().to_lowercase(), name, member.study_center)
    });
    audit::log(store, actor.role, "staff.created", member.role.as_str(), &member.email, details);
    Ok(format!("{} '{}' was created", member.role.label(), name))
}

pub async fn coordinator_form(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, COORDINATOR_PATH)?;
    require_capability(&ctx.actor, Capability::CreateCoordinator)?;
    render(coordinator_template(&store, ctx, CoordinatorForm::default(), vec![]))
}

pub async fn create_coordinator(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<CoordinatorForm>,
) -> Result<HttpResponse, AppError> {
    let actor = session::get_actor(&session, &config)?;
    require_capability(&actor, Capability::CreateCoordinator)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let result = form.validate().and_then(|new| create_member(&store, &actor, new).map_err(|e| vec![e]));
    match result {
        Ok(msg) => {
            session::set_flash(&session, &msg);
            Ok(redirect("/dashboard"))
        }
        Err(errors) => {
            log::warn!("Create coordinator rejected: {}", errors.join("; "));
            let ctx = PageContext::build(&session, &config, COORDINATOR_PATH)?;
            render(coordinator_template(&store, ctx, form.into_inner(), errors))
        }
    }
}

pub async fn lecturer_form(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, LECTURER_PATH)?;
    require_capability(&ctx.actor, Capability::CreateLecturer)?;
    render(lecturer_template(&store, ctx, LecturerForm::default(), vec![]))
}

pub async fn create_lecturer(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<LecturerForm>,
) -> Result<HttpResponse, AppError> {
    let actor = session::get_actor(&session, &config)?;
    require_capability(&actor, Capability::CreateLecturer)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let result = form
        .validate(&actor)
        .and_then(|new| create_member(&store, &actor, new).map_err(|e| vec![e]));
    match result {
        Ok(msg) => {
            session::set_flash(&session, &msg);
            Ok(redirect("/dashboard"))
        }
        Err(errors) => {
            log::warn!("Create lecturer rejected: {}", errors.join("; "));
            let ctx = PageContext::build(&session, &config, LECTURER_PATH)?;
            render(lecturer_template(&store, ctx, form.into_inner(), errors))
        }
    }
}
