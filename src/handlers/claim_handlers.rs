use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::Local;

use crate::audit;
use crate::config::AppConfig;
use crate::errors::{AppError, redirect, render};
use crate::models::claim::{self, AssignedStatus, ClaimForm, ClaimScope};
use crate::models::role::Capability;
use crate::models::staff::DEPARTMENTS;
use crate::session::{self, csrf, require_capability};
use crate::store::Store;
use crate::templates_structs::{
    center_options, string_options, ClaimDetailTemplate, ClaimFormTemplate, PageContext, SelectOption,
};

fn form_template(ctx: PageContext, form: ClaimForm, errors: Vec<String>) -> ClaimFormTemplate {
    let assigned_statuses = AssignedStatus::ALL
        .into_iter()
        .map(|s| SelectOption::new(s.as_str(), s.label(), s.as_str() == form.assigned_status))
        .collect();
    ClaimFormTemplate {
        ctx,
        centers: center_options(&form.study_center),
        departments: string_options(DEPARTMENTS, &form.department),
        assigned_statuses,
        form,
        errors,
    }
}

pub async fn new_form(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, "/claims/new")?;
    require_capability(&ctx.actor, Capability::SubmitClaims)?;

    let form = ClaimForm {
        date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
        assigned_status: AssignedStatus::Assigned.as_str().to_string(),
        ..ClaimForm::default()
    };
    render(form_template(ctx, form, vec![]))
}

pub async fn submit(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<ClaimForm>,
) -> Result<HttpResponse, AppError> {
    let actor = session::get_actor(&session, &config)?;
    require_capability(&actor, Capability::SubmitClaims)?;
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let new = match form.validate() {
        Ok(new) => new,
        Err(errors) => {
            log::warn!("Claim submission rejected: {}", errors.join("; "));
            let ctx = PageContext::build(&session, &config, "/claims/new")?;
            return render(form_template(ctx, form.into_inner(), errors));
        }
    };

    if !config.submit_delay.is_zero() {
        tokio::time::sleep(config.submit_delay).await;
    }

    let created = match claim::create(&store, new) {
        Ok(created) => created,
        Err(e) => {
            log::error!("Claim submission failed: {e}");
            let ctx = PageContext::build(&session, &config, "/claims/new")?;
            return render(form_template(ctx, form.into_inner(), vec![e.to_string()]));
        }
    };
    session::record_submission(&session, &created.id)?;
    log::info!("Claim {} submitted by {} ({})", created.id, created.lecturer, created.study_center);

    let details = serde_json::json!({
        "course_code": created.course_code,
        "summary": format!("Submitted claim {} for {}", created.id, created.course_code)
    });
    audit::log(&store, actor.role, "claim.submitted", "claim", &created.id, details);

    session::set_flash(&session, &format!("Claim {} submitted for approval", created.id));
    Ok(redirect(&format!("/claims/{}", created.id)))
}

/// Reviewers see claims inside their scope; lecturers only their own submissions.
pub async fn detail(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let ctx = PageContext::build(&session, &config, &format!("/claims/{id}"))?;
    let claim = claim::find_by_id(&store, &id).ok_or(AppError::NotFound)?;

    let can_decide = match ClaimScope::for_actor(&ctx.actor) {
        Some(scope) if scope.contains(&claim) => claim.status.is_pending(),
        Some(_) => return Err(AppError::NotFound),
        None => {
            if !session::submitted_claims(&session).contains(&claim.id) {
                return Err(AppError::PermissionDenied(Capability::ReviewApprovals.code().to_string()));
            }
            false
        }
    };

    render(ClaimDetailTemplate { ctx, claim, can_decide })
}
