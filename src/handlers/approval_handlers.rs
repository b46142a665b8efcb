use actix_session::Session;
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Local;
use serde::Deserialize;

use crate::audit;
use crate::config::AppConfig;
use crate::errors::{AppError, redirect, render};
use crate::models::claim::{
    self, Claim, ClaimError, ClaimFilter, ClaimScope, ClaimStatus, Decision, FilterParams, StatusCounts,
    StudyCenter, filter::ALL, MONTHS,
};
use crate::models::role::{Actor, Capability};
use crate::session::{self, csrf, require_capability};
use crate::store::Store;
use crate::templates_structs::{
    ApprovalsPrintTemplate, ApprovalsTemplate, FilterForm, PageContext, SelectOption,
};

#[derive(Deserialize)]
pub struct DecisionForm {
    pub csrf_token: String,
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Role-scoped working set and the filter built from the query.
struct ScopedView {
    scope: ClaimScope,
    claims: Vec<Claim>,
    filter: ClaimFilter,
}

impl ScopedView {
    fn load(store: &Store, actor: &Actor, params: &FilterParams) -> Result<Self, AppError> {
        require_capability(actor, Capability::ReviewApprovals)?;
        let scope = ClaimScope::for_actor(actor)
            .ok_or_else(|| AppError::PermissionDenied(Capability::ReviewApprovals.code().to_string()))?;
        let all = claim::find_all(store);
        let claims = scope.apply(&all).into_iter().cloned().collect();
        let filter = ClaimFilter::from_params(params, actor.can(Capability::FilterStudyCenter));
        Ok(ScopedView { scope, claims, filter })
    }

    fn filtered(&self) -> Vec<Claim> {
        self.filter.apply(&self.claims).into_iter().cloned().collect()
    }
}

fn with_all(options: Vec<SelectOption>, label: &str) -> Vec<SelectOption> {
    let any_selected = options.iter().any(|o| o.selected);
    let mut out = vec![SelectOption::new(ALL, label, !any_selected)];
    out.extend(options);
    out
}

fn filter_form(filter: &ClaimFilter, years: &[String], show_center: bool) -> FilterForm {
    let statuses = ClaimStatus::ALL
        .into_iter()
        .map(|s| SelectOption::new(s.as_str(), s.label(), filter.status == Some(s)))
        .collect();
    let months = MONTHS
        .into_iter()
        .map(|m| SelectOption::new(m, m, filter.month.as_deref() == Some(m)))
        .collect();
    let years = years
        .iter()
        .map(|y| SelectOption::new(y, y, filter.year.as_deref() == Some(y.as_str())))
        .collect();
    let centers = if show_center {
        with_all(
            StudyCenter::ALL
                .into_iter()
                .map(|c| SelectOption::new(c.slug(), c.name(), filter.study_center == Some(c)))
                .collect(),
            "All Centers",
        )
    } else {
        vec![]
    };
    FilterForm {
        q: filter.search().to_string(),
        statuses: with_all(statuses, "All Statuses"),
        months: with_all(months, "All Months"),
        years: with_all(years, "All Years"),
        centers,
    }
}

pub async fn list(
    req: HttpRequest,
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
    query: web::Query<FilterParams>,
) -> Result<HttpResponse, AppError> {
    let return_to = match req.query_string() {
        "" => "/approvals".to_string(),
        qs => format!("/approvals?{qs}"),
    };
    let ctx = PageContext::build(&session, &config, "/approvals")?;
    let view = ScopedView::load(&store, &ctx.actor, &query)?;

    let show_center = ctx.actor.can(Capability::FilterStudyCenter);
    let counts = StatusCounts::tally(&view.claims);
    let filter = filter_form(&view.filter, &claim::known_years(&store), show_center);

    let tmpl = ApprovalsTemplate {
        scope_description: view.scope.description(),
        filtered: !view.filter.is_empty(),
        claims: view.filtered(),
        ctx,
        filter,
        counts,
        show_center,
        return_to,
    };
    render(tmpl)
}

pub async fn print(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
    query: web::Query<FilterParams>,
) -> Result<HttpResponse, AppError> {
    let actor = session::get_actor(&session, &config)?;
    let view = ScopedView::load(&store, &actor, &query)?;
    let claims = view.filtered();

    let tmpl = ApprovalsPrintTemplate {
        app_name: config.app_name.clone(),
        scope_description: view.scope.description(),
        generated_at: Local::now().format("%d %B %Y, %H:%M").to_string(),
        criteria: view.filter.describe(),
        counts: StatusCounts::tally(&claims),
        claims,
        show_center: actor.can(Capability::FilterStudyCenter),
    };
    render(tmpl)
}

pub async fn approve(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<DecisionForm>,
) -> Result<HttpResponse, AppError> {
    decide(&store, &config, &session, &path.into_inner(), &form, Decision::Approve)
}

pub async fn reject(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<DecisionForm>,
) -> Result<HttpResponse, AppError> {
    decide(&store, &config, &session, &path.into_inner(), &form, Decision::Reject)
}

fn decide(
    store: &Store,
    config: &AppConfig,
    session: &Session,
    id: &str,
    form: &DecisionForm,
    decision: Decision,
) -> Result<HttpResponse, AppError> {
    let actor = session::get_actor(session, config)?;
    require_capability(&actor, Capability::ReviewApprovals)?;
    csrf::validate_csrf(session, &form.csrf_token)?;

    // Claims outside the reviewer's scope are treated as missing.
    let in_scope = ClaimScope::for_actor(&actor)
        .zip(claim::find_by_id(store, id))
        .is_some_and(|(scope, c)| scope.contains(&c));
    if !in_scope {
        return Err(AppError::NotFound);
    }

    match claim::decide(store, id, decision) {
        Ok(updated) => {
            let verb = updated.status.as_str();
            log::info!("Claim {} {} by {}", updated.id, verb, actor.role);
            let details = serde_json::json!({
                "lecturer": updated.lecturer,
                "summary": format!("Claim {} for {} {}", updated.id, updated.lecturer, verb)
            });
            audit::log(store, actor.role, decision.action(), "claim", &updated.id, details);
            session::set_flash(session, &format!("Claim {} {} successfully", updated.id, verb));
        }
        Err(ClaimError::NotFound(_)) => return Err(AppError::NotFound),
        Err(e) => {
            log::warn!("Decision on claim {id} refused: {e}");
            session::set_flash(session, &e.to_string());
        }
    }

    Ok(redirect(&super::safe_return_to(form.return_to.as_deref(), "/approvals")))
}
