use actix_session::Session;
use actix_web::{web, HttpResponse};
use chrono::{Local, Timelike};

use crate::audit;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::claim::{self, ClaimScope, StatusCounts};
use crate::models::role::Capabilities;
use crate::models::staff;
use crate::session;
use crate::store::Store;
use crate::templates_structs::{DashboardTemplate, PageContext, QuickAction};

fn time_greeting(name: &str) -> String {
    let hour = Local::now().hour();
    let period = match hour {
        5..=11 => "Good morning",
        12..=16 => "Good afternoon",
        _ => "Good evening",
    };
    format!("{}, {}", period, name)
}

fn quick_actions(caps: &Capabilities) -> Vec<QuickAction> {
    let mut actions = vec![];
    let mut push = |label: &str, url: &str, description: &str| {
        actions.push(QuickAction {
            label: label.to_string(),
            url: url.to_string(),
            description: description.to_string(),
        })
    };
    if caps.submit_claims {
        push("Submit Claim", "/claims/new", "Record teaching hours for approval");
    }
    if caps.review_approvals {
        push("Review Approvals", "/approvals?status=pending", "Pending claims awaiting a decision");
        push("Print Report", "/approvals/print", "Printable summary of claims");
    }
    if caps.create_coordinator {
        push("Create Coordinator", "/create/coordinator", "Assign a coordinator to a study center");
    }
    if caps.create_lecturer {
        push("Create Lecturer", "/create/lecturer", "Add a lecturer to the staff list");
    }
    actions
}

pub async fn index(
    store: web::Data<Store>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &config, "/dashboard")?;
    let actor = ctx.actor;

    let greeting = time_greeting(&ctx.role_label);
    let (subtitle, counts, claims) = match ClaimScope::for_actor(&actor) {
        Some(scope) => {
            let all = claim::find_all(&store);
            let scoped = scope.apply(&all);
            let counts = StatusCounts::tally(scoped.iter().copied());
            let pending = scoped
                .into_iter()
                .filter(|c| c.status.is_pending())
                .take(5)
                .cloned()
                .collect();
            (scope.description(), counts, pending)
        }
        None => {
            let mut own = claim::find_by_ids(&store, &session::submitted_claims(&session));
            let counts = StatusCounts::tally(&own);
            own.reverse();
            ("Track the teaching claims you have submitted".to_string(), counts, own)
        }
    };

    let staff = staff::counts(&store);
    let center_lecturers = staff.lecturers_in(actor.study_center);
    let recent_activity = audit::find_recent(&store, 5);

    let tmpl = DashboardTemplate {
        quick_actions: quick_actions(&ctx.caps),
        ctx,
        greeting,
        subtitle,
        counts,
        staff,
        center_lecturers,
        claims,
        recent_activity,
    };
    render(tmpl)
}
