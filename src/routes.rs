use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{HttpResponse, cookie::Key, middleware, web};

use crate::errors;
use crate::handlers;
use crate::session;

pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}

/// Every route of the portal. The landing page and the role switch are open;
/// everything else needs a chosen role.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Static files
        .service(actix_files::Files::new("/static", "./static"))
        // Role selection
        .route("/", web::get().to(handlers::landing::index))
        .route("/role", web::post().to(handlers::landing::switch_role))
        .service(
            web::scope("")
                .wrap(middleware::from_fn(session::middleware::require_role))
                .route("/dashboard", web::get().to(handlers::dashboard::index))
                // Claims: /claims/new BEFORE /claims/{id}
                .route("/claims/new", web::get().to(handlers::claim_handlers::new_form))
                .route("/claims", web::post().to(handlers::claim_handlers::submit))
                .route("/claims/{id}", web::get().to(handlers::claim_handlers::detail))
                // Approvals: /approvals/print BEFORE /approvals/{id}/...
                .route("/approvals", web::get().to(handlers::approval_handlers::list))
                .route("/approvals/print", web::get().to(handlers::approval_handlers::print))
                .route("/approvals/{id}/approve", web::post().to(handlers::approval_handlers::approve))
                .route("/approvals/{id}/reject", web::post().to(handlers::approval_handlers::reject))
                // Staff
                .route("/create/coordinator", web::get().to(handlers::staff_handlers::coordinator_form))
                .route("/create/coordinator", web::post().to(handlers::staff_handlers::create_coordinator))
                .route("/create/lecturer", web::get().to(handlers::staff_handlers::lecturer_form))
                .route("/create/lecturer", web::post().to(handlers::staff_handlers::create_lecturer)),
        );
}

/// Default 404 handler (must be registered last).
pub async fn not_found() -> HttpResponse {
    errors::not_found_page()
}
