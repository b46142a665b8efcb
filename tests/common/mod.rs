//! Shared test infrastructure.
//!
//! - `claim()` builds a claim record for model-level tests
//! - `init_app()` builds the full actix service over a seeded store
//! - `Browser` carries the session cookie between requests the way a browser would

#![allow(dead_code)]

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use chrono::NaiveDate;
use regex::Regex;

use uew_claims::config::AppConfig;
use uew_claims::models::claim::{AssignedStatus, Claim, ClaimStatus, StudyCenter};
use uew_claims::routes;
use uew_claims::store::Store;

// ============================================================================
// MODEL FIXTURES
// ============================================================================

pub fn claim(id: &str, status: ClaimStatus, study_center: StudyCenter) -> Claim {
    Claim {
        id: id.to_string(),
        serial_number: format!("SN-{id}"),
        study_center,
        lecturer: "Dr. Kwame Mensah".to_string(),
        department: "Computer Science".to_string(),
        month: "October".to_string(),
        year: "2023".to_string(),
        date: NaiveDate::from_ymd_opt(2023, 10, 15).expect("valid date"),
        course_code: "MATH101".to_string(),
        course_title: "Algebra".to_string(),
        start_time: "08:00".to_string(),
        end_time: "10:00".to_string(),
        hours: 2.0,
        assigned_status: AssignedStatus::Assigned,
        remarks: String::new(),
        status,
        venue: None,
        student_count: None,
        submitted_at: None,
    }
}

/// Store loaded from the embedded seed: five claims, two coordinators, five lecturers.
pub fn seeded_store() -> web::Data<Store> {
    web::Data::new(Store::load(None).expect("Failed to load embedded seed"))
}

// ============================================================================
// HTTP SETUP
// ============================================================================

pub async fn init_app(
    store: web::Data<Store>,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .wrap(routes::session_middleware(Key::generate()))
            .app_data(store)
            .app_data(web::Data::new(AppConfig::default()))
            .configure(routes::configure)
            .default_service(web::to(routes::not_found)),
    )
    .await
}

/// Response reduced to what the tests look at.
pub struct Page {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

/// Keeps the session cookie and the last CSRF token seen.
#[derive(Default)]
pub struct Browser {
    cookie: Option<Cookie<'static>>,
    csrf_token: Option<String>,
}

impl Browser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn csrf_token(&self) -> String {
        self.csrf_token.clone().expect("No CSRF token seen yet")
    }

    async fn send<S, B>(&mut self, app: &S, mut req: test::TestRequest) -> Page
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        if let Some(cookie) = &self.cookie {
            req = req.cookie(cookie.clone());
        }
        let resp = test::call_service(app, req.to_request()).await;

        if let Some(cookie) = resp.response().cookies().find(|c| c.name() == "id") {
            self.cookie = Some(cookie.into_owned());
        }
        let status = resp.status();
        let location = resp
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = test::read_body(resp).await;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("valid regex");
        if let Some(caps) = re.captures(&body) {
            self.csrf_token = Some(caps[1].to_string());
        }
        Page { status, location, body }
    }

    pub async fn get<S, B>(&mut self, app: &S, uri: &str) -> Page
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        self.send(app, test::TestRequest::get().uri(uri)).await
    }

    /// POST a form. The CSRF token from the last rendered page is added automatically.
    pub async fn post<S, B>(&mut self, app: &S, uri: &str, fields: &[(&str, &str)]) -> Page
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        let token = self.csrf_token.clone().unwrap_or_default();
        let mut pairs: Vec<(&str, &str)> = fields.to_vec();
        pairs.push(("csrf_token", token.as_str()));
        self.post_raw(app, uri, &pairs).await
    }

    /// POST exactly the given fields.
    pub async fn post_raw<S, B>(&mut self, app: &S, uri: &str, fields: &[(&str, &str)]) -> Page
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        let body = serde_urlencoded::to_string(fields).expect("Failed to encode form");
        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
            .set_payload(body);
        self.send(app, req).await
    }

    /// Open the landing page and pick a role, as a user would.
    pub async fn choose_role<S, B>(&mut self, app: &S, role: &str) -> Page
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        let landing = self.get(app, "/").await;
        assert_eq!(landing.status, StatusCode::OK);
        self.post(app, "/role", &[("role", role), ("return_to", "/dashboard")]).await
    }
}
