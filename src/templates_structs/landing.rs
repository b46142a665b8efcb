use askama::Template;

/// One selectable role on the landing page.
pub struct RoleCard {
    pub value: String,
    pub label: String,
    pub description: String,
    pub current: bool,
}

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub app_name: String,
    pub csrf_token: String,
    pub flash: Option<String>,
    pub roles: Vec<RoleCard>,
}
