use crate::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::Html,
};
use serde::Serialize;

// --- Response Structs ---

/// HealthStatus
///
/// Response payload for the monitoring endpoint (GET /api/health).
/// Deliberately tiny: a liveness marker plus the runtime environment, which is
/// handy for confirming which configuration a deployment actually loaded.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub env: String,
}

// --- Page Rendering ---

/// render_page
///
/// Shared HTML shell for every page the portal serves. The pages themselves
/// are intentionally static placeholders: this application's job is deciding
/// *whether* a page may be served, not what the page does once served.
fn render_page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title} | Todo Portal</title>\n\
         <link rel=\"stylesheet\" href=\"/_next/static/app.css\">\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n"
    ))
}

// --- Handlers ---

/// login_page
///
/// [Public Page] The sign-in page. Anonymous visitors land here whenever the
/// gate turns them away from a protected page; visitors who already carry a
/// credential are bounced to the todo list before this handler ever runs.
///
/// *Note*: the portal does not issue sessions itself; the form is a
/// placeholder for the identity provider that sets the auth cookie.
pub async fn login_page() -> Html<String> {
    render_page(
        "Sign in",
        "<h1>Sign in</h1>\n\
         <form method=\"post\">\n\
         <label>Email <input type=\"email\" name=\"email\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Sign in</button>\n\
         </form>\n\
         <p>New here? <a href=\"/register\">Create an account</a>.</p>",
    )
}

/// register_page
///
/// [Public Page] The account-creation page. Shares the login page's fate in
/// both directions: reachable anonymously, redirected away once signed in.
pub async fn register_page() -> Html<String> {
    render_page(
        "Register",
        "<h1>Create an account</h1>\n\
         <form method=\"post\">\n\
         <label>Email <input type=\"email\" name=\"email\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Register</button>\n\
         </form>\n\
         <p>Already registered? <a href=\"/login\">Sign in</a>.</p>",
    )
}

/// home_page
///
/// [Protected Page] The portal index. Only reachable with a credential; the
/// gate sends anonymous visitors to the login page instead.
pub async fn home_page() -> Html<String> {
    render_page(
        "Home",
        "<h1>Todo Portal</h1>\n\
         <nav>\n\
         <a href=\"/todos\">Your todos</a>\n\
         <a href=\"/settings\">Settings</a>\n\
         </nav>",
    )
}

/// todos_page
///
/// [Protected Page] The signed-in landing page and redirect target for
/// authenticated visitors who stray onto /login or /register.
pub async fn todos_page() -> Html<String> {
    render_page(
        "Your todos",
        "<h1>Your todos</h1>\n\
         <ul class=\"todo-list\">\n\
         <li class=\"empty\">Nothing here yet.</li>\n\
         </ul>",
    )
}

/// settings_page
///
/// [Protected Page] Account settings. Exists mostly to give the protected
/// tier a second page, which keeps the gate honest about gating by prefix
/// set rather than by a single well-known path.
pub async fn settings_page() -> Html<String> {
    render_page(
        "Settings",
        "<h1>Settings</h1>\n\
         <p>Account settings live here.</p>",
    )
}

/// health
///
/// [Excluded Route] Liveness endpoint for monitoring and load balancer
/// checks. Lives under /api, which the gate's route matcher passes through
/// untouched: probes carry no cookies and must never be answered with a
/// redirect to the login page.
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        env: format!("{:?}", state.config.env).to_lowercase(),
    })
}

/// favicon
///
/// [Excluded Route] Stub for the browser's automatic favicon probe. The path
/// sits in the excluded set, so the probe resolves here even for anonymous
/// visitors instead of being bounced to the login page.
pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}
