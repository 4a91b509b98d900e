use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Authenticated Router Module
///
/// Defines the pages reachable only by visitors carrying the credential
/// cookie. None of these handlers checks the credential themselves; the
/// access gate has already redirected anonymous requests to /login before
/// routing happens, so by the time a handler here runs the cookie is known
/// to be present.
///
/// Access Control Strategy:
/// The gate classifies by prefix set, not by route table, so every path that
/// is neither public nor excluded is protected, including paths with no
/// route at all. A typo like /todoss is still gated first and only 404s for
/// visitors who are signed in.
pub fn authenticated_routes() -> Router<AppState> {
    Router::new()
        // GET /
        // The portal index. Links out to the todo list and settings.
        .route("/", get(handlers::home_page))
        // GET /todos
        // The signed-in landing page. Also the redirect target the gate uses
        // when a signed-in visitor strays onto /login or /register.
        .route("/todos", get(handlers::todos_page))
        // GET /settings
        // Account settings. A second protected page, so the protected tier
        // is demonstrably a set rather than a single path.
        .route("/settings", get(handlers::settings_page))
}
