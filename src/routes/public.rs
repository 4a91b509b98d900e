use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Public Router Module
///
/// Defines the pages that are reachable **without** a credential cookie.
/// These paths make up the gate's public prefix set: anonymous visitors may
/// load them freely, while visitors who already carry a credential are
/// redirected to the todo list before any handler here runs.
///
/// Prefix Semantics:
/// The gate classifies by prefix, so everything under /login and /register
/// (e.g. a future /login/reset) inherits the public classification without a
/// route change here.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /login
        // The sign-in page and the redirect target for every anonymous
        // request to a protected page.
        .route("/login", get(handlers::login_page))
        // GET /register
        // The account-creation page. Public for the same reason /login is:
        // a visitor without a credential has to be able to obtain one.
        .route("/register", get(handlers::register_page))
}
