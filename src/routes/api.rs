use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// API Router Module
///
/// Defines the routes nested under /api, the machine-facing surface of the
/// portal. The /api prefix sits in the gate's excluded set: the route matcher
/// passes these requests straight to their handlers without consulting the
/// decision function, so they neither require a cookie nor ever answer with
/// a redirect.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // GET /api/health
        // Liveness endpoint for monitoring and load balancer checks. Returns
        // a small JSON status immediately to verify the service is running.
        .route("/health", get(handlers::health))
}
