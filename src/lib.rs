use axum::{
    Router,
    extract::{FromRef, Request, State},
    http::{HeaderMap, HeaderName, header},
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core application services and components.
pub mod auth;
pub mod config;
pub mod gate;
pub mod handlers;

// Module for routing segregation (Public, Authenticated, Excluded API).
pub mod routes;
use auth::AuthToken; // The resolved credential cookie of a request.
use gate::Decision;
use routes::{api, authenticated, public};

// --- Public Re-exports ---

// Makes core types easily accessible to the main application entry point
// (main.rs) and to integration tests.
pub use config::AppConfig;
pub use gate::GatePolicy;

/// AppState
///
/// Implements the **Unified State Pattern**. This is the single, thread-safe,
/// and immutable container holding the application configuration, and with
/// it the gate policy every request is judged against. The state is shared
/// across all incoming requests.
#[derive(Clone)]
pub struct AppState {
    /// Configuration: the loaded, immutable environment configuration,
    /// including the access-gate policy.
    pub config: AppConfig,
}

// --- Axum FromRef Extractor Implementations ---

// Allows extractors (notably AuthToken) to pull the AppConfig out of the
// shared AppState without depending on the full state type.

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// access_gate
///
/// The middleware enacting the access gate on every request.
///
/// *Mechanism*: the gate policy runs its two stages. Stage one is the route
/// matcher: paths under an excluded prefix (API, static assets, favicon)
/// pass straight through. Stage two is the decision function over the path
/// and the extracted credential cookie. `Continue` hands the request to the
/// resolved handler; `Redirect` answers immediately with a 307 pointing at
/// an absolute URL, so the handler never runs.
///
/// The function is total: there is no rejection path, only the three
/// outcomes above.
async fn access_gate(
    State(state): State<AppState>,
    AuthToken(credential): AuthToken,
    request: Request,
    next: Next,
) -> Response {
    let policy = &state.config.gate;
    let path = request.uri().path().to_string();

    // 1. Route Matcher (Stage One)
    // Excluded paths are the hosting shell's business, not the gate's.
    if !policy.should_invoke(&path) {
        return next.run(request).await;
    }

    // 2. Decision (Stage Two)
    match policy.decide(&path, credential.as_deref()) {
        Decision::Continue => next.run(request).await,
        Decision::Redirect(target) => {
            tracing::debug!(path = %path, target = %target, "access gate redirecting request");
            let location = redirect_location(&state.config, request.headers(), &target);
            // 307 preserves the method and is never cached, so a visitor who
            // signs in (or out) gets re-judged on the very next request.
            Redirect::temporary(&location).into_response()
        }
    }
}

/// redirect_location
///
/// Builds the absolute URL for a redirect by joining the target path onto a
/// base origin.
///
/// Resolution order: the configured PUBLIC_ORIGIN wins when set (behind the
/// production proxy it is the only truthful origin); otherwise the origin is
/// reconstructed from the request itself, using the forwarded scheme (plain
/// http if absent) and the Host header. A request with no Host header at all
/// falls back to the bare path, which user agents resolve against the current
/// origin anyway.
fn redirect_location(config: &AppConfig, headers: &HeaderMap, target: &str) -> String {
    if let Some(origin) = &config.public_origin {
        return format!("{}{}", origin.trim_end_matches('/'), target);
    }

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");

    match headers.get(header::HOST).and_then(|value| value.to_str().ok()) {
        Some(host) => format!("{}://{}{}", scheme, host, target),
        None => target.to_string(),
    }
}

/// create_router
///
/// Assembles the application's entire routing structure, applies the access
/// gate and the global middleware, and registers the application state.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for Request Correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    let base_router = Router::new()
        // Public Pages: reachable without a credential cookie.
        .merge(public::public_routes())
        // Protected Pages: the gate redirects anonymous visitors to /login.
        .merge(authenticated::authenticated_routes())
        // Excluded Tier: paths the gate's route matcher passes through.
        // The API surface, the static asset service, and the favicon.
        .nest("/api", api::api_routes())
        .route("/favicon.ico", get(handlers::favicon))
        .nest_service("/_next/static", ServeDir::new("static"))
        // The Access Gate. Applied with `layer` rather than `route_layer` so
        // it runs ahead of route resolution: a protected path with no route
        // is still redirected for anonymous visitors and only 404s for
        // signed-in ones.
        .layer(middleware::from_fn_with_state(state.clone(), access_gate))
        // Apply the Unified State to all routes.
        .with_state(state);

    // 3. Observability and Correlation Layers (Applied outermost/first)
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID Generation: a unique UUID per incoming request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request Tracing: wraps the request/response lifecycle in
                // a tracing span carrying the generated request ID, so the
                // gate's redirect events correlate with the request they
                // belong to.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID Propagation: returns the x-request-id header
                // to the client and downstream services.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS Layer (Applied last, allowing all traffic in/out after processing)
        .layer(cors)
}

/// trace_span_logger
///
/// Helper function used by `TraceLayer` to customize the tracing span
/// creation. It extracts the `x-request-id` header (if present) and includes
/// it in the structured logging metadata alongside the HTTP method and URI.
///
/// *Goal*: ensure every log line for a single request (the gate's redirect
/// events included) is correlated by a unique ID.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    // The structured log format used by the tracing macros.
    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
