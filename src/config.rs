use std::env;

use crate::gate::GatePolicy;

/// AppConfig
///
/// Holds the application's entire configuration state. This struct is designed
/// to be immutable once loaded, ensuring every request observes the same gate
/// policy and origin settings. It is pulled into handlers and middleware via
/// FromRef, embodying the "immutable AppConfig" part of the Unified State
/// Pattern.
#[derive(Clone)]
pub struct AppConfig {
    // Runtime environment marker. Controls the logging format and which
    // settings are mandatory at startup.
    pub env: Env,
    // External origin (scheme + authority) used to build absolute redirect
    // targets. Mandatory in Production, where a TLS-terminating proxy hides
    // the public origin from the application; optional in Local, where the
    // request's Host header is a usable fallback.
    pub public_origin: Option<String>,
    // The immutable access-gate policy: public pages, excluded paths, the
    // redirect targets, and the credential cookie name.
    pub gate: GatePolicy,
}

/// Env
///
/// Defines the runtime context, used to switch between development output
/// (pretty logs, Host-derived redirect origins) and production-grade settings
/// (JSON logs, an explicitly configured public origin).
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Provides a safe, non-panicking AppConfig instance primarily used for
    /// test setup. This allows tests to assemble application state without
    /// touching process environment variables.
    fn default() -> Self {
        Self {
            env: Env::Local,
            public_origin: None,
            gate: GatePolicy::default(),
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing the application configuration
    /// at startup. It reads all parameters from environment variables and
    /// implements the **fail-fast** principle.
    ///
    /// # Panics
    /// Panics if a critical environment variable required for the current
    /// runtime environment (especially Production) is not found. This prevents
    /// the application from starting with redirects that point at the wrong
    /// origin.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        // Public Origin Resolution
        // Behind the production proxy the application cannot see its external
        // scheme or hostname, so the origin must be set explicitly there. In
        // local runs the Host header of each request is good enough.
        let public_origin = match env {
            Env::Production => Some(
                env::var("PUBLIC_ORIGIN")
                    .expect("FATAL: PUBLIC_ORIGIN must be set in production."),
            ),
            _ => env::var("PUBLIC_ORIGIN").ok(),
        };

        // Gate Policy Assembly
        // The canonical path sets are fixed; only the credential cookie name
        // is overridable, for deployments that already use a different name.
        let mut gate = GatePolicy::default();
        if let Ok(cookie_name) = env::var("AUTH_COOKIE_NAME") {
            gate.cookie_name = cookie_name;
        }

        Self {
            env,
            public_origin,
            gate,
        }
    }
}
