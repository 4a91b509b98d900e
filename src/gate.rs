/// Decision
///
/// The tri-state outcome of a single gate invocation. A `Decision` is an
/// ephemeral value: it is computed from `(path, credential)` alone, handed to
/// the middleware that enacts it, and never stored or shared across requests.
///
/// With the default [`GatePolicy`] the only redirect targets ever produced are
/// the login path (for anonymous visitors on protected pages) and the home
/// path (for signed-in visitors on the login/register pages).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Let the request proceed to whatever handler the router resolves.
    Continue,
    /// Answer with an HTTP redirect to the contained target path instead of
    /// serving the request.
    Redirect(String),
}

/// PresenceOnlyAuthPolicy
///
/// The authentication judgement used by the gate, named explicitly so nobody
/// mistakes it for real verification: a **defined credential value counts as
/// authenticated**. No signature check, no expiry check, no format or length
/// check of any kind is performed here.
///
/// Whether an empty cookie value reaches this policy as `Some("")` or `None`
/// is the extraction layer's call (see `auth::credential_from_headers`, which
/// maps empty to absent). Given a defined value, this policy says "present",
/// empty string included.
pub struct PresenceOnlyAuthPolicy;

impl PresenceOnlyAuthPolicy {
    /// True when a credential value is defined at all.
    pub fn is_authenticated(credential: Option<&str>) -> bool {
        credential.is_some()
    }
}

/// GatePolicy
///
/// The immutable configuration value driving both stages of the access gate.
/// It is constructed once (see `AppConfig::load`), carried in the shared
/// application state, and never mutated afterwards. All path sets live here
/// rather than as hardcoded literals so the gate can be exercised against
/// arbitrary sets in tests.
///
/// The two stages:
/// 1. [`GatePolicy::should_invoke`], the route matcher. Paths under an
///    excluded prefix (API routes, static assets, the favicon) bypass the
///    gate entirely and go straight to their handlers.
/// 2. [`GatePolicy::decide`], the decision function proper: a total, pure
///    function over the path and the optional credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatePolicy {
    /// Path prefixes exempt from the authentication requirement.
    /// Matching is prefix-based, not segment-based: with the default set,
    /// "/login-help" classifies public just like "/login" does.
    pub public_prefixes: Vec<String>,
    /// Path prefixes the gate is never consulted for. These belong to the
    /// hosting shell (API, static files, favicon), not to the page surface.
    pub excluded_prefixes: Vec<String>,
    /// Redirect target for anonymous visitors on protected pages.
    pub login_path: String,
    /// Redirect target for signed-in visitors on the public pages.
    pub home_path: String,
    /// Name of the cookie carrying the credential.
    pub cookie_name: String,
}

impl Default for GatePolicy {
    /// default
    ///
    /// The canonical portal policy: login and register are the public pages,
    /// everything under /api and the asset paths is outside the gate, and the
    /// signed-in landing page is the todo list.
    fn default() -> Self {
        Self {
            public_prefixes: vec!["/login".to_string(), "/register".to_string()],
            excluded_prefixes: vec![
                "/api".to_string(),
                "/_next/static".to_string(),
                "/_next/image".to_string(),
                "/favicon.ico".to_string(),
            ],
            login_path: "/login".to_string(),
            home_path: "/todos".to_string(),
            cookie_name: "auth-token".to_string(),
        }
    }
}

impl GatePolicy {
    /// is_public
    ///
    /// Classifies a path against the public prefix set. Derived on every call,
    /// never stored. An empty or malformed path simply matches nothing and
    /// classifies as protected.
    pub fn is_public(&self, path: &str) -> bool {
        self.public_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// should_invoke
    ///
    /// Stage one of the pipeline: the route matcher. Returns false for paths
    /// the gate must never see; the middleware passes those straight through
    /// without consulting [`GatePolicy::decide`]. Everything else is gated.
    pub fn should_invoke(&self, path: &str) -> bool {
        !self
            .excluded_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// decide
    ///
    /// Stage two: the decision function. Total and pure, with no I/O and no
    /// failure path, so concurrent invocations share nothing. Exactly one
    /// [`Decision`] is produced per call:
    ///
    /// 1. Anonymous visitor on a protected page → redirect to the login page.
    /// 2. Signed-in visitor on a public page → redirect to the signed-in home
    ///    (there is nothing for them on the login/register pages).
    /// 3. Everything else → continue to the resolved handler.
    ///
    /// Note the loop-freedom this implies under a fixed credential state: the
    /// login page itself never demands a credential, and the home page is not
    /// public, so neither redirect target triggers a further redirect.
    pub fn decide(&self, path: &str, credential: Option<&str>) -> Decision {
        let is_public = self.is_public(path);
        let is_authenticated = PresenceOnlyAuthPolicy::is_authenticated(credential);

        if !is_authenticated && !is_public {
            return Decision::Redirect(self.login_path.clone());
        }

        if is_authenticated && is_public {
            return Decision::Redirect(self.home_path.clone());
        }

        Decision::Continue
    }
}
