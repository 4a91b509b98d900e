use todo_portal::gate::{Decision, GatePolicy, PresenceOnlyAuthPolicy};

// --- Helpers ---

fn policy() -> GatePolicy {
    GatePolicy::default()
}

// --- Decision Table (default policy) ---

#[test]
fn test_anonymous_on_protected_path_redirects_to_login() {
    for path in ["/", "/todos", "/settings", "/todos/today", "/anything"] {
        assert_eq!(
            policy().decide(path, None),
            Decision::Redirect("/login".to_string()),
            "anonymous request to {path} should bounce to the login page"
        );
    }
}

#[test]
fn test_signed_in_on_public_path_redirects_home() {
    for path in ["/login", "/register", "/login/reset", "/register/confirm"] {
        assert_eq!(
            policy().decide(path, Some("tok123")),
            Decision::Redirect("/todos".to_string()),
            "signed-in request to {path} should bounce to the todo list"
        );
    }
}

#[test]
fn test_signed_in_on_protected_path_continues() {
    for path in ["/", "/todos", "/settings", "/todos/today"] {
        assert_eq!(policy().decide(path, Some("tok123")), Decision::Continue);
    }
}

#[test]
fn test_anonymous_on_public_path_continues() {
    for path in ["/login", "/register"] {
        assert_eq!(policy().decide(path, None), Decision::Continue);
    }
}

// --- Concrete Scenarios ---

#[test]
fn test_scenario_settings_without_credential() {
    assert_eq!(
        policy().decide("/settings", None),
        Decision::Redirect("/login".to_string())
    );
}

#[test]
fn test_scenario_login_without_credential() {
    assert_eq!(policy().decide("/login", None), Decision::Continue);
}

#[test]
fn test_scenario_register_with_credential() {
    assert_eq!(
        policy().decide("/register", Some("tok123")),
        Decision::Redirect("/todos".to_string())
    );
}

#[test]
fn test_scenario_todos_with_credential() {
    assert_eq!(policy().decide("/todos", Some("tok123")), Decision::Continue);
}

#[test]
fn test_scenario_login_help_is_public_by_prefix() {
    // Classification is prefix-based, not segment-based: "/login-help" is
    // public exactly like "/login" is. This behavior is deliberate.
    assert_eq!(policy().decide("/login-help", None), Decision::Continue);
    assert_eq!(
        policy().decide("/login-help", Some("tok123")),
        Decision::Redirect("/todos".to_string())
    );
}

// --- Loop Freedom ---

#[test]
fn test_redirect_targets_never_redirect_again() {
    let policy = policy();

    // The login page does not demand a credential...
    assert_eq!(policy.decide("/login", None), Decision::Continue);
    // ...and the home page is not public, so neither redirect target
    // triggers a further redirect under the same credential state.
    assert_eq!(policy.decide("/todos", Some("tok123")), Decision::Continue);

    // Follow each possible redirect once and confirm it settles.
    for (start, credential) in [("/settings", None), ("/register", Some("tok123"))] {
        match policy.decide(start, credential) {
            Decision::Redirect(target) => {
                assert_eq!(
                    policy.decide(&target, credential),
                    Decision::Continue,
                    "redirect from {start} to {target} must settle immediately"
                );
            }
            Decision::Continue => panic!("expected {start} to redirect"),
        }
    }
}

// --- Degenerate Paths ---

#[test]
fn test_empty_or_malformed_path_classifies_as_protected() {
    // An empty path matches no public prefix, so the normal rules apply:
    // anonymous requests bounce to login, signed-in ones continue.
    assert_eq!(
        policy().decide("", None),
        Decision::Redirect("/login".to_string())
    );
    assert_eq!(policy().decide("", Some("tok123")), Decision::Continue);
    assert_eq!(
        policy().decide("not-even-a-path", None),
        Decision::Redirect("/login".to_string())
    );
}

// --- Presence-Only Credential Semantics ---

#[test]
fn test_presence_only_policy_accepts_any_defined_value() {
    assert!(!PresenceOnlyAuthPolicy::is_authenticated(None));
    assert!(PresenceOnlyAuthPolicy::is_authenticated(Some("tok123")));
    // The judgement is presence, not content: an empty string is defined,
    // therefore "present". Mapping empty cookie values to None happens one
    // layer up, in the extraction code.
    assert!(PresenceOnlyAuthPolicy::is_authenticated(Some("")));
}

#[test]
fn test_gate_treats_defined_empty_string_as_present() {
    assert_eq!(policy().decide("/todos", Some("")), Decision::Continue);
    assert_eq!(
        policy().decide("/login", Some("")),
        Decision::Redirect("/todos".to_string())
    );
}

// --- Route Matcher (stage one) ---

#[test]
fn test_default_matcher_excludes_shell_paths() {
    let policy = policy();

    assert!(!policy.should_invoke("/api"));
    assert!(!policy.should_invoke("/api/health"));
    assert!(!policy.should_invoke("/_next/static/app.css"));
    assert!(!policy.should_invoke("/_next/image"));
    assert!(!policy.should_invoke("/favicon.ico"));
}

#[test]
fn test_default_matcher_gates_everything_else() {
    let policy = policy();

    assert!(policy.should_invoke("/"));
    assert!(policy.should_invoke("/login"));
    assert!(policy.should_invoke("/todos"));
    assert!(policy.should_invoke("/settings"));
}

#[test]
fn test_matcher_exclusion_is_prefix_based_like_classification() {
    // Exclusion shares the prefix semantics of the public set: "/apiary"
    // begins with "/api" and therefore bypasses the gate too.
    assert!(!policy().should_invoke("/apiary"));
}

// --- Policy Injection (arbitrary sets) ---

#[test]
fn test_custom_policy_sets_drive_both_stages() {
    let policy = GatePolicy {
        public_prefixes: vec!["/docs".to_string(), "/about".to_string()],
        excluded_prefixes: vec!["/metrics".to_string()],
        login_path: "/signin".to_string(),
        home_path: "/dashboard".to_string(),
        cookie_name: "portal-session".to_string(),
    };

    // Stage one honors the injected exclusion set.
    assert!(!policy.should_invoke("/metrics"));
    assert!(policy.should_invoke("/api/health"));

    // Stage two honors the injected public set and targets.
    assert_eq!(
        policy.decide("/reports", None),
        Decision::Redirect("/signin".to_string())
    );
    assert_eq!(
        policy.decide("/docs", Some("tok")),
        Decision::Redirect("/dashboard".to_string())
    );
    assert_eq!(policy.decide("/docs", None), Decision::Continue);
    assert_eq!(policy.decide("/reports", Some("tok")), Decision::Continue);
}

#[test]
fn test_default_policy_carries_canonical_values() {
    let policy = policy();

    assert_eq!(policy.public_prefixes, vec!["/login", "/register"]);
    assert_eq!(
        policy.excluded_prefixes,
        vec!["/api", "/_next/static", "/_next/image", "/favicon.ico"]
    );
    assert_eq!(policy.login_path, "/login");
    assert_eq!(policy.home_path, "/todos");
    assert_eq!(policy.cookie_name, "auth-token");
}

// --- Purity / Determinism ---

#[test]
fn test_decide_is_deterministic_over_its_inputs() {
    let policy = policy();
    let first = policy.decide("/settings", None);

    for _ in 0..100 {
        assert_eq!(policy.decide("/settings", None), first);
    }
}
