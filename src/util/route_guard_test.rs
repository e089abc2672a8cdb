use super::*;

fn rules() -> AuthRules {
    AuthRules {
        login_route: "/login".to_owned(),
        register_route: "/registration".to_owned(),
        post_login_redirect: "/account".to_owned(),
        guest_only: vec!["/login".to_owned()],
        protected: vec!["/account/**".to_owned()],
    }
}

// =============================================================
// Pattern grammar
// =============================================================

#[test]
fn exact_pattern_requires_equality() {
    assert!(matches("/login", "/login"));
    assert!(!matches("/login", "/login/extra"));
    assert!(!matches("/login", "/log"));
}

#[test]
fn double_star_pattern_matches_prefix() {
    assert!(matches("/account/**", "/account"));
    assert!(matches("/account/**", "/account/5"));
    assert!(matches("/account/**", "/account/5/deep"));
    assert!(!matches("/account/**", "/dashboard"));
}

#[test]
fn single_star_pattern_matches_prefix() {
    assert!(matches("/dash*", "/dashboard"));
    assert!(matches("/dash*", "/dash"));
    assert!(!matches("/dash*", "/da"));
}

// =============================================================
// Decision procedure
// =============================================================

#[test]
fn guest_only_redirects_authenticated_users() {
    assert_eq!(evaluate(&rules(), true, "/login"), Some("/account"));
}

#[test]
fn protected_redirects_anonymous_users() {
    assert_eq!(evaluate(&rules(), false, "/account/5"), Some("/login"));
}

#[test]
fn anonymous_user_may_visit_guest_pages() {
    assert_eq!(evaluate(&rules(), false, "/login"), None);
}

#[test]
fn authenticated_user_may_visit_public_pages() {
    assert_eq!(evaluate(&rules(), true, "/public"), None);
}

#[test]
fn guest_only_wins_over_protected() {
    let mut rules = rules();
    rules.guest_only = vec!["/both".to_owned()];
    rules.protected = vec!["/both".to_owned()];

    assert_eq!(evaluate(&rules, true, "/both"), Some("/account"));
    assert_eq!(evaluate(&rules, false, "/both"), Some("/login"));
}

#[test]
fn default_rules_cover_the_account_area() {
    let rules = AuthRules::default();
    assert_eq!(evaluate(&rules, false, "/account"), Some("/login"));
    assert_eq!(evaluate(&rules, false, "/dashboard/stats"), Some("/login"));
    assert_eq!(evaluate(&rules, true, "/registration"), Some("/account"));
    assert_eq!(evaluate(&rules, true, "/account/tree"), None);
}
