use super::*;

#[test]
fn default_rules_match_the_route_table() {
    let rules = AuthRules::default();
    assert_eq!(rules.login_route, "/login");
    assert_eq!(rules.register_route, "/registration");
    assert_eq!(rules.post_login_redirect, "/account");
    assert_eq!(rules.guest_only, ["/login", "/registration"]);
    assert_eq!(rules.protected, ["/account", "/account/**", "/dashboard/**"]);
}

#[test]
fn default_config_is_same_origin() {
    let config = AppConfig::default();
    assert!(config.api_host.is_empty());
    assert!(config.base_url.is_empty());
}
