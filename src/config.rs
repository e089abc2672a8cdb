//! Typed runtime configuration.
//!
//! Everything the crate consumes from the environment or deployment is
//! enumerated here: the API host, the public base URL used for referral
//! links, and the route-guard rule set. Provided once through context from
//! the root component.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Route-guard rule set evaluated on every client-side navigation.
///
/// `guest_only` patterns bounce authenticated users to
/// `post_login_redirect`; `protected` patterns bounce anonymous users to
/// `login_route`. See [`crate::util::route_guard`] for the pattern grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthRules {
    pub login_route: String,
    pub register_route: String,
    pub post_login_redirect: String,
    pub guest_only: Vec<String>,
    pub protected: Vec<String>,
}

impl Default for AuthRules {
    fn default() -> Self {
        Self {
            login_route: "/login".to_owned(),
            register_route: "/registration".to_owned(),
            post_login_redirect: "/account".to_owned(),
            guest_only: vec!["/login".to_owned(), "/registration".to_owned()],
            protected: vec![
                "/account".to_owned(),
                "/account/**".to_owned(),
                "/dashboard/**".to_owned(),
            ],
        }
    }
}

/// Application configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the API server. Empty means same-origin.
    pub api_host: String,
    /// Public base URL of this app, used only for referral links.
    pub base_url: String,
    /// Route-guard rules.
    pub auth_rules: AuthRules,
}

impl AppConfig {
    /// Build the configuration from compile-time environment variables
    /// (`API_URL`, `BASE_URL`), falling back to same-origin paths.
    pub fn from_env() -> Self {
        Self {
            api_host: option_env!("API_URL").unwrap_or_default().to_owned(),
            base_url: option_env!("BASE_URL").unwrap_or_default().to_owned(),
            auth_rules: AuthRules::default(),
        }
    }
}
