//! Client-side navigation guard for guest-only and protected routes.
//!
//! Pattern grammar, checked per pattern: a trailing `/**` matches any path
//! sharing the prefix before it, a trailing `*` likewise, anything else must
//! match exactly. Evaluation order is fixed: guest-only rules first (token
//! present redirects to the post-login page), then protected rules (token
//! absent redirects to the login page). First match wins.
//!
//! This guard is a UX affordance only; the server enforces authorization
//! independently.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use crate::config::AuthRules;

/// Whether `path` matches a single route pattern.
fn matches(pattern: &str, path: &str) -> bool {
    if let Some(prefix) = pattern.strip_suffix("/**") {
        path.starts_with(prefix)
    } else if let Some(prefix) = pattern.strip_suffix('*') {
        path.starts_with(prefix)
    } else {
        path == pattern
    }
}

/// Decide whether navigating to `path` should redirect elsewhere.
///
/// Returns the redirect destination, or `None` to let the navigation
/// proceed.
pub fn evaluate<'a>(rules: &'a AuthRules, has_token: bool, path: &str) -> Option<&'a str> {
    if has_token {
        if rules.guest_only.iter().any(|pattern| matches(pattern, path)) {
            return Some(&rules.post_login_redirect);
        }
    } else if rules.protected.iter().any(|pattern| matches(pattern, path)) {
        return Some(&rules.login_route);
    }
    None
}
