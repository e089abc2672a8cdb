//! Referral link construction.

#[cfg(test)]
#[path = "referral_test.rs"]
mod referral_test;

use crate::config::AppConfig;

/// Build the shareable registration link for a referral code.
///
/// The registration page picks the `reffer` query parameter back up and
/// sends it with the sign-up request.
pub fn referral_url(config: &AppConfig, referral_code: &str) -> String {
    format!("{}/registration?reffer={referral_code}", config.base_url)
}
