//! Small shared helpers: credential tokens, referral links, route guarding.

pub mod referral;
pub mod route_guard;
pub mod token;
