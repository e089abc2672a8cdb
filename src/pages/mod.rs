//! Top-level route pages.

pub mod account;
pub mod login;
pub mod registration;
