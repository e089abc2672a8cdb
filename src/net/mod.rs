//! Networking layer: transport boundary, authorized gateway, account
//! service, wire types, and the error taxonomy.

pub mod api;
pub mod error;
#[cfg(test)]
pub mod testing;
pub mod transport;
pub mod types;
pub mod user;
