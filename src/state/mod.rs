//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`app`, `session`, `user`) so individual
//! components can depend on small focused models. The structs are plain
//! data shared through `RwSignal` contexts; flows and tests mutate them
//! the same way, with collaborators injected rather than reached for
//! globally.

pub mod app;
pub mod session;
pub mod user;
