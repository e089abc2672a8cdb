//! Presentation components. Behavior lives in the core modules; these only
//! render shared state and forward user intent to the session store.

pub mod loading_overlay;
pub mod notification_toast;
pub mod referral_tree;
