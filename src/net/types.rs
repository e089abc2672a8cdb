//! Wire types for the account API.
//!
//! Field names match the backend contract byte for byte; request bodies are
//! serialized as JSON and responses are replaced wholesale, never merged.

use serde::{Deserialize, Serialize};

/// Login/password pair sent to `account/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

/// Sign-up payload; `reffer` carries the inviter's referral code when the
/// registration came through a referral link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub login: String,
    pub password: String,
    pub password_confirmation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reffer: Option<String>,
}

/// Password change payload for `account/user/{login}/changepassword`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePassRequest {
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Response carrying the acted-on user id, shared by login, registration
/// and password change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseResponse {
    pub user_id: i64,
}

pub type LoginResponse = BaseResponse;
pub type RegisterResponse = BaseResponse;
pub type ChangePassResponse = BaseResponse;

/// Account payload: the root of the user's referral tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub data: ReferralNode,
}

/// Node of the referral tree.
///
/// Arbitrarily deep; the server guarantees it is acyclic and the client
/// never validates or merges it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralNode {
    pub id: String,
    pub login: String,
    pub referral_code: String,
    #[serde(default)]
    pub children: Vec<ReferralNode>,
}
