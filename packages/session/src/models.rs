//! # Action payloads
//!
//! The shapes callers hand to [`crate::SessionStore`] actions. Both types are
//! `Serialize + Deserialize` with camelCase field names so a response body from
//! the web backend (e.g. `{"coupon": 2, "nickname": "abc", "token": 10}`) can be
//! decoded straight into a payload.

use serde::{Deserialize, Serialize};

/// Payload of the `login` action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub login_state: bool,
}

impl LoginPayload {
    pub fn new(login_state: bool) -> Self {
        Self { login_state }
    }
}

/// Payload of the `updateUserInfo` action. All three fields are overwritten together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub coupon: u32,
    pub nickname: String,
    pub token: u32,
}

impl UserInfo {
    pub fn new(coupon: u32, nickname: impl Into<String>, token: u32) -> Self {
        Self {
            coupon,
            nickname: nickname.into(),
            token,
        }
    }
}
