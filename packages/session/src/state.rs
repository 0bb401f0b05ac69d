//! # Session state and its mutations
//!
//! [`SessionState`] is the whole data model: login flag, nickname, token balance
//! and coupon count. Fields are private; the only way to change them is one of
//! the mutation methods below, either called directly or through
//! [`SessionState::apply`] with a [`Mutation`] value.
//!
//! | Mutation | Effect |
//! |----------|--------|
//! | `setLoginState` | sets the login flag |
//! | `logout` | clears login flag, nickname and token; the coupon count survives |
//! | `updateUserInfoState` | overwrites coupon, nickname and token together |
//! | `updateTokenState` | overwrites token |
//! | `decrementToken` / `decrementCoupon` | subtract one, floored at zero |
//! | `incrementToken` | add one |
//!
//! Counters are `u32`, so the non-negative invariant holds for every input and
//! `updateTokenState` needs no clamping.
//!
//! [`StatePath`] names each field the way it is stored on disk or in
//! `localStorage` (`loginState`, `nickname`, `token`, `coupon`) and converts
//! field values to and from those string encodings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::{LoginPayload, UserInfo};

/// In-memory session state. Starts logged out with zeroed counters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    login_state: bool,
    nickname: String,
    token: u32,
    coupon: u32,
}

/// A single committed change to [`SessionState`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mutation {
    SetLoginState(LoginPayload),
    Logout,
    UpdateUserInfoState(UserInfo),
    UpdateTokenState(u32),
    DecrementToken,
    IncrementToken,
    DecrementCoupon,
}

impl Mutation {
    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::SetLoginState(_) => "setLoginState",
            Mutation::Logout => "logout",
            Mutation::UpdateUserInfoState(_) => "updateUserInfoState",
            Mutation::UpdateTokenState(_) => "updateTokenState",
            Mutation::DecrementToken => "decrementToken",
            Mutation::IncrementToken => "incrementToken",
            Mutation::DecrementCoupon => "decrementCoupon",
        }
    }
}

impl SessionState {
    pub fn login_state(&self) -> bool {
        self.login_state
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn token(&self) -> u32 {
        self.token
    }

    pub fn coupon(&self) -> u32 {
        self.coupon
    }

    /// Run a mutation against this state.
    pub fn apply(&mut self, mutation: &Mutation) {
        match mutation {
            Mutation::SetLoginState(payload) => self.set_login_state(*payload),
            Mutation::Logout => self.logout(),
            Mutation::UpdateUserInfoState(info) => self.update_user_info_state(info.clone()),
            Mutation::UpdateTokenState(token) => self.update_token_state(*token),
            Mutation::DecrementToken => self.decrement_token(),
            Mutation::IncrementToken => self.increment_token(),
            Mutation::DecrementCoupon => self.decrement_coupon(),
        }
    }

    pub fn set_login_state(&mut self, payload: LoginPayload) {
        self.login_state = payload.login_state;
    }

    /// Coupons are not tied to a login session and are left as they are.
    pub fn logout(&mut self) {
        self.login_state = false;
        self.nickname.clear();
        self.token = 0;
    }

    pub fn update_user_info_state(&mut self, info: UserInfo) {
        self.coupon = info.coupon;
        self.nickname = info.nickname;
        self.token = info.token;
    }

    pub fn update_token_state(&mut self, token: u32) {
        self.token = token;
    }

    pub fn decrement_token(&mut self) {
        if self.token > 0 {
            self.token -= 1;
        }
    }

    pub fn increment_token(&mut self) {
        self.token = self.token.saturating_add(1);
    }

    pub fn decrement_coupon(&mut self) {
        if self.coupon > 0 {
            self.coupon -= 1;
        }
    }

    /// String encoding of one field, as written to durable storage.
    pub fn path_value(&self, path: StatePath) -> String {
        match path {
            StatePath::LoginState => self.login_state.to_string(),
            StatePath::Nickname => self.nickname.clone(),
            StatePath::Token => self.token.to_string(),
            StatePath::Coupon => self.coupon.to_string(),
        }
    }

    /// Load one field from its stored string encoding. On a malformed value the
    /// field is left unchanged and the parse error is returned.
    pub fn load_path(&mut self, path: StatePath, raw: &str) -> Result<(), String> {
        match path {
            StatePath::LoginState => {
                self.login_state = raw.trim().parse().map_err(|e| format!("{e}"))?;
            }
            StatePath::Nickname => self.nickname = raw.to_string(),
            StatePath::Token => {
                self.token = raw.trim().parse().map_err(|e| format!("{e}"))?;
            }
            StatePath::Coupon => {
                self.coupon = raw.trim().parse().map_err(|e| format!("{e}"))?;
            }
        }
        Ok(())
    }
}

/// A persistable field of [`SessionState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatePath {
    LoginState,
    Nickname,
    Token,
    Coupon,
}

impl StatePath {
    pub const ALL: [StatePath; 4] = [
        StatePath::LoginState,
        StatePath::Nickname,
        StatePath::Token,
        StatePath::Coupon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatePath::LoginState => "loginState",
            StatePath::Nickname => "nickname",
            StatePath::Token => "token",
            StatePath::Coupon => "coupon",
        }
    }
}

impl fmt::Display for StatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatePath {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatePath::ALL
            .into_iter()
            .find(|path| path.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownPath(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> SessionState {
        let mut state = SessionState::default();
        state.set_login_state(LoginPayload::new(true));
        state.update_user_info_state(UserInfo::new(3, "abc", 5));
        state
    }

    #[test]
    fn test_default_is_logged_out() {
        let state = SessionState::default();
        assert!(!state.login_state());
        assert_eq!(state.nickname(), "");
        assert_eq!(state.token(), 0);
        assert_eq!(state.coupon(), 0);
    }

    #[test]
    fn test_logout_keeps_coupon() {
        let mut state = populated();
        state.logout();

        assert!(!state.login_state());
        assert_eq!(state.nickname(), "");
        assert_eq!(state.token(), 0);
        assert_eq!(state.coupon(), 3);
    }

    #[test]
    fn test_update_user_info_is_idempotent() {
        let mut state = SessionState::default();
        let info = UserInfo::new(7, "nick", 11);

        state.update_user_info_state(info.clone());
        let once = state.clone();
        state.update_user_info_state(info);

        assert_eq!(state, once);
        assert_eq!(state.coupon(), 7);
        assert_eq!(state.nickname(), "nick");
        assert_eq!(state.token(), 11);
    }

    #[test]
    fn test_token_floor_at_zero() {
        let mut state = SessionState::default();
        state.update_user_info_state(UserInfo::new(3, "abc", 5));

        for _ in 0..6 {
            state.decrement_token();
        }
        assert_eq!(state.token(), 0);

        state.decrement_token();
        assert_eq!(state.token(), 0);
    }

    #[test]
    fn test_coupon_floor_at_zero() {
        let mut state = SessionState::default();
        state.update_user_info_state(UserInfo::new(1, "abc", 0));

        state.decrement_coupon();
        assert_eq!(state.coupon(), 0);
        state.decrement_coupon();
        assert_eq!(state.coupon(), 0);
    }

    #[test]
    fn test_increment_token() {
        let mut state = SessionState::default();
        state.increment_token();
        state.increment_token();
        assert_eq!(state.token(), 2);

        state.update_token_state(u32::MAX);
        state.increment_token();
        assert_eq!(state.token(), u32::MAX);
    }

    #[test]
    fn test_apply_matches_direct_calls() {
        let mutations = [
            Mutation::SetLoginState(LoginPayload::new(true)),
            Mutation::UpdateUserInfoState(UserInfo::new(2, "abc", 4)),
            Mutation::DecrementToken,
            Mutation::IncrementToken,
            Mutation::IncrementToken,
            Mutation::DecrementCoupon,
            Mutation::UpdateTokenState(9),
            Mutation::Logout,
        ];

        let mut via_apply = SessionState::default();
        for mutation in &mutations {
            via_apply.apply(mutation);
        }

        let mut direct = SessionState::default();
        direct.set_login_state(LoginPayload::new(true));
        direct.update_user_info_state(UserInfo::new(2, "abc", 4));
        direct.decrement_token();
        direct.increment_token();
        direct.increment_token();
        direct.decrement_coupon();
        direct.update_token_state(9);
        direct.logout();

        assert_eq!(via_apply, direct);
        assert_eq!(via_apply.coupon(), 1);
    }

    #[test]
    fn test_path_encoding() {
        let mut state = populated();
        assert_eq!(state.path_value(StatePath::LoginState), "true");
        assert_eq!(state.path_value(StatePath::Token), "5");

        let mut restored = SessionState::default();
        for path in StatePath::ALL {
            restored.load_path(path, &state.path_value(path)).unwrap();
        }
        assert_eq!(restored, state);

        assert!(state.load_path(StatePath::LoginState, "yes").is_err());
        assert!(state.login_state());
        assert!(state.load_path(StatePath::Token, "-1").is_err());
        assert_eq!(state.token(), 5);
    }

    #[test]
    fn test_state_path_from_str() {
        assert_eq!("loginState".parse::<StatePath>().unwrap(), StatePath::LoginState);
        assert_eq!("coupon".parse::<StatePath>().unwrap(), StatePath::Coupon);
        assert!(matches!(
            "login_state".parse::<StatePath>(),
            Err(ConfigError::UnknownPath(p)) if p == "login_state"
        ));
    }
}
