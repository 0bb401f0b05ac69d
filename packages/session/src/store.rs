//! # SessionStore — state, actions and write-through persistence
//!
//! [`SessionStore`] owns one [`SessionState`] and the [`KeyValueStore`] it
//! persists into. Callers hold the store explicitly (the `ui` crate keeps it in
//! a Dioxus context signal); there is no global instance.
//!
//! ## Lifecycle
//!
//! Building a store restores the configured paths from storage before anything
//! else touches the state. Every [`commit`](SessionStore::commit) then applies
//! the mutation and immediately runs the persist step, so the write-through is
//! visible at the call site rather than hidden in a framework hook.
//!
//! ## Actions
//!
//! | Action | Mutation | Storage side effect |
//! |--------|----------|---------------------|
//! | [`login`](SessionStore::login) | `setLoginState` | writes `loginState` = `"true"`/`"false"` |
//! | [`logout`](SessionStore::logout) | `logout` | removes `loginState` |
//! | [`update_user_info`](SessionStore::update_user_info) | `updateUserInfoState` | persist step only |
//! | [`update_token`](SessionStore::update_token) | `updateTokenState` | persist step only |
//!
//! `decrementToken`, `incrementToken` and `decrementCoupon` have no action
//! wrapper; call [`commit`](SessionStore::commit) or the shorthand methods.
//!
//! Nothing here returns an error. Storage failures are logged with `tracing`
//! and the in-memory state keeps the mutation.

use crate::config::SessionConfig;
use crate::error::ConfigError;
use crate::models::{LoginPayload, UserInfo};
use crate::persist::PersistedState;
use crate::state::{Mutation, SessionState, StatePath};
use crate::storage::KeyValueStore;

pub struct SessionStore<S: KeyValueStore> {
    state: SessionState,
    storage: S,
    persisted: PersistedState,
    login_key: String,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Create a store with the default configuration (only `loginState` persisted).
    pub fn new(storage: S) -> Self {
        Self::build(storage, PersistedState::default(), StatePath::LoginState.as_str().to_string())
    }

    pub fn with_config(storage: S, config: &SessionConfig) -> Result<Self, ConfigError> {
        let persisted = PersistedState::from_config(config)?;
        Ok(Self::build(storage, persisted, config.key_for(StatePath::LoginState)))
    }

    fn build(storage: S, persisted: PersistedState, login_key: String) -> Self {
        let mut state = SessionState::default();
        persisted.restore(&storage, &mut state);
        Self {
            state,
            storage,
            persisted,
            login_key,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn get_token(&self) -> u32 {
        self.state.token()
    }

    pub fn login_state(&self) -> bool {
        self.state.login_state()
    }

    pub fn nickname(&self) -> &str {
        self.state.nickname()
    }

    pub fn coupon(&self) -> u32 {
        self.state.coupon()
    }

    /// Apply a mutation, then write the persisted paths through to storage.
    pub fn commit(&mut self, mutation: Mutation) {
        tracing::debug!("commit {}", mutation.name());
        self.state.apply(&mutation);
        self.persisted.persist(&self.storage, &self.state);
    }

    pub fn login(&mut self, payload: LoginPayload) {
        self.commit(Mutation::SetLoginState(payload));
        // Written even when `loginState` is not among the persisted paths.
        let value = payload.login_state.to_string();
        if let Err(e) = self.storage.set_item(&self.login_key, &value) {
            tracing::warn!("Failed to store login state: {}", e);
        }
    }

    pub fn logout(&mut self) {
        self.commit(Mutation::Logout);
        if let Err(e) = self.storage.remove_item(&self.login_key) {
            tracing::warn!("Failed to clear stored login state: {}", e);
        }
    }

    pub fn update_user_info(&mut self, info: UserInfo) {
        self.commit(Mutation::UpdateUserInfoState(info));
    }

    pub fn update_token(&mut self, token: u32) {
        self.commit(Mutation::UpdateTokenState(token));
    }

    pub fn decrement_token(&mut self) {
        self.commit(Mutation::DecrementToken);
    }

    pub fn increment_token(&mut self) {
        self.commit(Mutation::IncrementToken);
    }

    pub fn decrement_coupon(&mut self) {
        self.commit(Mutation::DecrementCoupon);
    }
}
