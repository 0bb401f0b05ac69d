//! Write-through persistence of selected state fields.
//!
//! [`PersistedState`] holds the configured path list with each path's storage
//! key. [`crate::SessionStore`] calls [`PersistedState::restore`] once when it
//! is built and [`PersistedState::persist`] after every committed mutation.
//! Both are best-effort: failures are logged and never reach the caller.

use crate::config::SessionConfig;
use crate::error::ConfigError;
use crate::state::{SessionState, StatePath};
use crate::storage::KeyValueStore;

#[derive(Clone, Debug, PartialEq)]
pub struct PersistedState {
    entries: Vec<(StatePath, String)>,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            entries: vec![(StatePath::LoginState, StatePath::LoginState.as_str().to_string())],
        }
    }
}

impl PersistedState {
    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        let entries = config
            .persisted_paths()?
            .into_iter()
            .map(|path| (path, config.key_for(path)))
            .collect();
        Ok(Self { entries })
    }

    /// Load every stored path into `state`. Absent keys keep the default value.
    pub fn restore<S: KeyValueStore>(&self, storage: &S, state: &mut SessionState) {
        for (path, key) in &self.entries {
            match storage.get_item(key) {
                Ok(Some(raw)) => match state.load_path(*path, &raw) {
                    Ok(()) => tracing::info!("Restored `{}` from storage", path),
                    Err(e) => tracing::warn!("Ignoring stored `{}` ({:?}): {}", key, raw, e),
                },
                Ok(None) => {}
                Err(e) => tracing::warn!("Failed to read `{}` from storage: {}", key, e),
            }
        }
    }

    /// Write the current value of every configured path.
    pub fn persist<S: KeyValueStore>(&self, storage: &S, state: &SessionState) {
        for (path, key) in &self.entries {
            if let Err(e) = storage.set_item(key, &state.path_value(*path)) {
                tracing::warn!("Failed to persist `{}`: {}", key, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::{LoginPayload, UserInfo};

    #[test]
    fn test_default_persists_only_login_state() {
        let storage = MemoryStore::new();
        let mut state = SessionState::default();
        state.set_login_state(LoginPayload::new(true));
        state.update_user_info_state(UserInfo::new(1, "abc", 2));

        PersistedState::default().persist(&storage, &state);

        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get_item("loginState").unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_restore_configured_paths() {
        let storage = MemoryStore::new();
        storage.set_item("app:loginState", "true").unwrap();
        storage.set_item("app:coupon", "4").unwrap();
        storage.set_item("app:token", "9").unwrap();

        let config = SessionConfig::default()
            .with_paths(&[StatePath::LoginState, StatePath::Coupon])
            .with_namespace("app");
        let persisted = PersistedState::from_config(&config).unwrap();

        let mut state = SessionState::default();
        persisted.restore(&storage, &mut state);

        assert!(state.login_state());
        assert_eq!(state.coupon(), 4);
        // token is stored but not configured
        assert_eq!(state.token(), 0);
    }

    #[test]
    fn test_restore_skips_garbage() {
        let storage = MemoryStore::new();
        storage.set_item("loginState", "maybe").unwrap();

        let mut state = SessionState::default();
        PersistedState::default().restore(&storage, &mut state);

        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn test_from_config_rejects_unknown_path() {
        let mut config = SessionConfig::default();
        config.persist.paths.push("balance".to_string());
        assert!(PersistedState::from_config(&config).is_err());
    }
}
