//! Session context and hooks for the UI.

use dioxus::prelude::*;
use session::{KeyValueStore, SessionConfig, SessionStore};

use crate::storage::{load_config, make_storage, PlatformStore};

/// The session store as shared through the component tree.
pub type AppSession = SessionStore<PlatformStore>;

/// Get the session store.
/// Reading the signal subscribes the component to every later commit.
pub fn use_session() -> Signal<AppSession> {
    use_context::<Signal<AppSession>>()
}

/// Build the store over the platform storage, restoring persisted fields.
pub fn open_session(config: &SessionConfig) -> AppSession {
    open_session_with(make_storage, config)
}

/// Build a store over `storage`. Invalid configuration falls back to the
/// defaults.
pub fn open_session_with<S, F>(storage: F, config: &SessionConfig) -> SessionStore<S>
where
    S: KeyValueStore,
    F: Fn() -> S,
{
    match SessionStore::with_config(storage(), config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Invalid session config, using defaults: {}", e);
            SessionStore::new(storage())
        }
    }
}

/// Provider component that owns the session store.
/// Wrap your app with this component to enable `use_session`.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(|| {
        let store = open_session(&load_config());
        tracing::info!("Session opened (logged in: {})", store.login_state());
        store
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Button that runs the `logout` action.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    /// Page to navigate to afterwards (web only).
    #[props(default)]
    redirect: Option<String>,
) -> Element {
    let mut session = use_session();
    let logged_in = session.read().login_state();

    let onclick = move |_| {
        session.write().logout();
        #[cfg(target_arch = "wasm32")]
        {
            if let (Some(window), Some(url)) = (web_sys::window(), redirect.as_deref()) {
                let _ = window.location().set_href(url);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = &redirect;
    };

    rsx! {
        button {
            class: "{class}",
            disabled: !logged_in,
            onclick: onclick,
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session::{LoginPayload, MemoryStore, StatePath};

    #[test]
    fn test_open_session_uses_config() {
        let storage = MemoryStore::new();
        storage.set_item("shop:loginState", "true").unwrap();
        let config = SessionConfig::default().with_namespace("shop");

        let store = open_session_with(|| storage.clone(), &config);
        assert!(store.login_state());
    }

    #[test]
    fn test_open_session_invalid_config_uses_defaults() {
        let storage = MemoryStore::new();
        storage.set_item("loginState", "true").unwrap();
        let mut config = SessionConfig::default().with_paths(&[StatePath::Token]);
        config.persist.paths.push("balance".to_string());

        let mut store = open_session_with(|| storage.clone(), &config);
        // Default config restores the bare `loginState` key
        assert!(store.login_state());

        store.login(LoginPayload::new(false));
        assert_eq!(storage.get_item("loginState").unwrap().as_deref(), Some("false"));
        assert!(storage.get_item("token").unwrap().is_none());
    }
}
