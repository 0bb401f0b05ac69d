//! Platform storage and configuration for the session store.
//!
//! [`make_storage`] returns the [`session::KeyValueStore`] for the current target:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`session::LocalStorage`]
//! - **Desktop / Mobile** (native): files via [`session::FileStore`]

use std::io::ErrorKind;
use std::path::Path;

use session::SessionConfig;

/// Directory name under the platform data directory.
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
const APP_DIR: &str = "restapi";

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = session::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = session::FileStore;

/// Create the platform-appropriate key-value store.
pub fn make_storage() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        session::LocalStorage::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        session::FileStore::new(app_dir().join("session"))
    }
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn app_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(APP_DIR)
}

/// Load `session.toml` from the app data directory.
///
/// Falls back to [`SessionConfig::default`] on web and whenever
/// [`load_config_from`] does.
pub fn load_config() -> SessionConfig {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionConfig::default()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        load_config_from(&app_dir().join(SessionConfig::filename()))
    }
}

/// Load a config file. A missing file is the default configuration; an
/// unreadable or invalid file is logged and also yields the default.
pub fn load_config_from(path: &Path) -> SessionConfig {
    match std::fs::read_to_string(path) {
        Ok(text) => SessionConfig::from_toml(&text).unwrap_or_else(|e| {
            tracing::warn!("Ignoring {}: {}", path.display(), e);
            SessionConfig::default()
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => SessionConfig::default(),
        Err(e) => {
            tracing::warn!("Could not read {}: {}", path.display(), e);
            SessionConfig::default()
        }
    }
}
