//! Dioxus glue for the session store: platform storage, a context provider,
//! and the components that read or dispatch session actions.

mod storage;
pub use storage::{load_config, load_config_from, make_storage, PlatformStore};

mod provider;
pub use provider::{open_session, open_session_with, use_session, AppSession, LogoutButton, SessionProvider};

mod balance;
pub use balance::TokenBalance;
