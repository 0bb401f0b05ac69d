pub mod config;
pub mod error;
pub mod models;
pub mod persist;
pub mod state;
pub mod storage;
pub mod store;

mod file_store;
pub use file_store::FileStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

pub use config::SessionConfig;
pub use error::{ConfigError, StorageError};
pub use models::{LoginPayload, UserInfo};
pub use persist::PersistedState;
pub use state::{Mutation, SessionState, StatePath};
pub use storage::KeyValueStore;
pub use store::SessionStore;
