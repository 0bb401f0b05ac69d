//! Error types for storage backends and configuration parsing.
//!
//! Neither error ever escapes a [`crate::SessionStore`] action: the store logs
//! storage failures and keeps the in-memory mutation. They are returned by the
//! lower-level APIs ([`crate::KeyValueStore`], [`crate::SessionConfig`]) so
//! callers that use those directly can react.

use thiserror::Error;

/// Failure reported by a [`crate::KeyValueStore`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem read/write failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The host storage could not be reached (no window, quota exceeded, private mode...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// A shared in-memory backend was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Failure while loading or building a [`crate::SessionConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid session config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize session config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// A persisted path does not name a field of the session state.
    #[error("unknown state path `{0}`")]
    UnknownPath(String),
}
