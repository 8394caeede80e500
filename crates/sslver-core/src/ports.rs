//! Library info port.
//!
//! This port abstracts the cryptographic library's accessor functions from
//! the report logic. Implementations live in adapters (e.g., sslver-openssl).
//!
//! # Design Notes
//!
//! - Core owns the trait and key types (pure)
//! - The adapter owns the FFI calls
//! - The CLI injects the adapter via main.rs

use crate::keys::{InfoKey, VersionKey};

/// Port for reading version and configuration strings from a library.
///
/// # Example
///
/// ```ignore
/// use sslver_core::{InfoKey, LibraryInfoPort, VersionKey};
///
/// fn describe(lib: &dyn LibraryInfoPort) {
///     let version = lib.version(VersionKey::Version);
///     let config = lib.info(InfoKey::ConfigDir);
///     // ...
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait LibraryInfoPort: Send + Sync {
    /// Query a version attribute.
    ///
    /// The library guarantees a string for every defined key; it may be
    /// empty when the aspect was not configured.
    fn version(&self, key: VersionKey) -> String;

    /// Query an info attribute.
    ///
    /// Returns `None` when the path was not configured at build time.
    fn info(&self, key: InfoKey) -> Option<String>;
}
