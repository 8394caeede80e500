//! OpenSSL adapter for sslver.
//!
//! Implements [`LibraryInfoPort`] by calling `OpenSSL_version()` and
//! `OPENSSL_info()` in the libcrypto that `openssl-sys` links against.
#![deny(unused_crate_dependencies)]

#[allow(unsafe_code)]
mod ffi;

use std::ffi::c_int;

use sslver_core::{InfoKey, LibraryInfoPort, VersionKey};
use tracing::debug;

/// Reads version and info strings from the linked OpenSSL.
#[derive(Debug, Clone, Copy)]
pub struct OpenSslLibrary {
    _private: (),
}

impl OpenSslLibrary {
    /// Initialise libcrypto and return the adapter.
    pub fn new() -> Self {
        openssl_sys::init();
        debug!(info_supported = Self::info_supported(), "OpenSSL initialised");
        Self { _private: () }
    }

    /// Whether this build was compiled against headers providing `OPENSSL_info()`.
    pub const fn info_supported() -> bool {
        cfg!(ossl300)
    }
}

impl Default for OpenSslLibrary {
    fn default() -> Self {
        Self::new()
    }
}

const fn version_selector(key: VersionKey) -> c_int {
    match key {
        VersionKey::Version => ffi::OPENSSL_VERSION,
        VersionKey::CFlags => ffi::OPENSSL_CFLAGS,
        VersionKey::BuiltOn => ffi::OPENSSL_BUILT_ON,
        VersionKey::Platform => ffi::OPENSSL_PLATFORM,
        VersionKey::Dir => ffi::OPENSSL_DIR,
        VersionKey::EnginesDir => ffi::OPENSSL_ENGINES_DIR,
        VersionKey::ModulesDir => ffi::OPENSSL_MODULES_DIR,
    }
}

const fn info_selector(key: InfoKey) -> c_int {
    match key {
        InfoKey::ConfigDir => ffi::OPENSSL_INFO_CONFIG_DIR,
        InfoKey::EnginesDir => ffi::OPENSSL_INFO_ENGINES_DIR,
        InfoKey::ModulesDir => ffi::OPENSSL_INFO_MODULES_DIR,
    }
}

impl LibraryInfoPort for OpenSslLibrary {
    fn version(&self, key: VersionKey) -> String {
        ffi::version(version_selector(key))
    }

    fn info(&self, key: InfoKey) -> Option<String> {
        ffi::info(info_selector(key))
    }
}
