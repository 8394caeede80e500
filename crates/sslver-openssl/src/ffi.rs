//! Raw bindings to the libcrypto accessors.
//!
//! Both functions return pointers into static storage owned by the library.
//! The strings are copied out immediately and never freed.

use std::ffi::{CStr, c_char, c_int};

use openssl_sys::OpenSSL_version;
pub use openssl_sys::{
    OPENSSL_BUILT_ON, OPENSSL_CFLAGS, OPENSSL_DIR, OPENSSL_PLATFORM, OPENSSL_VERSION,
};

// Selectors openssl-sys does not export, from <openssl/crypto.h>.
pub const OPENSSL_ENGINES_DIR: c_int = 5;
pub const OPENSSL_MODULES_DIR: c_int = 8;

pub const OPENSSL_INFO_CONFIG_DIR: c_int = 1001;
pub const OPENSSL_INFO_ENGINES_DIR: c_int = 1002;
pub const OPENSSL_INFO_MODULES_DIR: c_int = 1003;

#[cfg(ossl300)]
unsafe extern "C" {
    fn OPENSSL_info(t: c_int) -> *const c_char;
}

/// Copy a library-owned C string, mapping null to `None`.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
unsafe fn copy_c_str(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    // SAFETY: non-null and NUL-terminated per the caller's contract.
    let text = unsafe { CStr::from_ptr(ptr) };
    Some(text.to_string_lossy().into_owned())
}

/// `OpenSSL_version(t)`. Unknown selectors yield `"not available"`.
pub fn version(t: c_int) -> String {
    // SAFETY: OpenSSL_version accepts any int and returns a pointer to a
    // static string.
    let text = unsafe { copy_c_str(OpenSSL_version(t)) };
    text.unwrap_or_default()
}

/// `OPENSSL_info(t)`. Null when the item was not configured.
#[cfg(ossl300)]
pub fn info(t: c_int) -> Option<String> {
    // SAFETY: OPENSSL_info accepts any int and returns null or a pointer into
    // process-wide storage initialised once by the library.
    unsafe { copy_c_str(OPENSSL_info(t)) }
}

/// Libraries older than OpenSSL 3.0 have no `OPENSSL_info`.
#[cfg(not(ossl300))]
pub const fn info(_t: c_int) -> Option<String> {
    None
}
