//! Build/version metadata for the sslver binary itself.
//!
//! This describes the tool, not the cryptographic library it reports on.

/// The `SemVer` version of the build (from Cargo).
pub const SEMVER: &str = env!("CARGO_PKG_VERSION");

/// The git SHA emitted by the build script.
///
/// A 7-character hex string when available; otherwise `"unknown"`.
pub const GIT_SHA_SHORT: &str = env!("VERGEN_GIT_SHA");

/// Whether the build script reported the working tree as dirty.
pub const GIT_DIRTY: bool = str_eq(env!("VERGEN_GIT_DIRTY"), "true");

/// True if the git SHA looks like a short hex hash.
pub const HAS_GIT_SHA: bool = is_short_hex(GIT_SHA_SHORT);

const LONG_VERSION_WITH_SHA: &str =
    concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

const LONG_VERSION_WITH_DIRTY_SHA: &str =
    concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), "-dirty)");

/// Version string used by `--version`.
///
/// Examples:
/// - `0.1.0 (a1b2c3d)`
/// - `0.1.0 (a1b2c3d-dirty)` (uncommitted changes at build time)
/// - `0.1.0` (when git data is unavailable)
pub const LONG_VERSION: &str = long_version(HAS_GIT_SHA, GIT_DIRTY);

const fn long_version(has_sha: bool, dirty: bool) -> &'static str {
    match (has_sha, dirty) {
        (false, _) => SEMVER,
        (true, false) => LONG_VERSION_WITH_SHA,
        (true, true) => LONG_VERSION_WITH_DIRTY_SHA,
    }
}

const fn is_short_hex(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 7 {
        return false;
    }

    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_hexdigit() {
            return false;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();
    if a_bytes.len() != b_bytes.len() {
        return false;
    }

    let mut i = 0;
    while i < a_bytes.len() {
        if a_bytes[i] != b_bytes[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_detection() {
        assert!(is_short_hex("a1b2c3d"));
        assert!(is_short_hex("ABCDEF0"));
        assert!(!is_short_hex("unknown"));
        assert!(!is_short_hex("a1b2c3"));
        assert!(!is_short_hex("a1b2c3d4"));
    }

    #[test]
    fn const_str_eq() {
        assert!(str_eq("true", "true"));
        assert!(!str_eq("true", "false"));
        assert!(!str_eq("", "x"));
    }

    #[test]
    fn long_version_starts_with_semver() {
        assert!(LONG_VERSION.starts_with(SEMVER));
        if HAS_GIT_SHA && GIT_DIRTY {
            assert!(LONG_VERSION.ends_with(&format!("({GIT_SHA_SHORT}-dirty)")));
        } else if HAS_GIT_SHA {
            assert!(LONG_VERSION.ends_with(&format!("({GIT_SHA_SHORT})")));
        } else {
            assert_eq!(LONG_VERSION, SEMVER);
        }
    }

    #[test]
    fn dirty_tree_marks_sha() {
        assert_eq!(long_version(false, true), SEMVER);
        assert!(!long_version(true, false).contains("-dirty"));
        assert!(long_version(true, true).ends_with("-dirty)"));
    }
}
