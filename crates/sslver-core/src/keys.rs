//! Attribute keys selecting which aspect of the library a query targets.
//!
//! Two families exist: version keys, answered by `OpenSSL_version()` and
//! never absent, and info keys, answered by `OPENSSL_info()` and absent when
//! the path was not configured at build time.

use std::fmt;

/// Keys for the version-query family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionKey {
    /// Runtime version string, e.g. `OpenSSL 3.0.0 7 sep 2021`.
    Version,
    /// Compiler flags used to build the library.
    CFlags,
    /// Build timestamp.
    BuiltOn,
    /// Target platform.
    Platform,
    /// Configured installation directory.
    Dir,
    /// Configured engine-module directory.
    EnginesDir,
    /// Configured provider-module directory.
    ModulesDir,
}

impl VersionKey {
    /// All version keys, in report order.
    pub const ALL: [Self; 7] = [
        Self::Version,
        Self::CFlags,
        Self::BuiltOn,
        Self::Platform,
        Self::Dir,
        Self::EnginesDir,
        Self::ModulesDir,
    ];

    /// Name of the C constant selecting this aspect.
    pub const fn constant_name(self) -> &'static str {
        match self {
            Self::Version => "OPENSSL_VERSION",
            Self::CFlags => "OPENSSL_CFLAGS",
            Self::BuiltOn => "OPENSSL_BUILT_ON",
            Self::Platform => "OPENSSL_PLATFORM",
            Self::Dir => "OPENSSL_DIR",
            Self::EnginesDir => "OPENSSL_ENGINES_DIR",
            Self::ModulesDir => "OPENSSL_MODULES_DIR",
        }
    }

    /// Label printed in front of the value.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Version => "OpenSSL_version(OPENSSL_VERSION)",
            Self::CFlags => "OpenSSL_version(OPENSSL_CFLAGS)",
            Self::BuiltOn => "OpenSSL_version(OPENSSL_BUILT_ON)",
            Self::Platform => "OpenSSL_version(OPENSSL_PLATFORM)",
            Self::Dir => "OpenSSL_version(OPENSSL_DIR)",
            Self::EnginesDir => "OpenSSL_version(OPENSSL_ENGINES_DIR)",
            Self::ModulesDir => "OpenSSL_version(OPENSSL_MODULES_DIR)",
        }
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keys for the info-query family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoKey {
    ConfigDir,
    EnginesDir,
    ModulesDir,
}

impl InfoKey {
    /// All info keys, in report order.
    pub const ALL: [Self; 3] = [Self::ConfigDir, Self::EnginesDir, Self::ModulesDir];

    /// Name of the C constant selecting this aspect.
    pub const fn constant_name(self) -> &'static str {
        match self {
            Self::ConfigDir => "OPENSSL_INFO_CONFIG_DIR",
            Self::EnginesDir => "OPENSSL_INFO_ENGINES_DIR",
            Self::ModulesDir => "OPENSSL_INFO_MODULES_DIR",
        }
    }

    /// Label printed in front of the value.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ConfigDir => "OPENSSL_info(CONFIG_DIR)",
            Self::EnginesDir => "OPENSSL_info(ENGINES_DIR)",
            Self::ModulesDir => "OPENSSL_info(MODULES_DIR)",
        }
    }
}

impl fmt::Display for InfoKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn version_labels_wrap_constant_names() {
        for key in VersionKey::ALL {
            assert_eq!(
                key.label(),
                format!("OpenSSL_version({})", key.constant_name())
            );
        }
    }

    #[test]
    fn info_labels_drop_the_info_prefix() {
        for key in InfoKey::ALL {
            let suffix = key
                .constant_name()
                .strip_prefix("OPENSSL_INFO_")
                .expect("info constants share a prefix");
            assert_eq!(key.label(), format!("OPENSSL_info({suffix})"));
        }
    }

    #[test]
    fn key_lists_have_no_duplicates() {
        let versions: HashSet<_> = VersionKey::ALL.iter().collect();
        let infos: HashSet<_> = InfoKey::ALL.iter().collect();
        assert_eq!(versions.len(), 7);
        assert_eq!(infos.len(), 3);
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(VersionKey::BuiltOn.to_string(), "OpenSSL_version(OPENSSL_BUILT_ON)");
        assert_eq!(InfoKey::ConfigDir.to_string(), "OPENSSL_info(CONFIG_DIR)");
    }
}
