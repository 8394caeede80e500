//! Report handler.
//!
//! Writes the version report for the injected library to stdout.

use std::io::Write;

use anyhow::{Context, Result};
use sslver_core::{LibraryInfoPort, write_report};

/// Execute the report against stdout.
pub fn execute(lib: &dyn LibraryInfoPort) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_to(lib, &mut out)
}

/// Execute the report against any writer.
pub fn execute_to<W: Write>(lib: &dyn LibraryInfoPort, out: &mut W) -> Result<()> {
    write_report(lib, out).context("Failed to print version report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sslver_core::{InfoKey, VersionKey};

    struct UnconfiguredLibrary;

    impl LibraryInfoPort for UnconfiguredLibrary {
        fn version(&self, key: VersionKey) -> String {
            match key {
                VersionKey::Version => "OpenSSL 3.0.0".to_string(),
                _ => String::new(),
            }
        }

        fn info(&self, _key: InfoKey) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_report_written_to_buffer() {
        let mut buf = Vec::new();
        execute_to(&UnconfiguredLibrary, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("=== OpenSSL Version Info Test ===\n"));
        assert!(text.contains("OpenSSL_version(OPENSSL_VERSION): 'OpenSSL 3.0.0'\n"));
        assert!(text.contains("OPENSSL_info(CONFIG_DIR): '(null)'\n"));
        assert!(text.contains("OPENSSL_info(ENGINES_DIR): '(null)'\n"));
        assert!(text.contains("OPENSSL_info(MODULES_DIR): '(null)'\n"));
        assert!(text.ends_with("=== Expected: All values should be empty or null ===\n"));
    }

    #[test]
    fn test_write_failure_carries_context() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = execute_to(&UnconfiguredLibrary, &mut Closed).unwrap_err();
        assert_eq!(err.to_string(), "Failed to print version report");
    }
}
