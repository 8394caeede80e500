//! Version report model and rendering.
//!
//! A [`VersionReport`] is collected from a [`LibraryInfoPort`] in one pass and
//! rendered as line-oriented text meant for humans and logs, not parsers.

use std::fmt;
use std::io::Write;

use tracing::{debug, info};

use crate::error::ReportError;
use crate::keys::{InfoKey, VersionKey};
use crate::ports::LibraryInfoPort;

/// Header opening the version-query section.
pub const VERSION_HEADER: &str = "=== OpenSSL Version Info Test ===";

/// Header opening the info-query section.
pub const INFO_HEADER: &str = "=== OPENSSL_info() Test ===";

/// Trailer stating the expectation. Informational only; never enforced.
pub const TRAILER: &str = "=== Expected: All values should be empty or null ===";

/// Placeholder rendered for an absent value.
pub const NULL_PLACEHOLDER: &str = "(null)";

/// Result of a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// A string, possibly empty.
    Text(String),
    /// The library returned null.
    Absent,
}

impl AttributeValue {
    /// True when the value is absent or an empty string.
    pub fn is_empty_or_null(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Absent => true,
        }
    }
}

impl From<Option<String>> for AttributeValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Absent, Self::Text)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Absent => f.write_str(NULL_PLACEHOLDER),
        }
    }
}

/// One `label: 'value'` line of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: AttributeValue,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: '{}'", self.label, self.value)
    }
}

/// Snapshot of every version and info attribute, in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionReport {
    pub version_lines: Vec<ReportLine>,
    pub info_lines: Vec<ReportLine>,
}

impl VersionReport {
    /// Query each version key, then each info key, exactly once.
    pub fn collect(lib: &dyn LibraryInfoPort) -> Self {
        let version_lines = VersionKey::ALL
            .into_iter()
            .map(|key| {
                let text = lib.version(key);
                debug!(key = key.constant_name(), len = text.len(), "version query");
                ReportLine {
                    label: key.label(),
                    value: AttributeValue::Text(text),
                }
            })
            .collect();

        let info_lines = InfoKey::ALL
            .into_iter()
            .map(|key| {
                let value = AttributeValue::from(lib.info(key));
                debug!(
                    key = key.constant_name(),
                    present = !matches!(value, AttributeValue::Absent),
                    "info query"
                );
                ReportLine {
                    label: key.label(),
                    value,
                }
            })
            .collect();

        Self {
            version_lines,
            info_lines,
        }
    }

    /// Whether the trailer's expectation holds for this snapshot.
    pub fn all_empty_or_null(&self) -> bool {
        self.version_lines
            .iter()
            .chain(&self.info_lines)
            .all(|line| line.value.is_empty_or_null())
    }
}

impl fmt::Display for VersionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{VERSION_HEADER}")?;
        writeln!(f)?;
        for line in &self.version_lines {
            writeln!(f, "{line}")?;
        }

        writeln!(f)?;
        writeln!(f, "{INFO_HEADER}")?;
        writeln!(f)?;
        for line in &self.info_lines {
            writeln!(f, "{line}")?;
        }

        writeln!(f)?;
        writeln!(f, "{TRAILER}")
    }
}

/// Collect a report from `lib` and write it to `out`.
///
/// The expectation stated by the trailer is logged, never enforced.
pub fn write_report<W: Write>(lib: &dyn LibraryInfoPort, out: &mut W) -> Result<(), ReportError> {
    let report = VersionReport::collect(lib);
    write!(out, "{report}")?;
    out.flush()?;

    info!(
        version_lines = report.version_lines.len(),
        info_lines = report.info_lines.len(),
        all_empty_or_null = report.all_empty_or_null(),
        "report written"
    );
    Ok(())
}
