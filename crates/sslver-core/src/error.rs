//! Error types for report generation.

use thiserror::Error;

/// Errors that can occur while emitting a report.
///
/// Querying the library never fails; only the output sink can.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the output sink failed (closed pipe, full disk, ...).
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
