//! Core domain for sslver.
//!
//! Owns the attribute keys, the [`LibraryInfoPort`] trait that adapters
//! implement, and the report model that renders the query results. Nothing in
//! this crate talks to the cryptographic library directly.
#![deny(unused_crate_dependencies)]

pub mod error;
pub mod keys;
pub mod ports;
pub mod report;

// Re-export commonly used types for convenience
pub use error::ReportError;
pub use keys::{InfoKey, VersionKey};
pub use ports::LibraryInfoPort;
pub use report::{AttributeValue, ReportLine, VersionReport, write_report};
