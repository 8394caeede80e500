//! Command-line adapter for sslver.
//!
//! `main.rs` is the composition root; this library holds the parser, the
//! logging setup and the handlers so they can be tested without a process.
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use sslver_openssl as _;
use tracing as _;

pub mod handlers;
pub mod logging;
pub mod parser;

pub use parser::Cli;
