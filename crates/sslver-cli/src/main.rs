//! CLI entry point - the composition root.
//!
//! Wires the OpenSSL adapter into the report handler. The process always
//! exits with status 0; failures are logged to stderr.

use std::process::ExitCode;

use sslver_cli::parser::Invocation;
use sslver_cli::{Cli, handlers, logging};
use sslver_openssl::OpenSslLibrary;

fn main() -> ExitCode {
    let cli = match Cli::parse_lenient(std::env::args_os()) {
        Invocation::Describe(info) => {
            let _ = info.print();
            return ExitCode::SUCCESS;
        }
        Invocation::Report { cli, rejected } => {
            // Operands are ignored rather than turned into a failing status.
            if let Some(err) = rejected {
                let _ = err.print();
            }
            cli
        }
    };

    logging::init_tracing(cli.verbose);

    let lib = OpenSslLibrary::new();
    if let Err(e) = handlers::report::execute(&lib) {
        tracing::error!("{e:#}");
    }

    ExitCode::SUCCESS
}
