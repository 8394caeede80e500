//! Main CLI parser.
//!
//! The reporter takes no operands. Flags only affect logging on stderr;
//! stdout always carries the same report.

use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind;

/// Print version and build configuration strings of the linked OpenSSL.
///
/// `--help` and `--version` describe sslver itself and exit without printing
/// the report. Any other invocation prints the report and exits 0, including
/// one with stray operands.
#[derive(Parser, Debug, Default)]
#[command(name = "sslver")]
#[command(about = "Print version and build configuration strings of the linked OpenSSL")]
#[command(version = sslver_build_info::LONG_VERSION)]
#[command(after_help = REPORT_NOTE)]
pub struct Cli {
    /// Enable verbose/debug logging on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Footer of `--help` describing when the report is printed.
pub const REPORT_NOTE: &str = "Without --help or --version the OpenSSL report is printed \
and sslver exits 0; unexpected operands are reported on stderr and ignored.";

/// Result of parsing the command line without ever failing the run.
#[derive(Debug)]
pub enum Invocation {
    /// Print the report.
    Report {
        cli: Cli,
        /// Parser error for operands that were ignored.
        rejected: Option<clap::Error>,
    },
    /// `--help` or `--version`: print this and exit without a report.
    Describe(clap::Error),
}

impl Cli {
    /// Parse `args`, keeping recognised flags when other arguments are rejected.
    pub fn parse_lenient<I, T>(args: I) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match Self::try_parse_from(&args) {
            Ok(cli) => Invocation::Report { cli, rejected: None },
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Invocation::Describe(err)
            }
            Err(err) => {
                let verbose = args
                    .iter()
                    .skip(1)
                    .any(|arg| matches!(arg.to_str(), Some("-v" | "--verbose")));
                Invocation::Report {
                    cli: Self { verbose },
                    rejected: Some(err),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn report_cli(args: &[&str]) -> (Cli, Option<clap::Error>) {
        match Cli::parse_lenient(args.iter().copied()) {
            Invocation::Report { cli, rejected } => (cli, rejected),
            Invocation::Describe(err) => panic!("expected a report, got {:?}", err.kind()),
        }
    }

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_is_quiet() {
        let (cli, rejected) = report_cli(&["sslver"]);
        assert!(!cli.verbose);
        assert!(rejected.is_none());
    }

    #[test]
    fn test_verbose_flag() {
        assert!(report_cli(&["sslver", "-v"]).0.verbose);
        assert!(report_cli(&["sslver", "--verbose"]).0.verbose);
    }

    #[test]
    fn test_operands_are_rejected_but_still_report() {
        let (cli, rejected) = report_cli(&["sslver", "extra"]);
        assert!(!cli.verbose);
        assert_eq!(
            rejected.map(|e| e.kind()),
            Some(ErrorKind::UnknownArgument)
        );
    }

    #[test]
    fn test_verbose_survives_rejected_operand() {
        let (cli, rejected) = report_cli(&["sslver", "-v", "extra"]);
        assert!(cli.verbose);
        assert!(rejected.is_some());

        let (cli, _) = report_cli(&["sslver", "extra", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_version_flag_reports_build_info() {
        match Cli::parse_lenient(["sslver", "--version"]) {
            Invocation::Describe(err) => {
                assert_eq!(err.kind(), ErrorKind::DisplayVersion);
                assert!(err.to_string().contains(sslver_build_info::LONG_VERSION));
            }
            Invocation::Report { .. } => panic!("--version must not print the report"),
        }
    }

    #[test]
    fn test_help_explains_when_report_is_printed() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains(REPORT_NOTE));
        assert!(matches!(
            Cli::parse_lenient(["sslver", "--help"]),
            Invocation::Describe(_)
        ));
    }
}
