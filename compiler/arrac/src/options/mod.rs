//! Command-line parsing.

use std::path::PathBuf;

use crate::CliError;

pub const USAGE: &str = "\
Usage: arra [OPTIONS] [FILE]

Evaluates FILE line by line, or reads lines from stdin when no FILE is given.

Options:
  -q, --quiet      Don't print the banner
  -h, --help       Print this help
  -V, --version    Print the version
";

/// What the process was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Help,
    Version,
}

/// Settings for a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Batch file; stdin when absent.
    pub file: Option<PathBuf>,
    pub quiet: bool,
}

/// Parse arguments, not including the program name.
///
/// `--help` and `--version` win over everything after them.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "-q" | "--quiet" => options.quiet = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(CliError::Usage(format!("unknown option: {flag}")));
            }
            _ if options.file.is_some() => {
                return Err(CliError::Usage(format!("unexpected argument: {arg}")));
            }
            _ => options.file = Some(PathBuf::from(arg)),
        }
    }
    Ok(Command::Run(options))
}
