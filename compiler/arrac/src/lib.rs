//! Arrac - the arraylang interpreter driver.
//!
//! Wires the tokeniser and evaluator to a line-oriented loop over stdin or
//! a batch file. The binary in `main.rs` is a thin wrapper over [`run`].

mod error;
mod options;
mod session;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::sync::Once;

pub use error::CliError;
pub use options::{parse_args, Command, Options, USAGE};
pub use session::{Session, SessionConfig, PROMPT};

/// Crate version, shown in the banner and by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber if `RUST_LOG` is set.
///
/// Output goes to stderr. Setting `ARRA_LOG_TREE` switches to an indented
/// span tree, which is easier to follow for nested evaluation.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("ARRA_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Open a batch file for line-by-line reading.
pub fn open_input(path: &Path) -> Result<BufReader<File>, CliError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| CliError::Open {
            path: path.to_path_buf(),
            source,
        })
}

pub fn write_banner<W: Write>(out: &mut W) -> Result<(), CliError> {
    writeln!(out, "arraylang {VERSION}")?;
    Ok(())
}

/// Run the interpreter for the given arguments (without the program name).
pub fn run<I>(args: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = String>,
{
    let options = match parse_args(args)? {
        Command::Help => {
            print!("{USAGE}");
            return Ok(());
        }
        Command::Version => {
            println!("arra {VERSION}");
            return Ok(());
        }
        Command::Run(options) => options,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !options.quiet {
        write_banner(&mut out)?;
    }
    match &options.file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "batch mode");
            let input = open_input(path)?;
            Session::new(SessionConfig::batch()).run(input, &mut out)
        }
        None => Session::new(SessionConfig::interactive()).run(io::stdin().lock(), &mut out),
    }
}
