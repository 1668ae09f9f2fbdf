//! Arraylang interpreter CLI.

fn main() {
    arrac::init_tracing();

    if let Err(error) = arrac::run(std::env::args().skip(1)) {
        eprintln!("error: {error}");
        if matches!(error, arrac::CliError::Usage(_)) {
            eprintln!();
            eprint!("{}", arrac::USAGE);
        }
        std::process::exit(error.exit_code());
    }
}
