use logofetch_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Parse first so --help/--version never touch the log file.
    let cli = Cli::parse_args();

    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    std::process::exit(cli.run());
}
