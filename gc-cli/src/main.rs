//! gc: whitespace and capitalization normalizer

use clap::error::ErrorKind;
use gc_cli::cli::Cli;
use gc_cli::context::ProgramContext;
use gc_cli::error::exit_code_of;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<_> = std::env::args_os().collect();
    let context = ProgramContext::from_arg0(args.first().map(|arg| arg.as_os_str()));

    let cli = match Cli::try_parse_with(&context, args) {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stderr like every other diagnostic
            eprint!("{}", err.render());
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(2),
            };
        }
    };

    cli.init_logging();

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("Failed: {err:?}");
            // Nowhere left to report a failure to write to stderr
            context.report(&mut io::stderr(), &err).ok();
            ExitCode::from(exit_code_of(&err))
        }
    }
}
