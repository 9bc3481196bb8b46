use pixfilter::{cli::Args, logger};
use std::process::ExitCode;

fn main() -> ExitCode {
    logger::init();

    let args = match Args::parse_from_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            // Help and version go to stdout and are not failures.
            _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match pixfilter::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
