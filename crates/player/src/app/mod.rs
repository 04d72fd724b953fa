use std::process::ExitCode;

mod bootstrap;
mod loop_runner;
mod render;

pub(crate) fn run() -> ExitCode {
    bootstrap::init_tracing();

    match bootstrap::parse_options(std::env::args().skip(1)) {
        Ok(bootstrap::Command::Play(options)) => loop_runner::run(options),
        Ok(bootstrap::Command::Help) => {
            bootstrap::print_usage();
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
