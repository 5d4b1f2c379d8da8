use NozzleFlow::Utils::logger::{LogSettings, init_logging};
use NozzleFlow::cli::cli_main::run_cli;
use std::process::ExitCode;

pub fn main() -> ExitCode {
    init_logging(&LogSettings::from_env());
    let args: Vec<String> = std::env::args().skip(1).collect();
    run_cli(&args)
}
