use super::cli_nozzle::{nozzle_menu, run_from_file, run_from_prompts};
use crate::Nozzle::nozzle_task::NozzleError;
use std::io::{self, Write};
use std::process::ExitCode;

/// Entry point of the binary.
///
/// * no arguments - prompt for the six parameters once and print the report
/// * `menu` - interactive menu
/// * anything else - path to a JSON task file
pub fn run_cli(args: &[String]) -> ExitCode {
    let result = match args.first().map(String::as_str) {
        None => run_from_prompts().map(|_| ()),
        Some("menu") => {
            show_main_banner();
            nozzle_menu();
            Ok(())
        }
        Some(path) => run_from_file(path).map(|_| ()),
    };
    if report_outcome(result, &mut io::stderr()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// `true` on success; a failure is printed once to `err_out`.
fn report_outcome<W: Write>(result: Result<(), NozzleError>, err_out: &mut W) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            let _ = writeln!(err_out, "Error: {}", e);
            false
        }
    }
}

fn show_main_banner() {
    println!(
        "\x1b[34m\n Welcome to NozzleFlow: 1D converging-diverging nozzle,\n
    MacCormack predictor-corrector scheme \n\x1b[0m"
    );
}
