use crate::Nozzle::nozzle_solver::{NozzleSolution, solve_nozzle};
use crate::Nozzle::nozzle_task::{NozzleError, NozzleInput, create_template};
use crate::cli::nozzle_help::NOZZLE_HELPER;
use log::info;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const TEMPLATE_NAME: &str = "nozzle_task.json";

/// Asks for one value until it parses. Closed input is an error.
pub fn prompt_value<R, W, T>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
) -> Result<T, NozzleError>
where
    R: BufRead,
    W: Write,
    T: FromStr,
{
    loop {
        write!(writer, "\x1b[36m{}\x1b[0m", message)?;
        writer.flush()?;
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(NozzleError::InputClosed(message.trim_end().to_string()));
        }
        writeln!(writer)?;
        match line.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(writer, "Invalid value '{}', please try again.", line.trim())?,
        }
    }
}

/// The six prompts, always in this order: left boundary, right boundary,
/// number of grid points, diffusion coefficient, time step, grid step.
pub fn collect_input<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<NozzleInput, NozzleError> {
    let left_boundary = prompt_value(
        reader,
        writer,
        "Enter the left boundary condition of the X array: ",
    )?;
    let right_boundary = prompt_value(
        reader,
        writer,
        "Enter the right boundary condition of the X array: ",
    )?;
    let grid_point_count = prompt_value(
        reader,
        writer,
        "Enter the total number of grid points of the X array: ",
    )?;
    let diffusion_coeff = prompt_value(reader, writer, "Enter the diffusion coefficient (a): ")?;
    let time_step = prompt_value(reader, writer, "Enter the time step (delta t): ")?;
    let grid_step = prompt_value(reader, writer, "Enter the grid step (delta x): ")?;
    Ok(NozzleInput::new(
        left_boundary,
        right_boundary,
        grid_point_count,
        diffusion_coeff,
        time_step,
        grid_step,
    ))
}

/// Prompts on the terminal, solves and prints the report.
pub fn run_from_prompts() -> Result<NozzleSolution, NozzleError> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();
    let input = collect_input(&mut reader, &mut writer)?;
    solve_and_print(&input)
}

pub fn run_from_file<P: AsRef<Path>>(path: P) -> Result<NozzleSolution, NozzleError> {
    let input = NozzleInput::from_file(path)?;
    solve_and_print(&input)
}

fn solve_and_print(input: &NozzleInput) -> Result<NozzleSolution, NozzleError> {
    let solution = solve_nozzle(input)?;
    solution.pretty_print();
    Ok(solution)
}

pub fn nozzle_menu() {
    loop {
        println!("\n=== Nozzle Flow (MacCormack) ===");
        println!("\x1b[33m1. Enter parameters\x1b[0m");
        println!("\x1b[33m2. Solve from file\x1b[0m");
        println!("\x1b[33m3. Generate template\x1b[0m");
        println!("\x1b[33m4. Read help\x1b[0m");
        println!("\x1b[33m0. Exit\x1b[0m");
        print!("\x1b[36mEnter your choice: \x1b[0m");
        let _ = io::stdout().flush();

        let Some(choice) = get_user_input() else {
            break;
        };
        match choice.trim() {
            "1" => report_error(run_from_prompts()),
            "2" => solve_from_file(),
            "3" => match create_template(TEMPLATE_NAME) {
                Ok(()) => println!("Template generated successfully: {}", TEMPLATE_NAME),
                Err(e) => println!("Failed to generate template: {}", e),
            },
            "4" => show_help(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn solve_from_file() {
    print!("\x1b[36mEnter file path: \x1b[0m");
    let _ = io::stdout().flush();
    let Some(file_path) = get_user_input() else {
        return;
    };
    let path = PathBuf::from(file_path.trim());

    if path.exists() {
        info!("solving task file {:?}", path);
        report_error(run_from_file(&path));
    } else {
        println!("File not found: {}", file_path.trim());
    }
}

fn report_error(result: Result<NozzleSolution, NozzleError>) {
    if let Err(e) = result {
        println!("Error: {}", e);
    }
}

fn show_help() {
    println!("\n=== Nozzle Flow Help ===");
    println!("{}", NOZZLE_HELPER);
    println!("\nPress Enter to return to menu...");
    let _ = get_user_input();
}

/// `None` once stdin is closed
fn get_user_input() -> Option<String> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_collect_input_order() {
        let mut reader = Cursor::new("0\n1\n5\n0.5\n0.01\n0.25\n");
        let mut out = Vec::new();
        let input = collect_input(&mut reader, &mut out).unwrap();
        assert_eq!(input, NozzleInput::new(0.0, 1.0, 5, 0.5, 0.01, 0.25));

        let text = String::from_utf8(out).unwrap();
        let left = text.find("left boundary").unwrap();
        let right = text.find("right boundary").unwrap();
        let points = text.find("grid points").unwrap();
        let diffusion = text.find("diffusion coefficient").unwrap();
        let dt = text.find("time step").unwrap();
        let dx = text.find("grid step").unwrap();
        assert!(left < right && right < points && points < diffusion);
        assert!(diffusion < dt && dt < dx);
    }

    #[test]
    fn test_prompt_retries_bad_values() {
        let mut reader = Cursor::new("abc\n\n2.5\n");
        let mut out = Vec::new();
        let value: f32 = prompt_value(&mut reader, &mut out, "value: ").unwrap();
        assert_eq!(value, 2.5);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("please try again").count(), 2);
    }

    #[test]
    fn test_prompt_closed_input() {
        let mut reader = Cursor::new("0\n1\n");
        let mut out = Vec::new();
        assert!(matches!(
            collect_input(&mut reader, &mut out),
            Err(NozzleError::InputClosed(_))
        ));
    }

    #[test]
    fn test_negative_grid_count_reaches_validation() {
        let mut reader = Cursor::new("0\n1\n-4\n0.5\n0.01\n0.25\n");
        let mut out = Vec::new();
        let input = collect_input(&mut reader, &mut out).unwrap();
        assert!(matches!(
            solve_nozzle(&input),
            Err(NozzleError::InvalidGridSize(-4))
        ));
    }
}
