//! # Pretty Printing Module for Nozzle Solutions
//!
//! Plain report: one header line and one line of values per field, 3 decimals,
//! space separated, in the order coordinate, P, predicted P, corrected P, T,
//! predicted T, corrected T, V. Non-finite values are printed as they are.
//!
//! The task summary and the anomaly list are formatted with prettytable.

use super::fields::Field;
use super::maccormack::MacCormackStepper;
use super::nozzle_solver::NozzleSolution;
use super::nozzle_task::NozzleInput;
use prettytable::{Table, row};
use std::io::{self, Write};

/// Values of a field with 3 decimals, separated by single spaces
pub fn format_values(values: &[f32]) -> String {
    values
        .iter()
        .map(|v| format!("{:.3}", v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Header line followed by the values line
pub fn format_field(field: &Field) -> String {
    format!("{}\n{}\n", field.label(), format_values(field.values()))
}

/// `(label, values)` pairs in report order
pub fn report_lines(solution: &NozzleSolution) -> Vec<(&'static str, String)> {
    solution
        .fields()
        .iter()
        .map(|f| (f.label(), format_values(f.values())))
        .collect()
}

pub fn write_report<W: Write>(solution: &NozzleSolution, out: &mut W) -> io::Result<()> {
    for field in solution.fields() {
        writeln!(out, "{}", format_field(field))?;
    }
    Ok(())
}

pub fn task_table(input: &NozzleInput) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Parameter", "Value"]);
    table.add_row(row!["Left boundary", format!("{}", input.left_boundary)]);
    table.add_row(row!["Right boundary", format!("{}", input.right_boundary)]);
    table.add_row(row!["Grid points", input.grid_point_count]);
    table.add_row(row![
        "Diffusion coefficient (a)",
        format!("{}", input.diffusion_coeff)
    ]);
    table.add_row(row!["Time step (dt)", format!("{}", input.time_step)]);
    table.add_row(row!["Grid step (dx)", format!("{}", input.grid_step)]);
    table.add_row(row![
        "Diffusion number (a*dt/dx)",
        format!("{:.6}", MacCormackStepper::from_input(input).diffusion_number())
    ]);
    table
}

pub fn anomaly_table(solution: &NozzleSolution) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Field", "Index", "Value"]);
    for anomaly in &solution.anomalies {
        table.add_row(row![
            anomaly.field.label().trim_end_matches(':'),
            anomaly.index,
            anomaly.value
        ]);
    }
    table
}

impl NozzleSolution {
    /// Prints the task summary, the report and, if any, the numeric anomalies.
    pub fn pretty_print(&self) {
        println!("\n=== NOZZLE TASK SUMMARY ===");
        task_table(&self.input).printstd();
        println!();

        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = write_report(self, &mut handle) {
            log::error!("failed to write report: {}", e);
        }
        drop(handle);

        if self.has_anomalies() {
            println!("Numeric anomalies (negative corrected temperature gives NaN velocity):");
            anomaly_table(self).printstd();
        }
    }
}
