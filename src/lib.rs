#[allow(non_snake_case)]
pub mod Nozzle;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
