pub mod cli_main;
pub mod cli_nozzle;
pub mod nozzle_help;
