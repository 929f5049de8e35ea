// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs loads the flight network once
// and dispatches to these handlers.

pub mod airports;
pub mod route;
pub mod stats;
