//! CLI handlers
//!
//! Argument parsing structures, subcommand implementations and the router
//! that connects them.

pub mod args;
pub mod commands;
pub mod router;

pub use args::{Cli, Commands};
pub use router::execute_command;

/// Map the repeated `-v` flag to a tracing filter directive.
pub fn get_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        2 => "trace",
        _ => "trace,hyper=debug,reqwest=debug", // -vvv shows everything including dependencies
    }
}
