//! th-cli library
//!
//! Command definitions and their execution, shared by the `th` binary and
//! the tests.

pub mod cli;
pub mod command_context;
pub mod commands;
pub mod error;
pub mod logger;
pub mod output;
pub mod route_commands;
pub mod runner;
pub mod user_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use command_context::CommandContext;
pub use commands::Commands;
pub use error::{CliError, CliErrorResult};
pub use route_commands::RouteCommands;
pub use runner::{execute_route, execute_user, run};
pub use user_commands::UserCommands;
