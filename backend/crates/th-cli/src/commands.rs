use crate::{route_commands::RouteCommands, user_commands::UserCommands};

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Account lifecycle operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// User route table
    Route {
        #[command(subcommand)]
        action: RouteCommands,
    },
}
