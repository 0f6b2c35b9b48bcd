use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum RouteCommands {
    /// Match a path against the /users/ routes
    Resolve {
        /// Request path, e.g. /users/ana/sources/CIEL/
        path: String,
    },
}
