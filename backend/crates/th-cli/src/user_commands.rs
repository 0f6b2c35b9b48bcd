use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Register a new account
    Create {
        username: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        /// Skip email verification
        #[arg(long)]
        verified: bool,
        /// Auth group (repeatable)
        #[arg(long = "group")]
        groups: Vec<String>,
    },
    /// List accounts
    List {
        /// Include deactivated accounts
        #[arg(long)]
        all: bool,
    },
    /// Show an account
    Show { username: String },
    /// Print the derived status
    Status { username: String },
    /// Print current and stored checksums
    Checksums {
        username: String,
        /// Recompute and store the checksums
        #[arg(long)]
        store: bool,
    },
    /// Present a verification token
    Verify {
        username: String,
        token: Option<String>,
        /// Verify without checking the token
        #[arg(long)]
        force: bool,
    },
    /// Restart email verification and queue the verification email
    BeginVerification { username: String },
    /// Soft delete an account
    Deactivate { username: String },
    /// Undo a soft delete
    Reactivate { username: String },
    /// Replace the bearer token
    RotateToken { username: String },
    /// Print the bearer token, issuing one if needed
    Token { username: String },
    /// Bind an external bearer token key
    SetToken { username: String, key: String },
    /// Change the password
    SetPassword {
        username: String,
        #[arg(long, conflicts_with = "hashed")]
        password: Option<String>,
        /// Pre-hashed credential stored verbatim
        #[arg(long)]
        hashed: Option<String>,
    },
    /// Queue a password reset email
    ResetPassword { username: String },
    /// Replace the account's auth groups
    Groups {
        username: String,
        groups: Vec<String>,
    },
}
