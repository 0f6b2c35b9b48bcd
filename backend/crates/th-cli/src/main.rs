//! th - termhub account administration
//!
//! Runs account lifecycle operations directly against the configured
//! database and prints the result as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Register an account and start email verification
//! th user create ana --email ana@example.org
//! th user begin-verification ana
//!
//! # Complete verification with the emailed token
//! th user verify ana 8f6c1c9e-...
//!
//! # Soft delete and restore
//! th user deactivate ana
//! th user reactivate ana
//!
//! # Match a request path against the user routes
//! th route resolve /users/ana/sources/CIEL/
//! ```

use th_cli::{Cli, run};

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
