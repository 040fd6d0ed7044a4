use cahier_core::enums::Role;
use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Sign in and store the session.
    Login(AuthLoginArgs),
    /// Sign out and clear the stored session.
    Logout,
    /// Ask the server who the stored token belongs to.
    Whoami,
    /// Show the locally stored session.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    /// Account password.
    #[arg(long, env = "CAHIER_PASSWORD", hide_env_values = true)]
    pub password: String,
    /// Refuse the login unless the account has this role (admin, professeur).
    #[arg(long)]
    pub role: Option<Role>,
}
