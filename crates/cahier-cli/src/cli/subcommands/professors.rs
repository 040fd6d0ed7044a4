use cahier_core::enums::Role;
use clap::{Args, Subcommand};

use super::ListArgs;

/// Professor account commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfessorCommands {
    /// List professors.
    List(ListArgs),
    /// Show one professor.
    Get { id: u64 },
    /// Create a professor account.
    Create(ProfessorArgs),
    /// Replace a professor's details. Omit --password to keep the current one.
    Update {
        id: u64,
        #[command(flatten)]
        fields: ProfessorArgs,
    },
    /// Delete a professor account.
    Delete { id: u64 },
}

#[derive(Clone, Debug, Args)]
pub struct ProfessorArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// At least 8 characters; required on create.
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long, default_value = "professeur")]
    pub role: Role,
}
