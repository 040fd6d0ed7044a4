use clap::{Args, Subcommand};

use super::ListArgs;

/// Groupe commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GroupeCommands {
    /// List groupes.
    List(ListArgs),
    /// Show one groupe.
    Get { id: u64 },
    /// Create a groupe.
    Create(GroupeArgs),
    /// Replace a groupe.
    Update {
        id: u64,
        #[command(flatten)]
        fields: GroupeArgs,
    },
    /// Delete a groupe.
    Delete { id: u64 },
}

#[derive(Clone, Debug, Args)]
pub struct GroupeArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub code: String,
    /// Owning filière id.
    #[arg(long)]
    pub filiere: Option<u64>,
    /// Number of students, 1 to 200.
    #[arg(long, allow_negative_numbers = true)]
    pub capacity: Option<i64>,
    #[arg(long)]
    pub description: Option<String>,
}
