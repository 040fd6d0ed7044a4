use clap::{Args, Subcommand};

use super::ListArgs;

/// Filière commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FiliereCommands {
    /// List filières.
    List(ListArgs),
    /// Show one filière.
    Get { id: u64 },
    /// Create a filière.
    Create(FiliereArgs),
    /// Replace a filière.
    Update {
        id: u64,
        #[command(flatten)]
        fields: FiliereArgs,
    },
    /// Delete a filière.
    Delete { id: u64 },
}

#[derive(Clone, Debug, Args)]
pub struct FiliereArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub code: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}
