use clap::{Args, Subcommand};

use super::ListArgs;

/// Module commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ModuleCommands {
    /// List modules.
    List(ListArgs),
    /// Show one module.
    Get { id: u64 },
    /// Create a module.
    Create(ModuleArgs),
    /// Replace a module.
    Update {
        id: u64,
        #[command(flatten)]
        fields: ModuleArgs,
    },
    /// Delete a module.
    Delete { id: u64 },
}

#[derive(Clone, Debug, Args)]
pub struct ModuleArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub code: String,
    /// Owning filière id.
    #[arg(long)]
    pub filiere: Option<u64>,
    #[arg(long)]
    pub description: Option<String>,
}
