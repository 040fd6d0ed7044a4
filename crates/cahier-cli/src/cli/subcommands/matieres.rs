use clap::{Args, Subcommand};

use super::ListArgs;

/// Matière commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MatiereCommands {
    /// List matières.
    List(ListArgs),
    /// Show one matière.
    Get { id: u64 },
    /// Create a matière.
    Create(MatiereArgs),
    /// Replace a matière.
    Update {
        id: u64,
        #[command(flatten)]
        fields: MatiereArgs,
    },
    /// Delete a matière.
    Delete { id: u64 },
}

#[derive(Clone, Debug, Args)]
pub struct MatiereArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub code: String,
    /// Owning module id.
    #[arg(long)]
    pub module: Option<u64>,
    /// Teaching hours, 0 to 500.
    #[arg(long)]
    pub hours: Option<f64>,
    /// Coefficient, 0 to 10.
    #[arg(long)]
    pub coefficient: Option<f64>,
    #[arg(long)]
    pub description: Option<String>,
}
