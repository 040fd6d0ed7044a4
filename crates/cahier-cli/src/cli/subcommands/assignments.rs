use clap::{Args, Subcommand};

/// Assignment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AssignmentCommands {
    /// List assignments with professor, module, matière and groupe names.
    List {
        #[arg(long)]
        page: Option<u32>,
        /// Filter on any resolved name.
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Assign a professor to teach a matière to a groupe.
    Create(AssignmentArgs),
    /// Remove an assignment.
    Delete { id: u64 },
}

#[derive(Clone, Debug, Args)]
pub struct AssignmentArgs {
    /// Professor (user) id.
    #[arg(long)]
    pub user: Option<u64>,
    #[arg(long)]
    pub module: Option<u64>,
    /// Must belong to --module.
    #[arg(long)]
    pub matiere: Option<u64>,
    #[arg(long)]
    pub groupe: Option<u64>,
}
