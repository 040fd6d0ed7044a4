use clap::Subcommand;

use crate::cli::subcommands::{
    AssignmentCommands, AuthCommands, FiliereCommands, GroupeCommands, LogbookCommands,
    MatiereCommands, MeCommands, ModuleCommands, ProfessorCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign out and inspect the session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Professor accounts (admin).
    Professors {
        #[command(subcommand)]
        action: ProfessorCommands,
    },
    /// Filières (admin).
    Filieres {
        #[command(subcommand)]
        action: FiliereCommands,
    },
    /// Modules (admin).
    Modules {
        #[command(subcommand)]
        action: ModuleCommands,
    },
    /// Matières (admin).
    Matieres {
        #[command(subcommand)]
        action: MatiereCommands,
    },
    /// Groupes (admin).
    Groupes {
        #[command(subcommand)]
        action: GroupeCommands,
    },
    /// Professor teaching assignments (admin).
    Assignments {
        #[command(subcommand)]
        action: AssignmentCommands,
    },
    /// Review submitted logbooks (admin).
    Logbooks {
        #[command(subcommand)]
        action: LogbookCommands,
    },
    /// The signed-in professor's classes and logbooks.
    Me {
        #[command(subcommand)]
        action: MeCommands,
    },
    /// Admin dashboard counters.
    Dashboard,
}
