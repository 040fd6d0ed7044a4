use clap::Args;

pub mod assignments;
pub mod auth;
pub mod filieres;
pub mod groupes;
pub mod logbooks;
pub mod matieres;
pub mod me;
pub mod modules;
pub mod professors;

pub use assignments::AssignmentCommands;
pub use auth::AuthCommands;
pub use filieres::FiliereCommands;
pub use groupes::GroupeCommands;
pub use logbooks::LogbookCommands;
pub use matieres::MatiereCommands;
pub use me::MeCommands;
pub use modules::ModuleCommands;
pub use professors::ProfessorCommands;

/// Paging and local filtering shared by every `list` subcommand.
#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Page to fetch (defaults to general.default_page).
    #[arg(long)]
    pub page: Option<u32>,
    /// Case-insensitive filter applied to the fetched page.
    #[arg(short, long)]
    pub search: Option<String>,
}
