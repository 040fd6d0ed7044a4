use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Professors { action } => commands::professors::handle(&action, ctx, flags).await,
        Commands::Filieres { action } => commands::filieres::handle(&action, ctx, flags).await,
        Commands::Modules { action } => commands::modules::handle(&action, ctx, flags).await,
        Commands::Matieres { action } => commands::matieres::handle(&action, ctx, flags).await,
        Commands::Groupes { action } => commands::groupes::handle(&action, ctx, flags).await,
        Commands::Assignments { action } => {
            commands::assignments::handle(&action, ctx, flags).await
        }
        Commands::Logbooks { action } => commands::logbooks::handle(&action, ctx, flags).await,
        Commands::Me { action } => commands::me::handle(&action, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
    }
}
